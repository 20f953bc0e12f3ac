use anyhow::anyhow;
use glam::Vec3;
use hecs::{Entity, World};
use rapier3d::na::Matrix3x1;
use rapier3d::prelude::*;

use crate::{
    components::{Collider as ColliderComponent, RigidBody as RigidBodyComponent},
    ShooResult, DEFAULT_REFRESH_RATE,
};

/// Everything `rapier` needs to step one physics world.
pub struct PhysicsContext {
    pub physics_pipeline: PhysicsPipeline,
    pub gravity: Matrix3x1<f32>,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
    pub integration_parameters: IntegrationParameters,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = 1. / DEFAULT_REFRESH_RATE;

        PhysicsContext {
            physics_pipeline: PhysicsPipeline::new(),
            gravity: Vector::zeros(),
            colliders: ColliderSet::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            integration_parameters,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsContext {
    /// A physics world with the given gravity and solver iteration count
    pub fn new(gravity: Vec3, solver_iterations: usize) -> Self {
        let mut physics_context = PhysicsContext::default();
        physics_context.gravity = Vector::new(gravity.x, gravity.y, gravity.z);
        physics_context
            .integration_parameters
            .max_velocity_iterations = solver_iterations.max(1);
        physics_context
    }

    pub fn update(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    pub fn create_rigid_body_and_collider(
        &mut self,
        entity: Entity,
        rigid_body: RigidBody,
        mut collider: Collider,
    ) -> (RigidBodyComponent, ColliderComponent) {
        collider.user_data = entity.to_bits().get() as _;
        let rigid_body_handle = self.rigid_bodies.insert(rigid_body);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, rigid_body_handle, &mut self.rigid_bodies);

        (
            RigidBodyComponent::new(rigid_body_handle),
            ColliderComponent::new(collider_handle),
        )
    }

    pub fn get_rigid_body<'a>(
        &'a mut self,
        world: &World,
        entity: Entity,
    ) -> ShooResult<&'a mut RigidBody> {
        let rigid_body_handle = world.get::<&RigidBodyComponent>(entity)?.handle;
        self.rigid_bodies
            .get_mut(rigid_body_handle)
            .ok_or_else(|| anyhow!("Unable to get Rigid Body for handle!").into())
    }

    pub fn get_collider<'a>(
        &'a mut self,
        world: &World,
        entity: Entity,
    ) -> ShooResult<&'a mut Collider> {
        let collider_handle = world.get::<&ColliderComponent>(entity)?.handle;
        self.colliders
            .get_mut(collider_handle)
            .ok_or_else(|| anyhow!("Unable to get Collider for handle!").into())
    }
}
