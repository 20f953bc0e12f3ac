use std::f32::consts::FRAC_PI_2;

use shoo::{
    components::{
        stage::add_stage, Camera, GlobalTransform, Info, LocalTransform, Light, Mesh, Visible,
    },
    contexts::{InputContext, PhysicsContext},
    glam::Vec3,
    hecs::{Entity, World},
    rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder},
    systems::{controllers_system, debug_system, physics_system, update_transforms},
    util::isometry_from_affine,
    workers::AssetEvent,
    AssetLoader, ShooResult,
};

use crate::{
    config::{GameConfig, SwatterMode},
    resources::{GameContext, GameEvent, ModelRole},
    systems::{fly_system, loading_system, swatter_system},
};

use super::{add_camera, LIGHT_DIRECTION};

/// How wide (and deep) the ground is
pub const GROUND_SIZE: f32 = 25.;

/// The fly, the swatter, and some ground for them to fall on
pub struct GameScene {
    pub world: World,
    pub physics_context: PhysicsContext,
    pub stage: Entity,
    pub ground: Entity,
    pub game_context: GameContext,
    config: GameConfig,
}

impl GameScene {
    /// Build the scene and start loading the fly. In [`SwatterMode::Fixed`], the swatter is loaded straight away too.
    pub fn new(config: &GameConfig, loader: &mut dyn AssetLoader) -> ShooResult<Self> {
        let mut world = World::new();
        let mut physics_context = PhysicsContext::new(config.gravity, config.solver_iterations);
        let stage = add_stage(&mut world);

        add_camera(
            &mut world,
            Camera {
                check_collisions: true,
                apply_gravity: true,
            },
        );
        let ground = add_ground(&mut world, &mut physics_context)?;
        world.spawn((Light::hemispheric(LIGHT_DIRECTION), Info::named("Light")));

        let mut game_context = GameContext::new(config.fly_start);
        let id = loader.load_model(config.fly_source());
        game_context.pending.insert(id, ModelRole::Fly);
        if config.swatter_mode == SwatterMode::Fixed {
            let id = loader.load_model(config.swatter_source());
            game_context.pending.insert(id, ModelRole::Swatter);
        }

        update_transforms(&mut world);

        Ok(Self {
            world,
            physics_context,
            stage,
            ground,
            game_context,
            config: config.clone(),
        })
    }

    /// Run one frame of the game
    pub fn tick(
        &mut self,
        input_context: &InputContext,
        asset_events: Vec<AssetEvent>,
        loader: &mut dyn AssetLoader,
    ) -> ShooResult<Option<GameEvent>> {
        let world = &mut self.world;
        let game_context = &mut self.game_context;
        let config = &self.config;

        // Handle input
        let changes = controllers_system(world, input_context, self.stage);
        swatter_system(&changes, game_context, config, loader);

        // Bring in anything that's finished loading
        loading_system(world, game_context, config, asset_events)?;

        // Game logic
        let event = fly_system(world, game_context, config)?;

        // Physics
        physics_system(&mut self.physics_context, world);

        // Update the world
        update_transforms(world);
        debug_system(world, input_context);

        Ok(event)
    }
}

/// A flat, fixed slab for things to land on
fn add_ground(world: &mut World, physics_context: &mut PhysicsContext) -> ShooResult<Entity> {
    let mut local_transform = LocalTransform::default();
    local_transform.rotate(Vec3::X, FRAC_PI_2);

    let ground = world.spawn((
        Info::named("Ground"),
        Mesh::plane(GROUND_SIZE, GROUND_SIZE),
        local_transform,
        GlobalTransform::from(local_transform),
        Visible {},
    ));

    let half = GROUND_SIZE / 2.;
    let rigid_body = RigidBodyBuilder::fixed()
        .position(isometry_from_affine(&local_transform.to_affine()))
        .build();
    // Mass 0, so it never moves.
    let collider = ColliderBuilder::cuboid(half, half, 0.01)
        .friction(1.0)
        .restitution(0.0)
        .build();
    let components = physics_context.create_rigid_body_and_collider(ground, rigid_body, collider);
    world.insert(ground, components)?;

    Ok(ground)
}
