use hecs::World;

use crate::contexts::PhysicsContext;

use super::update_local_transform_with_rigid_body_system;

/// Step the physics simulation, then copy the new rigid body poses back onto their entities.
pub fn physics_system(physics_context: &mut PhysicsContext, world: &mut World) {
    // TODO: step with the real frame delta once frames can be dropped; for now every tick is one headset frame
    physics_context.update();
    update_local_transform_with_rigid_body_system(world, physics_context);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LocalTransform;
    use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder, Vector};

    #[test]
    fn test_physics_system_moves_entities() {
        let mut physics_context = PhysicsContext::new([0., -1., 0.].into(), 10);
        let mut world = World::new();

        let entity = world.spawn((LocalTransform::from_translation([0., 5., 0.].into()),));
        let components = physics_context.create_rigid_body_and_collider(
            entity,
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(0., 5., 0.))
                .build(),
            ColliderBuilder::ball(0.1).build(),
        );
        world.insert(entity, components).unwrap();

        for _ in 0..72 {
            physics_system(&mut physics_context, &mut world);
        }

        // One second of falling at 1m/s/s covers about half a metre.
        let y = world.get::<&LocalTransform>(entity).unwrap().translation.y;
        assert!(y < 4.6 && y > 4.4, "unexpected height {y}");
    }
}
