use hecs::World;

use crate::{
    components::{LocalTransform, RigidBody},
    contexts::PhysicsContext,
    util::isometry_to_affine,
};

/// Walks through each pair of `RigidBody`s and `LocalTransform`s and sets the `LocalTransform` accordingly.
///
/// Fixed bodies never move, so their entities are left alone. Scale is never touched.
pub fn update_local_transform_with_rigid_body_system(
    world: &mut World,
    physics_context: &PhysicsContext,
) {
    for (entity, (rigid_body, local_transform)) in
        world.query_mut::<(&RigidBody, &mut LocalTransform)>()
    {
        let rigid_body = match physics_context.rigid_bodies.get(rigid_body.handle) {
            Some(rigid_body) => rigid_body,
            None => {
                log::warn!("[SHOO_PHYSICS] {entity:?} refers to a rigid body that no longer exists");
                continue;
            }
        };
        if rigid_body.is_fixed() {
            continue;
        }

        let (_, rotation, translation) =
            isometry_to_affine(rigid_body.position()).to_scale_rotation_translation();
        local_transform.translation = translation;
        local_transform.rotation = rotation;
    }
}
