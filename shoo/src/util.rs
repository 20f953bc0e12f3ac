use glam::{Affine3A, Quat, Vec3};
use hecs::{CommandBuffer, Entity, World};
use rapier3d::na::{Isometry3, Quaternion, Translation3, UnitQuaternion};

use crate::{
    components::{LocalTransform, Parent},
    ShooResult,
};

/// Despawn an entity along with everything parented to it, however deep
pub fn despawn_recursive(world: &mut World, root: Entity) {
    let mut command_buffer = CommandBuffer::new();
    command_buffer.despawn(root);
    despawn_children(world, root, &mut command_buffer);
    command_buffer.run_on(world);
}

fn despawn_children(world: &World, parent: Entity, command_buffer: &mut CommandBuffer) {
    for (child, p) in world.query::<&Parent>().iter() {
        if p.0 == parent {
            command_buffer.despawn(child);
            despawn_children(world, child, command_buffer);
        }
    }
}

/// Every entity below `root` in the hierarchy, not including `root` itself
pub fn descendants(world: &World, root: Entity) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut frontier = vec![root];
    while let Some(parent) = frontier.pop() {
        for (child, p) in world.query::<&Parent>().iter() {
            if p.0 == parent {
                found.push(child);
                frontier.push(child);
            }
        }
    }
    found
}

/// Work out an entity's global transform straight from the [`LocalTransform`]s of it and its ancestors.
///
/// Unlike reading [`crate::components::GlobalTransform`], this reflects changes made earlier in the same frame.
pub fn global_from_local(world: &World, entity: Entity) -> ShooResult<Affine3A> {
    let mut global_from_entity = world.get::<&LocalTransform>(entity)?.to_affine();
    let mut current = entity;
    loop {
        let parent = match world.get::<&Parent>(current) {
            Ok(parent) => parent.0,
            Err(_) => return Ok(global_from_entity),
        };
        global_from_entity = world.get::<&LocalTransform>(parent)?.to_affine() * global_from_entity;
        current = parent;
    }
}

/// Convert a `rapier` isometry into a glam [`Affine3A`]
pub fn isometry_to_affine(isometry: &Isometry3<f32>) -> Affine3A {
    let t = isometry.translation.vector;
    let r = isometry.rotation.coords;
    Affine3A::from_rotation_translation(
        Quat::from_xyzw(r.x, r.y, r.z, r.w),
        Vec3::new(t.x, t.y, t.z),
    )
}

/// Convert a glam [`Affine3A`] into a `rapier` isometry, discarding any scale
pub fn isometry_from_affine(transform: &Affine3A) -> Isometry3<f32> {
    let (_, r, t) = transform.to_scale_rotation_translation();
    Isometry3::from_parts(
        Translation3::new(t.x, t.y, t.z),
        UnitQuaternion::from_quaternion(Quaternion::new(r.w, r.x, r.y, r.z)),
    )
}
