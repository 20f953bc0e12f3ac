use crate::components::{GlobalTransform, LocalTransform, Parent};
use hecs::World;

/// Update global transform with parent transform system
/// Walks through each entity that has a Parent and composes the LocalTransforms of its ancestors with its own
pub fn update_global_transform_with_parent_system(world: &mut World) {
    // Views allow the borrow checking and storage look-up to be done once rather than per-entity as in `World::get`.
    let mut parents = world.query::<&Parent>();
    let parents = parents.view();
    let mut locals = world.query::<&LocalTransform>();
    let locals = locals.view();

    for (_entity, (parent, local_transform, absolute)) in world
        .query::<(&Parent, &LocalTransform, &mut GlobalTransform)>()
        .iter()
    {
        // Walk the hierarchy from this entity to the root. This repeats work for deep hierarchies, but avoids
        // tracking child lists.
        let mut relative = local_transform.to_affine();
        let mut ancestor = parent.0;
        loop {
            match locals.get(ancestor) {
                Some(ancestor_transform) => relative = ancestor_transform.to_affine() * relative,
                None => {
                    log::warn!("[SHOO_TRANSFORM] Ancestor {ancestor:?} has no LocalTransform");
                    break;
                }
            }
            match parents.get(ancestor) {
                Some(next) => ancestor = next.0,
                None => break,
            }
        }
        absolute.0 = relative;
    }
}
