use crate::components::{GlobalTransform, LocalTransform, Parent};
use hecs::World;

/// Update global transform system
/// Walks through each entity with no parent and copies its LocalTransform into its GlobalTransform
pub fn update_global_transform_system(world: &mut World) {
    for (_, (local_transform, global_transform)) in world
        .query_mut::<(&LocalTransform, &mut GlobalTransform)>()
        .without::<&Parent>()
    {
        global_transform.0 = local_transform.to_affine();
    }
}
