#![allow(missing_docs)]
pub mod controllers;
pub mod debug;
pub mod physics;
pub mod pointers;
pub mod update_global_transform;
pub mod update_global_transform_with_parent;
pub mod update_local_transform_with_rigid_body;

pub use controllers::{controllers_system, ControllerChange};
pub use debug::debug_system;
pub use physics::physics_system;
pub use pointers::pointers_system;
pub use update_global_transform::update_global_transform_system;
pub use update_global_transform_with_parent::update_global_transform_with_parent_system;
pub use update_local_transform_with_rigid_body::update_local_transform_with_rigid_body_system;

use hecs::World;

/// Bring every [`crate::components::GlobalTransform`] up to date with the [`crate::components::LocalTransform`]s.
///
/// Run this once per frame after anything that moves entities.
pub fn update_transforms(world: &mut World) {
    update_global_transform_system(world);
    update_global_transform_with_parent_system(world);
}
