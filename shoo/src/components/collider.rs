use rapier3d::prelude::ColliderHandle;

/// A component that adds a `rapier` collider to an entity.
/// Essentially a wrapper around `ColliderHandle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Handle to the `rapier` Collider
    pub handle: ColliderHandle,
}

impl Collider {
    /// Create a new collider
    pub fn new(handle: ColliderHandle) -> Collider {
        Collider { handle }
    }
}
