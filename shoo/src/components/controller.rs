use hecs::Entity;
use serde::{Deserialize, Serialize};

/// A component that represents the "side" or "handedness" that an entity is on
/// Used by components such as [`Pointer`] and [`Grip`] to identify which controller they should map to
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

impl Handedness {
    /// Both hands, left first
    pub const BOTH: [Handedness; 2] = [Handedness::Left, Handedness::Right];
}

/// The aiming ray of a tracked controller. The ray points down the entity's local -Z axis.
///
/// Added and removed by [`crate::systems::controllers_system`] as controllers connect and disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    /// Which hand is the pointer in?
    pub handedness: Handedness,
    /// The grip of the same controller, if the runtime reported one
    pub grip: Option<Entity>,
}

/// Where the player's hand is holding a tracked controller. Parent things to this to have them held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grip {
    /// Which hand is holding it?
    pub handedness: Handedness,
}
