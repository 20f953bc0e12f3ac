use std::collections::HashMap;

use shoo::{
    asset_importer::ModelInstance,
    glam::Vec3,
    hecs::Entity,
    workers::AssetId,
};

/// What a model load was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelRole {
    Fly,
    Swatter,
}

/// Everything the game scene knows about the fly and the swatter.
///
/// Only ever touched from the frame loop. Loads that finish in the background are handed over as
/// [`shoo::workers::AssetEvent`]s and applied by [`crate::systems::loading::loading_system`].
#[derive(Debug, Clone, Default)]
pub struct GameContext {
    pub fly: Option<ModelInstance>,
    pub swatter: Option<ModelInstance>,
    /// What the swatter should be held by: the right grip, or the right pointer if there is no grip
    pub swatter_anchor: Option<Entity>,
    /// Loads we've asked for and not yet heard back about
    pub pending: HashMap<AssetId, ModelRole>,
    /// Where the fly was placed, so we can tell when it's got away
    pub fly_start: Vec3,
}

impl GameContext {
    pub fn new(fly_start: Vec3) -> Self {
        Self {
            fly_start,
            ..Default::default()
        }
    }

    /// Is a load for `role` still in flight?
    pub fn is_pending(&self, role: ModelRole) -> bool {
        self.pending.values().any(|r| *r == role)
    }
}
