use shoo::{
    components::Handedness, systems::ControllerChange, AssetLoader,
};

use crate::{
    config::{GameConfig, SwatterMode},
    resources::{GameContext, ModelRole},
};

/// The swatter lives in the right hand.
pub const SWATTER_HAND: Handedness = Handedness::Right;

/// Swatter system
/// Asks for the swatter when the right controller turns up, and forgets it when the controller goes away.
///
/// Controller removal has already despawned anything the controller was holding, so all that's left to do is
/// clear our references.
pub fn swatter_system(
    changes: &[ControllerChange],
    game_context: &mut GameContext,
    config: &GameConfig,
    loader: &mut dyn AssetLoader,
) {
    if config.swatter_mode != SwatterMode::Controller {
        return;
    }

    for change in changes {
        match *change {
            ControllerChange::Added {
                handedness: SWATTER_HAND,
                grip,
                pointer,
            } => {
                game_context.swatter_anchor = Some(grip.unwrap_or(pointer));
                if game_context.swatter.is_none() && !game_context.is_pending(ModelRole::Swatter) {
                    let id = loader.load_model(config.swatter_source());
                    game_context.pending.insert(id, ModelRole::Swatter);
                }
            }
            ControllerChange::Removed {
                handedness: SWATTER_HAND,
            } => {
                if game_context.swatter.take().is_some() {
                    log::info!("[FLY_SWAT] Controller went away and took the swatter with it");
                }
                game_context.swatter_anchor = None;
            }
            _ => {}
        }
    }
}
