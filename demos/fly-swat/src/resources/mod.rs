pub mod game_context;
pub mod game_state;

pub use game_context::{GameContext, ModelRole};
pub use game_state::{GameEvent, GameState};
