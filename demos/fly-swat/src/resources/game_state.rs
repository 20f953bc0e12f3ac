/// Where the player is in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The main menu
    #[default]
    Start,
    /// Swatting
    Game,
    /// The fly got away
    Lose,
    /// The fly didn't get away
    Cutscene,
}

/// Things that move the game from one [`GameState`] to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StartPressed,
    FlySwatted,
    FlyEscaped,
    CutsceneFinished,
}

impl GameState {
    /// The state `event` leads to from here, or `None` if `event` means nothing in this state
    pub fn next(self, event: GameEvent) -> Option<GameState> {
        match (self, event) {
            (GameState::Start | GameState::Lose, GameEvent::StartPressed) => Some(GameState::Game),
            (GameState::Game, GameEvent::FlySwatted) => Some(GameState::Cutscene),
            (GameState::Game, GameEvent::FlyEscaped) => Some(GameState::Lose),
            (GameState::Cutscene, GameEvent::CutsceneFinished) => Some(GameState::Start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [GameState; 4] = [
        GameState::Start,
        GameState::Game,
        GameState::Lose,
        GameState::Cutscene,
    ];
    const EVENTS: [GameEvent; 4] = [
        GameEvent::StartPressed,
        GameEvent::FlySwatted,
        GameEvent::FlyEscaped,
        GameEvent::CutsceneFinished,
    ];

    #[test]
    fn test_transition_table() {
        let allowed = [
            (GameState::Start, GameEvent::StartPressed, GameState::Game),
            (GameState::Lose, GameEvent::StartPressed, GameState::Game),
            (GameState::Game, GameEvent::FlySwatted, GameState::Cutscene),
            (GameState::Game, GameEvent::FlyEscaped, GameState::Lose),
            (GameState::Cutscene, GameEvent::CutsceneFinished, GameState::Start),
        ];

        for state in STATES {
            for event in EVENTS {
                let expected = allowed
                    .iter()
                    .find(|(from, on, _)| *from == state && *on == event)
                    .map(|(_, _, to)| *to);
                assert_eq!(state.next(event), expected, "{state:?} + {event:?}");
            }
        }
    }

    #[test]
    fn test_a_full_round() {
        let state = GameState::default();
        let state = state.next(GameEvent::StartPressed).unwrap();
        let state = state.next(GameEvent::FlyEscaped).unwrap();
        let state = state.next(GameEvent::StartPressed).unwrap();
        let state = state.next(GameEvent::FlySwatted).unwrap();
        let state = state.next(GameEvent::CutsceneFinished).unwrap();
        assert_eq!(state, GameState::Start);
    }
}
