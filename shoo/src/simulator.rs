use std::collections::BTreeMap;

use crate::contexts::{InputEvent, InputSource};

/// An [`InputSource`] that replays a script of events, keyed by the frame they should arrive on.
///
/// Useful for running a game on a desktop with no headset attached, and for tests.
#[derive(Debug, Default, Clone)]
pub struct SimulatedInput {
    script: BTreeMap<u64, Vec<InputEvent>>,
}

impl SimulatedInput {
    /// An input source that never does anything
    pub fn new() -> Self {
        Default::default()
    }

    /// Build an input source from `(frame, event)` pairs. Events for the same frame keep their order.
    pub fn from_script(script: impl IntoIterator<Item = (u64, InputEvent)>) -> Self {
        let mut simulated_input = Self::new();
        for (frame, event) in script {
            simulated_input.push(frame, event);
        }
        simulated_input
    }

    /// Queue up an event to arrive on `frame`
    pub fn push(&mut self, frame: u64, event: InputEvent) {
        self.script.entry(frame).or_default().push(event);
    }

    /// Have all the scripted events been delivered?
    pub fn is_finished(&self) -> bool {
        self.script.is_empty()
    }
}

impl InputSource for SimulatedInput {
    fn poll(&mut self, frame_index: u64) -> Vec<InputEvent> {
        // Anything scheduled for a frame we've already passed is delivered late rather than dropped.
        let later = self.script.split_off(&(frame_index + 1));
        let due = std::mem::replace(&mut self.script, later);
        due.into_values().flatten().collect()
    }
}
