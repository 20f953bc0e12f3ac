use glam::Affine3A;
use serde::{Deserialize, Serialize};

use crate::components::Handedness;

/// How far the trigger has to be pulled before it counts as pressed
pub const TRIGGER_THRESHOLD: f32 = 0.9;

/// Something that happened to the player's input devices since the last frame.
///
/// Poses are in stage space.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A controller started being tracked
    ControllerConnected {
        handedness: Handedness,
        /// Not every runtime reports a grip pose
        grip: Option<Affine3A>,
        pointer: Affine3A,
    },
    /// A tracked controller moved
    ControllerMoved {
        handedness: Handedness,
        grip: Option<Affine3A>,
        pointer: Affine3A,
    },
    /// A controller stopped being tracked
    ControllerDisconnected { handedness: Handedness },
    /// The trigger on a controller moved to `value`, between 0 and 1
    Trigger { handedness: Handedness, value: f32 },
    /// Show or hide the scene inspector
    ToggleInspector,
    /// The player wants out
    Quit,
}

/// Where input events come from. Polled by [`crate::Engine::update`] once per frame.
pub trait InputSource {
    /// Every event that has happened since the last poll
    fn poll(&mut self, frame_index: u64) -> Vec<InputEvent>;
}

/// The state of a single controller this frame
#[derive(Debug, Clone, Default)]
pub struct ControllerInput {
    connected: bool,
    grip: Option<Affine3A>,
    pointer: Affine3A,
    trigger_analog: f32,
    trigger_analog_prev: f32,
}

impl ControllerInput {
    pub fn connected(&self) -> bool {
        self.connected
    }
    pub fn stage_from_grip(&self) -> Option<Affine3A> {
        self.grip
    }
    pub fn stage_from_pointer(&self) -> Affine3A {
        self.pointer
    }
    pub fn trigger_analog(&self) -> f32 {
        self.trigger_analog
    }
    pub fn trigger_button(&self) -> bool {
        self.trigger_analog >= TRIGGER_THRESHOLD
    }
    pub fn trigger_button_just_pressed(&self) -> bool {
        self.trigger_button() && self.trigger_analog_prev < TRIGGER_THRESHOLD
    }
    pub fn trigger_button_just_released(&self) -> bool {
        !self.trigger_button() && self.trigger_analog_prev >= TRIGGER_THRESHOLD
    }

    fn begin_frame(&mut self) {
        self.trigger_analog_prev = self.trigger_analog;
    }
}

/// The player's input, as of this frame
#[derive(Debug, Default, Clone)]
pub struct InputContext {
    pub left: ControllerInput,
    pub right: ControllerInput,
    inspector_toggled: bool,
    quit_requested: bool,
}

impl InputContext {
    /// Apply this frame's events. Edge detection ("just pressed") is relative to the previous call.
    pub fn update(&mut self, events: &[InputEvent]) {
        self.left.begin_frame();
        self.right.begin_frame();
        self.inspector_toggled = false;

        for event in events {
            match event {
                InputEvent::ControllerConnected {
                    handedness,
                    grip,
                    pointer,
                }
                | InputEvent::ControllerMoved {
                    handedness,
                    grip,
                    pointer,
                } => {
                    let controller = self.controller_mut(*handedness);
                    controller.connected = true;
                    controller.grip = *grip;
                    controller.pointer = *pointer;
                }
                InputEvent::ControllerDisconnected { handedness } => {
                    *self.controller_mut(*handedness) = Default::default();
                }
                InputEvent::Trigger { handedness, value } => {
                    self.controller_mut(*handedness).trigger_analog = (*value).clamp(0., 1.);
                }
                InputEvent::ToggleInspector => self.inspector_toggled = true,
                InputEvent::Quit => self.quit_requested = true,
            }
        }
    }

    pub fn controller(&self, handedness: Handedness) -> &ControllerInput {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    fn controller_mut(&mut self, handedness: Handedness) -> &mut ControllerInput {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }

    /// Did the player ask for the inspector this frame?
    pub fn inspector_toggled(&self) -> bool {
        self.inspector_toggled
    }

    /// Has the player asked to quit?
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_edges() {
        let mut input_context = InputContext::default();
        let press = InputEvent::Trigger {
            handedness: Handedness::Right,
            value: 1.0,
        };
        let release = InputEvent::Trigger {
            handedness: Handedness::Right,
            value: 0.0,
        };

        input_context.update(&[press.clone()]);
        assert!(input_context.right.trigger_button_just_pressed());
        assert!(!input_context.left.trigger_button());

        input_context.update(&[]);
        assert!(input_context.right.trigger_button());
        assert!(!input_context.right.trigger_button_just_pressed());

        input_context.update(&[release]);
        assert!(input_context.right.trigger_button_just_released());
    }

    #[test]
    fn test_connect_and_disconnect() {
        let mut input_context = InputContext::default();
        let pointer = Affine3A::from_translation([0., 1., 0.].into());
        input_context.update(&[InputEvent::ControllerConnected {
            handedness: Handedness::Left,
            grip: None,
            pointer,
        }]);
        assert!(input_context.controller(Handedness::Left).connected());
        assert_eq!(input_context.left.stage_from_pointer(), pointer);
        assert!(input_context.left.stage_from_grip().is_none());
        assert!(!input_context.right.connected());

        input_context.update(&[InputEvent::ControllerDisconnected {
            handedness: Handedness::Left,
        }]);
        assert!(!input_context.left.connected());
    }

    #[test]
    fn test_quit_sticks() {
        let mut input_context = InputContext::default();
        input_context.update(&[InputEvent::Quit, InputEvent::ToggleInspector]);
        assert!(input_context.inspector_toggled());
        input_context.update(&[]);
        assert!(input_context.quit_requested());
        assert!(!input_context.inspector_toggled());
    }
}
