#![allow(missing_docs)]
pub mod input_context;
pub mod physics_context;

pub use input_context::{ControllerInput, InputContext, InputEvent, InputSource};
pub use physics_context::PhysicsContext;
