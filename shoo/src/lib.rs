#![deny(missing_docs)]

//! Shoo is a small, headless engine layer for standalone VR toys.
//!
//! It owns the boring parts of a VR game so the game itself can stay tiny: a scene graph built on
//! [`hecs`], a [`rapier3d`] physics world, a glTF model importer that loads on a background worker,
//! tracked controllers with pointers and grips, clickable 3D buttons, and the frame loop that ties
//! them together.
//!
//! # Frame loop
//! ```no_run
//! use shoo::{Engine, EngineBuilder};
//!
//! let mut engine = EngineBuilder::new().refresh_rate(Some(72.)).build().unwrap();
//! while let Ok(_tick_data) = engine.update() {
//!     // run your systems here
//!     engine.finish().unwrap();
//! }
//! ```

pub use engine::{AssetLoader, Engine, EngineBuilder, TickData};
pub use glam;
pub use hecs;
pub use rapier3d;
pub use shoo_error::ShooError;

/// Import glTF files as prefabs and instantiate them into a scene
pub mod asset_importer;
/// Axis aligned bounding boxes and mesh intersection queries
pub mod bounds;
/// Components are data that are used to update the simulation and interact with the external world
pub mod components;
/// Contexts are wrappers around some external state that the engine will interact with
pub mod contexts;
mod engine;
mod shoo_error;
/// A scripted input source, for desktop runs and tests
pub mod simulator;
/// Systems are functions called each frame to update either the external state or the current simulation
pub mod systems;
/// Kitchen sink utility functions
pub mod util;
/// Background workers
pub mod workers;

/// Shoo result type
pub type ShooResult<T> = std::result::Result<T, ShooError>;

/// The refresh rate of the headset we're pretending to drive, in Hz.
pub const DEFAULT_REFRESH_RATE: f32 = 72.;
