#![allow(missing_docs)]
pub mod camera;
pub mod collider;
pub mod controller;
pub mod global_transform;
pub mod info;
pub mod light;
pub mod local_transform;
pub mod mesh;
pub mod parent;
pub mod rigid_body;
pub mod root;
pub mod stage;
pub mod ui_panel;
pub mod visible;

pub use camera::Camera;
pub use collider::Collider;
pub use controller::{Grip, Handedness, Pointer};
pub use global_transform::GlobalTransform;
pub use info::Info;
pub use light::{Light, LightKind};
pub use local_transform::LocalTransform;
pub use mesh::Mesh;
pub use parent::Parent;
pub use rigid_body::RigidBody;
pub use root::Root;
pub use stage::Stage;
pub use ui_panel::{UIButton, UIPanel};
pub use visible::Visible;
