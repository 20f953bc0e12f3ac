pub mod fly;
pub mod loading;
pub mod swatter;

pub use fly::fly_system;
pub use loading::loading_system;
pub use swatter::swatter_system;
