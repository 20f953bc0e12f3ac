/// A camera in the scene. The camera looks down its local -Z axis.
///
/// Nothing is rendered by Shoo, but scenes still record where their viewpoint is so that a headset (or a desktop
/// preview) has somewhere to start from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// Should the camera be stopped by colliders?
    pub check_collisions: bool,
    /// Should the camera fall under gravity?
    pub apply_gravity: bool,
}
