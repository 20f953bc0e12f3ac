use glam::Vec3;

/// The kinds of light a scene can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Parallel rays shining along `direction`
    Directional,
    /// Ambient light from the sky, brightest opposite `direction`
    Hemispheric,
}

/// A light in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    /// The direction the light shines in
    pub direction: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn directional(direction: Vec3) -> Self {
        Light {
            kind: LightKind::Directional,
            direction: direction.normalize(),
            intensity: 1.,
        }
    }

    pub fn hemispheric(direction: Vec3) -> Self {
        Light {
            kind: LightKind::Hemispheric,
            direction: direction.normalize(),
            intensity: 1.,
        }
    }
}
