use glam::{Affine3A, Quat, Vec3};
use gltf::scene::Transform as TransformData;
use serde::{Deserialize, Serialize};

/// The entity's position relative to its [`super::Parent`].
///
/// There are two ways an entity's position gets set in Shoo:
///
/// 1. **Game controlled** - the game writes to [`LocalTransform`] and the transform systems work out the
///    [`super::GlobalTransform`] from it.
/// 1. **Physics controlled** - the entity has a dynamic [`super::RigidBody`] and
///    [`crate::systems::update_local_transform_with_rigid_body_system`] overwrites the [`LocalTransform`] with the
///    body's pose each frame.
///
/// If the entity doesn't have a [`super::Parent`], then the global transform is just whatever you've set here.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub(crate) fn load(transform_data: TransformData) -> LocalTransform {
        let (t, r, s) = transform_data.decomposed();
        LocalTransform {
            translation: t.into(),
            rotation: Quat::from_array(r).normalize(),
            scale: s.into(),
        }
    }

    /// Create a transform that only translates
    pub fn from_translation(translation: Vec3) -> Self {
        LocalTransform {
            translation,
            ..Default::default()
        }
    }

    /// Convenience function to convert the [`LocalTransform`] into an [`Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the scale, rotation and translation from an [`Affine3A`]
    pub fn update_from_affine(&mut self, transform: &Affine3A) {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.translation = translation;
    }

    /// Rotate the entity about one of its local axes
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        self.rotation = (self.rotation * Quat::from_axis_angle(axis.normalize(), angle)).normalize();
    }

    /// Point the entity's -Z axis at `target`, keeping +Y up
    pub fn look_at(&mut self, target: Vec3) {
        let forward = target - self.translation;
        if forward.length_squared() <= f32::EPSILON {
            return;
        }
        // Affine3A::look_at_rh builds a view matrix; its inverse is the camera's pose.
        let view = Affine3A::look_at_rh(self.translation, target, Vec3::Y);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.rotation = rotation;
    }
}

impl From<Affine3A> for LocalTransform {
    fn from(transform: Affine3A) -> Self {
        let mut local_transform = LocalTransform::default();
        local_transform.update_from_affine(&transform);
        local_transform
    }
}
