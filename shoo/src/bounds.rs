use glam::{Affine3A, Vec3};
use hecs::{Entity, World};

use crate::{
    components::Mesh,
    util::{descendants, global_from_local},
    ShooError, ShooResult,
};

/// An axis aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// The corner with the smallest coordinates
    pub min: Vec3,
    /// The corner with the largest coordinates
    pub max: Vec3,
}

impl BoundingBox {
    /// A box containing nothing at all. The union of this with any other box is the other box.
    pub const EMPTY: BoundingBox = BoundingBox {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a box from two opposite corners, in any order
    pub fn new(min: Vec3, max: Vec3) -> Self {
        BoundingBox {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// The smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The axis aligned box around this box after it has been moved by `transform`
    pub fn transformed(&self, transform: &Affine3A) -> BoundingBox {
        if self.is_empty() {
            return *self;
        }

        (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { self.min.x } else { self.max.x },
                    if i & 2 == 0 { self.min.y } else { self.max.y },
                    if i & 4 == 0 { self.min.z } else { self.max.z },
                )
            })
            .map(|corner| transform.transform_point3(corner))
            .fold(BoundingBox::EMPTY, |acc, p| BoundingBox {
                min: acc.min.min(p),
                max: acc.max.max(p),
            })
    }

    /// Do the boxes overlap? Touching counts.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.cmple(other.max).all()
            && other.min.cmple(self.max).all()
    }

    /// How far along the ray the box is first hit, if it is hit at all.
    /// A ray starting inside the box hits it at distance zero.
    pub fn ray_distance(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let (o, d) = (origin[axis], direction[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (t0, t1) = ((lo - o) / d, (hi - o) / d);
            t_min = t_min.max(t0.min(t1));
            t_max = t_max.min(t0.max(t1));
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}

/// The global space bounds of an entity and everything parented beneath it.
///
/// Transforms are computed from [`crate::components::LocalTransform`]s, so moves made earlier this frame count.
pub fn world_bounds(world: &World, entity: Entity) -> ShooResult<BoundingBox> {
    let bounds = std::iter::once(entity)
        .chain(descendants(world, entity))
        .filter_map(|e| {
            let bounds = world.get::<&Mesh>(e).ok()?.bounds;
            Some(global_from_local(world, e).map(|t| bounds.transformed(&t)))
        })
        .try_fold(BoundingBox::EMPTY, |acc, b| b.map(|b| acc.union(&b)))?;

    if bounds.is_empty() {
        return Err(ShooError::InvalidModel(format!(
            "{entity:?} has no geometry to test against"
        )));
    }
    Ok(bounds)
}

/// The global space bounds of a single mesh entity, ignoring anything parented beneath it.
pub fn mesh_bounds(world: &World, entity: Entity) -> ShooResult<BoundingBox> {
    let bounds = world.get::<&Mesh>(entity)?.bounds;
    Ok(bounds.transformed(&global_from_local(world, entity)?))
}

/// Does anything under `entity` overlap the bounds of `mesh` itself?
pub fn intersects_mesh(world: &World, entity: Entity, mesh: Entity) -> ShooResult<bool> {
    Ok(world_bounds(world, entity)?.intersects(&mesh_bounds(world, mesh)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LocalTransform, Parent};
    use approx::assert_relative_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    #[test]
    fn test_transformed_bounds() {
        let transform = Affine3A::from_scale_rotation_translation(
            Vec3::splat(2.),
            glam::Quat::from_rotation_z(std::f32::consts::FRAC_PI_4),
            Vec3::new(10., 0., 0.),
        );
        let bounds = unit_box().transformed(&transform);
        let half_diagonal = std::f32::consts::SQRT_2;
        assert_relative_eq!(bounds.min.x, 10. - half_diagonal, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.y, half_diagonal, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.z, 1., epsilon = 1e-5);
    }

    #[test]
    fn test_intersects() {
        let a = unit_box();
        let b = unit_box().transformed(&Affine3A::from_translation([0.9, 0., 0.].into()));
        let c = unit_box().transformed(&Affine3A::from_translation([1.1, 0., 0.].into()));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&BoundingBox::EMPTY));
    }

    #[test]
    fn test_ray_distance() {
        let bounds = unit_box();
        let hit = bounds.ray_distance([0., 0., -3.].into(), Vec3::Z).unwrap();
        assert_relative_eq!(hit, 2.5);
        assert!(bounds.ray_distance([0., 2., -3.].into(), Vec3::Z).is_none());
        assert!(bounds.ray_distance([0., 0., -3.].into(), Vec3::NEG_Z).is_none());
        assert_eq!(bounds.ray_distance(Vec3::ZERO, Vec3::X), Some(0.));
    }

    #[test]
    fn test_intersects_mesh_uses_children() {
        let mut world = World::new();
        let fly = world.spawn((LocalTransform::from_translation([5., 0., 0.].into()),));
        world.spawn((
            LocalTransform::default(),
            Parent(fly),
            Mesh::new(unit_box()),
        ));
        let swatter = world.spawn((
            LocalTransform::from_translation([5.5, 0., 0.].into()),
            Mesh::new(unit_box()),
        ));

        assert!(intersects_mesh(&world, fly, swatter).unwrap());

        world.get::<&mut LocalTransform>(fly).unwrap().translation.x = 0.;
        assert!(!intersects_mesh(&world, fly, swatter).unwrap());
    }

    #[test]
    fn test_only_the_mesh_itself_is_tested() {
        let mut world = World::new();
        let fly = world.spawn((LocalTransform::default(), Mesh::new(unit_box())));
        let head = world.spawn((
            LocalTransform::from_translation([3., 0., 0.].into()),
            Mesh::new(unit_box()),
        ));
        let decoration = world.spawn((
            LocalTransform::from_translation([-2.5, 0., 0.].into()),
            Parent(head),
            Mesh::new(unit_box()),
        ));

        assert!(intersects_mesh(&world, decoration, fly).unwrap());
        assert!(!intersects_mesh(&world, fly, head).unwrap());

        let bounds = mesh_bounds(&world, head).unwrap();
        assert_relative_eq!(bounds.min, Vec3::new(2.5, -0.5, -0.5));
        assert_relative_eq!(bounds.max, Vec3::new(3.5, 0.5, 0.5));
    }

    #[test]
    fn test_entity_without_geometry_is_an_error() {
        let mut world = World::new();
        let empty = world.spawn((LocalTransform::default(),));
        let other = world.spawn((LocalTransform::default(), Mesh::new(unit_box())));
        assert!(intersects_mesh(&world, empty, other).is_err());
    }
}
