use crate::bounds::BoundingBox;

/// A component that gives an entity some geometry.
///
/// Shoo doesn't draw anything, so all we keep of the geometry is its extent in the entity's local space. That's
/// enough to pick it with a pointer or check whether it overlaps something else.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Name of the mesh in the source file, if it had one
    pub name: Option<String>,
    /// The extent of every primitive in this mesh, in local space
    pub bounds: BoundingBox,
}

impl Mesh {
    /// Create a mesh from its local bounds
    pub fn new(bounds: BoundingBox) -> Self {
        Mesh { name: None, bounds }
    }

    /// A flat, `width` by `height` plane lying in the local XY plane, like a freshly built billboard
    pub fn plane(width: f32, height: f32) -> Self {
        let half = glam::Vec3::new(width / 2., height / 2., 0.);
        Mesh::new(BoundingBox::new(-half, half))
    }

    /// A box centred on the origin
    pub fn cuboid(size: glam::Vec3) -> Self {
        let half = size / 2.;
        Mesh::new(BoundingBox::new(-half, half))
    }
}
