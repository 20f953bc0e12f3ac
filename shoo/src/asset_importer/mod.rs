use std::{collections::HashMap, fmt::Debug};

use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    bounds::BoundingBox,
    components::{GlobalTransform, Info, LocalTransform, Mesh, Parent, Root, Visible},
    ShooError, ShooResult,
};

/// Name given to the synthetic node every imported model hangs from
pub const ROOT_NODE_NAME: &str = "__root__";

/// A model imported from a glTF file, ready to be added to a scene any number of times.
///
/// The model keeps its own [`World`]. Every node in the file's scene becomes an entity, parented to a single
/// synthetic root entity so the whole model can be moved as one.
pub struct Model {
    /// What the model was loaded as
    pub name: String,
    world: World,
    root: Entity,
    meshes: Vec<Entity>,
}

impl Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("entities", &self.world.len())
            .field("meshes", &self.mesh_names())
            .finish()
    }
}

impl Model {
    /// How many entries [`ModelInstance::meshes`] will have, root included
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Names of the entries in [`ModelInstance::meshes`], in order
    pub fn mesh_names(&self) -> Vec<String> {
        self.meshes
            .iter()
            .map(|e| {
                self.world
                    .get::<&Info>(*e)
                    .map(|info| info.name.clone())
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// A copy of a [`Model`] living in a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInstance {
    /// The model's root entity. Move this to move the whole model.
    pub root: Entity,
    /// The root, followed by every node that carries a mesh, in depth-first file order
    pub meshes: Vec<Entity>,
}

impl ModelInstance {
    /// The entry at `index` in [`ModelInstance::meshes`]
    pub fn mesh(&self, index: usize) -> Option<Entity> {
        self.meshes.get(index).copied()
    }
}

/// Load a model from the bytes of a `.glb` or `.gltf` file.
///
/// Only the node hierarchy and the extent of each mesh are kept. Mesh extents come from the `min` and `max` of
/// each primitive's `POSITION` accessor, so vertex data is never read.
pub fn load_model(name: &str, data: &[u8]) -> ShooResult<Model> {
    let gltf = gltf::Gltf::from_slice(data)?;
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| ShooError::InvalidModel(format!("{name} does not contain a scene")))?;

    let mut world = World::new();
    let root = world.spawn((
        Root {},
        Info {
            name: ROOT_NODE_NAME.to_string(),
            node_id: usize::MAX,
        },
        LocalTransform::default(),
        GlobalTransform::default(),
        Visible {},
    ));
    let mut meshes = vec![root];

    for node in scene.nodes() {
        load_node(&node, root, &mut world, &mut meshes)?;
    }

    log::debug!("Loaded model {name} with {} meshes", meshes.len());

    Ok(Model {
        name: name.to_string(),
        world,
        root,
        meshes,
    })
}

fn load_node(
    node_data: &gltf::Node,
    parent: Entity,
    world: &mut World,
    meshes: &mut Vec<Entity>,
) -> ShooResult<()> {
    let info = Info {
        name: node_data
            .name()
            .map(|s| s.to_string())
            .unwrap_or(format!("Node {}", node_data.index())),
        node_id: node_data.index(),
    };
    let this_entity = world.spawn((
        LocalTransform::load(node_data.transform()),
        GlobalTransform::default(),
        info,
        Parent(parent),
        Visible {},
    ));

    if let Some(mesh_data) = node_data.mesh() {
        world.insert_one(this_entity, load_mesh(&mesh_data)?)?;
        meshes.push(this_entity);
    }

    for child in node_data.children() {
        load_node(&child, this_entity, world, meshes)?;
    }

    Ok(())
}

fn load_mesh(mesh_data: &gltf::Mesh) -> ShooResult<Mesh> {
    let mut bounds = BoundingBox::EMPTY;
    for primitive in mesh_data.primitives() {
        let positions = primitive
            .get(&gltf::Semantic::Positions)
            .ok_or_else(|| invalid_mesh(mesh_data, "a primitive has no POSITION attribute"))?;
        let min = read_vec3(positions.min())
            .ok_or_else(|| invalid_mesh(mesh_data, "POSITION has no min"))?;
        let max = read_vec3(positions.max())
            .ok_or_else(|| invalid_mesh(mesh_data, "POSITION has no max"))?;
        bounds = bounds.union(&BoundingBox::new(min, max));
    }

    if bounds.is_empty() {
        return Err(invalid_mesh(mesh_data, "it has no primitives"));
    }

    Ok(Mesh {
        name: mesh_data.name().map(|s| s.to_string()),
        bounds,
    })
}

fn read_vec3(value: Option<gltf::json::Value>) -> Option<Vec3> {
    let value = value?;
    match value.as_array()?.as_slice() {
        [x, y, z] => Some(Vec3::new(
            x.as_f64()? as f32,
            y.as_f64()? as f32,
            z.as_f64()? as f32,
        )),
        _ => None,
    }
}

fn invalid_mesh(mesh_data: &gltf::Mesh, reason: &str) -> ShooError {
    ShooError::InvalidModel(format!(
        "mesh {} is unusable: {reason}",
        mesh_data
            .name()
            .map(|s| s.to_string())
            .unwrap_or(format!("#{}", mesh_data.index()))
    ))
}

/// Add a copy of `model` to `destination_world`, optionally parented to `parent`.
pub fn add_model_to_world(
    model: &Model,
    destination_world: &mut World,
    parent: Option<Entity>,
) -> ShooResult<ModelInstance> {
    let source_world = &model.world;
    let mut entity_map = HashMap::new();

    // First pass: give every source entity a twin in the destination world.
    for source_entity in source_world.iter().map(|e| e.entity()) {
        let local_transform = *source_world.get::<&LocalTransform>(source_entity)?;
        let destination_entity =
            destination_world.spawn((local_transform, GlobalTransform::from(local_transform)));
        entity_map.insert(source_entity, destination_entity);
    }

    // Second pass: copy everything else, pointing parents at the new entities.
    for (source_entity, destination_entity) in &entity_map {
        let destination_entity = *destination_entity;

        if let Ok(info) = source_world.get::<&Info>(*source_entity) {
            destination_world.insert_one(destination_entity, (*info).clone())?;
        }

        if let Ok(mesh) = source_world.get::<&Mesh>(*source_entity) {
            destination_world.insert_one(destination_entity, (*mesh).clone())?;
        }

        if let Ok(visible) = source_world.get::<&Visible>(*source_entity) {
            destination_world.insert_one(destination_entity, *visible)?;
        }

        if let Ok(parent) = source_world.get::<&Parent>(*source_entity) {
            let new_parent = entity_map.get(&parent.0).ok_or_else(|| {
                ShooError::InvalidModel(format!("{} has a dangling parent", model.name))
            })?;
            destination_world.insert_one(destination_entity, Parent(*new_parent))?;
        }

        if let Ok(root) = source_world.get::<&Root>(*source_entity) {
            destination_world.insert_one(destination_entity, *root)?;

            // Set a parent for the root entity if one was specified.
            if let Some(parent) = parent {
                destination_world.insert_one(destination_entity, Parent(parent))?;
            }
        }
    }

    Ok(ModelInstance {
        root: entity_map[&model.root],
        meshes: model.meshes.iter().map(|e| entity_map[e]).collect(),
    })
}
