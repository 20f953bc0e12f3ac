use std::f32::consts::FRAC_PI_2;

use shoo::{
    asset_importer::{add_model_to_world, Model, ModelInstance},
    components::{Info, LocalTransform},
    glam::{Quat, Vec3},
    hecs::World,
    workers::AssetEvent,
    ShooResult,
};

use crate::{
    config::{GameConfig, SwatterMode},
    resources::{GameContext, ModelRole},
};

/// Put finished loads into the scene.
///
/// Results for loads this scene never asked for (say, ones requested by a scene that has since been replaced) are
/// ignored.
pub fn loading_system(
    world: &mut World,
    game_context: &mut GameContext,
    config: &GameConfig,
    asset_events: Vec<AssetEvent>,
) -> ShooResult<()> {
    for event in asset_events {
        let Some(role) = game_context.pending.remove(&event.id()) else {
            log::debug!("[FLY_SWAT] Ignoring load {:?} from another scene", event.id());
            continue;
        };

        match event {
            AssetEvent::Loaded { model, .. } => match role {
                ModelRole::Fly => add_fly(world, game_context, config, &model)?,
                ModelRole::Swatter => add_swatter(world, game_context, config, &model)?,
            },
            AssetEvent::Failed { error, .. } => {
                log::error!("[FLY_SWAT] Unable to load the {role:?}: {error}");
            }
        }
    }

    Ok(())
}

fn add_fly(
    world: &mut World,
    game_context: &mut GameContext,
    config: &GameConfig,
    model: &Model,
) -> ShooResult<()> {
    if model.mesh_count() < 2 {
        log::error!(
            "[FLY_SWAT] {} can't be used as a fly: it has no meshes to swat",
            model.name
        );
        return Ok(());
    }
    if game_context.fly.is_some() {
        log::warn!("[FLY_SWAT] There's already a fly, ignoring {}", model.name);
        return Ok(());
    }

    let fly = add_model_to_world(model, world, None)?;
    place(
        world,
        &fly,
        "Fly",
        LocalTransform {
            translation: config.fly_start,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(config.fly_scale),
        },
    )?;
    log::info!("[FLY_SWAT] The fly is at {}", config.fly_start);

    game_context.fly_start = config.fly_start;
    game_context.fly = Some(fly);
    Ok(())
}

fn add_swatter(
    world: &mut World,
    game_context: &mut GameContext,
    config: &GameConfig,
    model: &Model,
) -> ShooResult<()> {
    // Mesh 0 is the model's root, which has no geometry of its own.
    if config.swatter_hit_mesh == 0 || model.mesh_count() <= config.swatter_hit_mesh {
        log::error!(
            "[FLY_SWAT] {} can't be used as a swatter: it has {} meshes ({:?}) and mesh {} does the swatting",
            model.name,
            model.mesh_count(),
            model.mesh_names(),
            config.swatter_hit_mesh
        );
        return Ok(());
    }
    if game_context.swatter.is_some() {
        log::warn!("[FLY_SWAT] There's already a swatter, ignoring {}", model.name);
        return Ok(());
    }

    let (parent, translation) = match config.swatter_mode {
        SwatterMode::Controller => {
            // The controller may have gone away while we were loading.
            match game_context.swatter_anchor.filter(|a| world.contains(*a)) {
                Some(anchor) => (Some(anchor), config.swatter_offset),
                None => {
                    log::info!("[FLY_SWAT] Nothing to hold the swatter, dropping it");
                    return Ok(());
                }
            }
        }
        SwatterMode::Fixed => (None, config.fixed_swatter_position),
    };

    let swatter = add_model_to_world(model, world, parent)?;
    place(
        world,
        &swatter,
        "Swatter",
        LocalTransform {
            translation,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            scale: Vec3::splat(config.swatter_scale),
        },
    )?;
    log::info!("[FLY_SWAT] Swatter ready");

    game_context.swatter = Some(swatter);
    Ok(())
}

fn place(
    world: &mut World,
    instance: &ModelInstance,
    name: &str,
    transform: LocalTransform,
) -> ShooResult<()> {
    *world.get::<&mut LocalTransform>(instance.root)? = transform;
    world.get::<&mut Info>(instance.root)?.name = name.to_string();
    Ok(())
}
