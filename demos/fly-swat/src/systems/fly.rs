use shoo::{
    bounds::intersects_mesh,
    components::LocalTransform,
    hecs::World,
    util::despawn_recursive,
    ShooError, ShooResult,
};

use crate::{
    config::GameConfig,
    resources::{GameContext, GameEvent},
};

/// Fly system
/// Once both the fly and the swatter are in the scene, moves the fly along and checks whether it's been swatted.
///
/// A swatted fly is despawned and forgotten, so nothing happens on later frames.
pub fn fly_system(
    world: &mut World,
    game_context: &mut GameContext,
    config: &GameConfig,
) -> ShooResult<Option<GameEvent>> {
    let (Some(fly), Some(swatter)) = (&game_context.fly, &game_context.swatter) else {
        return Ok(None);
    };
    let fly_root = fly.root;
    let hit_mesh = swatter
        .mesh(config.swatter_hit_mesh)
        .ok_or_else(|| ShooError::MissingMesh {
            model: "Swatter".into(),
            index: config.swatter_hit_mesh,
        })?;

    let translation = {
        let mut local_transform = world.get::<&mut LocalTransform>(fly_root)?;
        local_transform.translation += config.fly_axis * config.fly_step;
        local_transform.translation
    };

    if intersects_mesh(world, fly_root, hit_mesh)? {
        log::info!("[FLY_SWAT] Got it!");
        despawn_recursive(world, fly_root);
        game_context.fly = None;
        return Ok(Some(GameEvent::FlySwatted));
    }

    if translation.distance(game_context.fly_start) > config.fly_escape_distance {
        log::info!("[FLY_SWAT] The fly got away");
        return Ok(Some(GameEvent::FlyEscaped));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fly_model, swatter_model};
    use approx::assert_relative_eq;
    use shoo::{
        asset_importer::add_model_to_world,
        components::Info,
        glam::Vec3,
    };

    /// A scene with the fly at its start and the swatter well out of the way
    fn scene(config: &GameConfig) -> (World, GameContext) {
        let mut world = World::new();
        let mut game_context = GameContext::new(config.fly_start);

        let fly = add_model_to_world(&fly_model(), &mut world, None).unwrap();
        {
            let mut local_transform = world.get::<&mut LocalTransform>(fly.root).unwrap();
            local_transform.translation = config.fly_start;
            local_transform.scale = Vec3::splat(config.fly_scale);
        }
        game_context.fly = Some(fly);

        let swatter = add_model_to_world(&swatter_model(), &mut world, None).unwrap();
        world
            .get::<&mut LocalTransform>(swatter.root)
            .unwrap()
            .translation = Vec3::new(0., 50., 0.);
        game_context.swatter = Some(swatter);

        (world, game_context)
    }

    fn fly_position(world: &World, game_context: &GameContext) -> Vec3 {
        world
            .get::<&LocalTransform>(game_context.fly.as_ref().unwrap().root)
            .unwrap()
            .translation
    }

    #[test]
    fn test_fly_moves_by_a_fixed_step() {
        let config = GameConfig::default();
        let (mut world, mut game_context) = scene(&config);

        for frame in 1..=10 {
            assert_eq!(
                fly_system(&mut world, &mut game_context, &config).unwrap(),
                None
            );
            let expected = config.fly_start + Vec3::X * 0.0001 * frame as f32;
            assert_relative_eq!(fly_position(&world, &game_context), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_nothing_happens_until_both_are_loaded() {
        let config = GameConfig::default();
        let (mut world, mut game_context) = scene(&config);
        let swatter = game_context.swatter.take();

        let before = fly_position(&world, &game_context);
        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            None
        );
        assert_eq!(fly_position(&world, &game_context), before);

        game_context.swatter = swatter;
        game_context.fly = None;
        let entities = world.len();
        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            None
        );
        assert_eq!(world.len(), entities);
    }

    #[test]
    fn test_swatting_the_fly() {
        let config = GameConfig::default();
        let (mut world, mut game_context) = scene(&config);
        let fly = game_context.fly.clone().unwrap();
        let swatter = game_context.swatter.clone().unwrap();

        // Bring the head of the swatter down on the fly.
        world
            .get::<&mut LocalTransform>(swatter.root)
            .unwrap()
            .translation = config.fly_start - Vec3::new(0., 2.2, 0.);

        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            Some(GameEvent::FlySwatted)
        );
        assert!(game_context.fly.is_none());
        assert!(!world.contains(fly.root));
        assert!(fly.meshes.iter().all(|e| !world.contains(*e)));
        assert!(world.contains(swatter.root));
        assert_eq!(world.query::<&Info>().iter().filter(|(_, i)| i.name == "Body").count(), 0);

        // The fly is gone, so nothing else happens.
        let entities = world.len();
        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            None
        );
        assert_eq!(world.len(), entities);
    }

    #[test]
    fn test_the_handle_does_not_count() {
        let config = GameConfig::default();
        let (mut world, mut game_context) = scene(&config);
        let swatter = game_context.swatter.clone().unwrap();

        // Only the handle reaches the fly.
        world
            .get::<&mut LocalTransform>(swatter.root)
            .unwrap()
            .translation = config.fly_start - Vec3::new(0., 0.8, 0.);

        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            None
        );
        assert!(game_context.fly.is_some());
    }

    #[test]
    fn test_fly_escapes() {
        let config = GameConfig {
            fly_step: 1.,
            fly_escape_distance: 2.5,
            ..Default::default()
        };
        let (mut world, mut game_context) = scene(&config);

        assert_eq!(fly_system(&mut world, &mut game_context, &config).unwrap(), None);
        assert_eq!(fly_system(&mut world, &mut game_context, &config).unwrap(), None);
        assert_eq!(
            fly_system(&mut world, &mut game_context, &config).unwrap(),
            Some(GameEvent::FlyEscaped)
        );
    }

    #[test]
    fn test_missing_hit_mesh_is_an_error() {
        let config = GameConfig {
            swatter_hit_mesh: 7,
            ..Default::default()
        };
        let (mut world, mut game_context) = scene(&config);
        assert!(matches!(
            fly_system(&mut world, &mut game_context, &config),
            Err(ShooError::MissingMesh { index: 7, .. })
        ));
    }
}
