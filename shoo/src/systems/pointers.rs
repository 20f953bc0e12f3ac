use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    bounds::world_bounds,
    components::{Pointer, UIButton, Visible},
    contexts::InputContext,
    util::global_from_local,
};

/// How far a pointer can reach, in metres
pub const MAX_POINTER_DISTANCE: f32 = 40.0;

/// Pointers system
/// Allows users to interact with [`UIButton`]s using their controllers.
///
/// Each pointer casts a ray down its -Z axis. The nearest visible button it hits is hovered, and pulling the trigger
/// on that frame clicks it.
pub fn pointers_system(world: &mut World, input_context: &InputContext) {
    for (_, button) in world.query_mut::<&mut UIButton>() {
        button.hovered_this_frame = false;
        button.clicked_this_frame = false;
    }

    let buttons = world
        .query::<&UIButton>()
        .with::<&Visible>()
        .iter()
        .map(|(entity, _)| entity)
        .collect::<Vec<_>>();
    if buttons.is_empty() {
        return;
    }

    let pointers = world
        .query::<&Pointer>()
        .iter()
        .map(|(entity, pointer)| (entity, pointer.handedness))
        .collect::<Vec<_>>();

    for (pointer_entity, handedness) in pointers {
        let global_from_pointer = match global_from_local(world, pointer_entity) {
            Ok(transform) => transform,
            Err(e) => {
                log::warn!("[SHOO_POINTERS] Unable to find {handedness:?} pointer: {e:?}");
                continue;
            }
        };

        // Sweet baby ray
        let origin = Vec3::from(global_from_pointer.translation);
        let direction = global_from_pointer.transform_vector3(Vec3::NEG_Z).normalize();

        let Some(hit) = nearest_button(world, &buttons, origin, direction) else {
            continue;
        };

        let clicked = input_context
            .controller(handedness)
            .trigger_button_just_pressed();
        if let Ok(mut button) = world.get::<&mut UIButton>(hit) {
            button.hovered_this_frame = true;
            if clicked {
                log::debug!("[SHOO_POINTERS] {handedness:?} pointer clicked {}", button.text);
                button.clicked_this_frame = true;
            }
        }
    }
}

fn nearest_button(world: &World, buttons: &[Entity], origin: Vec3, direction: Vec3) -> Option<Entity> {
    buttons
        .iter()
        .filter_map(|button| {
            let distance = world_bounds(world, *button)
                .ok()?
                .ray_distance(origin, direction)?;
            (distance <= MAX_POINTER_DISTANCE).then_some((*button, distance))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(button, _)| button)
}
