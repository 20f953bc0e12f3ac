use glam::Vec3;
use hecs::{Entity, World};

use super::{GlobalTransform, Info, LocalTransform, Mesh, Parent, Visible};
use crate::{util::despawn_recursive, ShooResult};

/// Width and height of a button, in metres
pub const BUTTON_SIZE: f32 = 1.0;
/// How far a button sticks out of its panel
pub const BUTTON_DEPTH: f32 = 0.08;

/// A component added to an entity to lay out 3D buttons in space, left to right.
///
/// The buttons are separate entities parented to the panel, so they can be picked by
/// [`crate::systems::pointers_system`] like any other mesh.
#[derive(Debug, Clone, Default)]
pub struct UIPanel {
    /// Gap between neighbouring buttons
    pub margin: f32,
    /// The buttons on this panel, in layout order
    pub buttons: Vec<Entity>,
}

/// A clickable button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIButton {
    /// Text to be displayed
    pub text: String,
    /// Is a pointer resting on this button?
    pub hovered_this_frame: bool,
    /// Was this button clicked?
    pub clicked_this_frame: bool,
}

impl UIButton {
    /// Convenience function to create a new panel button
    pub fn new(text: &str) -> Self {
        UIButton {
            text: text.to_string(),
            hovered_this_frame: false,
            clicked_this_frame: false,
        }
    }
}

/// Convenience function to create an empty panel and add it to a World
pub fn add_ui_panel_to_world(translation: Vec3, margin: f32, world: &mut World) -> Entity {
    log::debug!("Adding panel at {translation:?}");
    world.spawn((
        UIPanel {
            margin,
            buttons: Vec::new(),
        },
        Info::named("Panel"),
        LocalTransform::from_translation(translation),
        GlobalTransform::default(),
        Visible {},
    ))
}

/// Add a button to the end of a panel, then lay the panel out again
pub fn add_button_to_panel(panel: Entity, text: &str, world: &mut World) -> ShooResult<Entity> {
    let button = world.spawn((
        UIButton::new(text),
        Info::named(text),
        Mesh::cuboid(Vec3::new(BUTTON_SIZE, BUTTON_SIZE, BUTTON_DEPTH)),
        LocalTransform::default(),
        GlobalTransform::default(),
        Parent(panel),
        Visible {},
    ));
    world.get::<&mut UIPanel>(panel)?.buttons.push(button);
    arrange_panel(panel, world)?;
    Ok(button)
}

/// Take a button off a panel and despawn it
pub fn remove_button_from_panel(
    panel: Entity,
    button: Entity,
    world: &mut World,
) -> ShooResult<()> {
    world
        .get::<&mut UIPanel>(panel)?
        .buttons
        .retain(|b| *b != button);
    despawn_recursive(world, button);
    arrange_panel(panel, world)
}

/// Centre the panel's buttons on the panel's origin, left to right
pub fn arrange_panel(panel: Entity, world: &mut World) -> ShooResult<()> {
    let (buttons, margin) = {
        let panel = world.get::<&UIPanel>(panel)?;
        (panel.buttons.clone(), panel.margin)
    };

    let count = buttons.len() as f32;
    let total_width = count * BUTTON_SIZE + (count - 1.).max(0.) * margin;
    let first_x = -total_width / 2. + BUTTON_SIZE / 2.;

    for (i, button) in buttons.iter().enumerate() {
        let mut local_transform = world.get::<&mut LocalTransform>(*button)?;
        local_transform.translation = Vec3::new(first_x + i as f32 * (BUTTON_SIZE + margin), 0., 0.);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_buttons_are_laid_out_left_to_right() {
        let mut world = World::new();
        let panel = add_ui_panel_to_world(Vec3::ZERO, 0.02, &mut world);
        let start = add_button_to_panel(panel, "Start Game", &mut world).unwrap();
        assert_eq!(
            world.get::<&LocalTransform>(start).unwrap().translation,
            Vec3::ZERO
        );

        let quit = add_button_to_panel(panel, "Quit", &mut world).unwrap();
        let start_x = world.get::<&LocalTransform>(start).unwrap().translation.x;
        let quit_x = world.get::<&LocalTransform>(quit).unwrap().translation.x;
        assert_relative_eq!(start_x, -0.51);
        assert_relative_eq!(quit_x, 0.51);
    }

    #[test]
    fn test_remove_button() {
        let mut world = World::new();
        let panel = add_ui_panel_to_world(Vec3::ZERO, 0.02, &mut world);
        let start = add_button_to_panel(panel, "Start Game", &mut world).unwrap();
        let quit = add_button_to_panel(panel, "Quit", &mut world).unwrap();

        remove_button_from_panel(panel, start, &mut world).unwrap();

        assert!(!world.contains(start));
        assert_eq!(world.get::<&UIPanel>(panel).unwrap().buttons, vec![quit]);
        assert_eq!(
            world.get::<&LocalTransform>(quit).unwrap().translation,
            Vec3::ZERO
        );
    }
}
