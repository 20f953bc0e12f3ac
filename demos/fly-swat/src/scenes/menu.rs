use shoo::{
    components::{
        stage::add_stage,
        ui_panel::{add_button_to_panel, add_ui_panel_to_world, remove_button_from_panel},
        Camera, GlobalTransform, Info, LocalTransform, Light, UIButton,
    },
    contexts::InputContext,
    glam::Vec3,
    hecs::{Entity, World},
    systems::{controllers_system, debug_system, pointers_system, update_transforms},
    ShooResult,
};

use crate::resources::GameEvent;

use super::{add_camera, LIGHT_DIRECTION};

/// Gap between buttons on the menu panel
pub const PANEL_MARGIN: f32 = 0.02;
/// Where the menu's light sits
pub const LIGHT_POSITION: Vec3 = Vec3::new(0., 80., 0.);

/// A panel with a single button on it, waiting to be pressed
pub struct MenuScene {
    pub world: World,
    pub stage: Entity,
    pub panel: Entity,
    pub button: Option<Entity>,
}

impl MenuScene {
    pub fn new(button_text: &str) -> ShooResult<Self> {
        let mut world = World::new();
        let stage = add_stage(&mut world);

        let panel = add_ui_panel_to_world(Vec3::ZERO, PANEL_MARGIN, &mut world);
        let button = add_button_to_panel(panel, button_text, &mut world)?;

        let light = LocalTransform::from_translation(LIGHT_POSITION);
        world.spawn((
            Light::directional(LIGHT_DIRECTION),
            Info::named("Light"),
            light,
            GlobalTransform::from(light),
        ));
        add_camera(&mut world, Camera::default());
        update_transforms(&mut world);

        Ok(Self {
            world,
            stage,
            panel,
            button: Some(button),
        })
    }

    /// Run one frame of the menu. Pressing the button takes it off the panel and starts the game.
    pub fn tick(&mut self, input_context: &InputContext) -> ShooResult<Option<GameEvent>> {
        controllers_system(&mut self.world, input_context, self.stage);
        pointers_system(&mut self.world, input_context);
        update_transforms(&mut self.world);
        debug_system(&self.world, input_context);

        let Some(button) = self.button else {
            return Ok(None);
        };
        if !self.world.get::<&UIButton>(button)?.clicked_this_frame {
            return Ok(None);
        }

        log::info!("[FLY_SWAT] Let's go!");
        remove_button_from_panel(self.panel, button, &mut self.world)?;
        self.button = None;
        Ok(Some(GameEvent::StartPressed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoo::{
        components::{Handedness, UIPanel},
        contexts::InputEvent,
        glam::{Affine3A, Quat},
    };

    fn point_at_panel(trigger: f32) -> [InputEvent; 2] {
        [
            InputEvent::ControllerMoved {
                handedness: Handedness::Right,
                grip: None,
                pointer: Affine3A::from_rotation_translation(
                    Quat::from_rotation_y(std::f32::consts::PI),
                    [0., 0., -3.].into(),
                ),
            },
            InputEvent::Trigger {
                handedness: Handedness::Right,
                value: trigger,
            },
        ]
    }

    #[test]
    fn test_menu_scene() {
        let menu = MenuScene::new("Start Game").unwrap();
        let panel = menu.world.get::<&UIPanel>(menu.panel).unwrap();
        assert_eq!(panel.margin, 0.02);
        assert_eq!(panel.buttons.len(), 1);
        assert_eq!(
            menu.world.get::<&UIButton>(panel.buttons[0]).unwrap().text,
            "Start Game"
        );

        let lights = menu.world.query::<(&Light, &LocalTransform)>().iter().map(|(_, (l, t))| (*l, *t)).collect::<Vec<_>>();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].1.translation, LIGHT_POSITION);
        assert_eq!(menu.world.query::<&Camera>().iter().count(), 1);
    }

    #[test]
    fn test_pressing_start() {
        let mut menu = MenuScene::new("Start Game").unwrap();
        let mut input_context = InputContext::default();

        input_context.update(&point_at_panel(0.));
        assert_eq!(menu.tick(&input_context).unwrap(), None);

        input_context.update(&point_at_panel(1.));
        assert_eq!(
            menu.tick(&input_context).unwrap(),
            Some(GameEvent::StartPressed)
        );
        assert!(menu.button.is_none());
        assert!(menu
            .world
            .get::<&UIPanel>(menu.panel)
            .unwrap()
            .buttons
            .is_empty());

        // Only once.
        input_context.update(&point_at_panel(0.));
        input_context.update(&point_at_panel(1.));
        assert_eq!(menu.tick(&input_context).unwrap(), None);
    }
}
