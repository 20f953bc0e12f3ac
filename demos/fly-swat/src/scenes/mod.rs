pub mod game;
pub mod menu;

pub use game::GameScene;
pub use menu::MenuScene;

use shoo::{
    components::{Camera, GlobalTransform, Info, LocalTransform},
    glam::Vec3,
    hecs::{Entity, World},
};

/// Where every scene's camera starts
pub const CAMERA_POSITION: Vec3 = Vec3::new(0., 0., -10.);
/// Light shines down and slightly across the scene
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.2, -1., 0.);

/// The scene currently being shown
pub enum ActiveScene {
    Menu(MenuScene),
    Game(GameScene),
}

impl ActiveScene {
    pub fn world(&self) -> &World {
        match self {
            ActiveScene::Menu(menu) => &menu.world,
            ActiveScene::Game(game) => &game.world,
        }
    }

    pub fn as_game(&self) -> Option<&GameScene> {
        match self {
            ActiveScene::Game(game) => Some(game),
            ActiveScene::Menu(_) => None,
        }
    }
}

impl std::fmt::Debug for ActiveScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveScene::Menu(_) => f.write_str("Menu"),
            ActiveScene::Game(_) => f.write_str("Game"),
        }
    }
}

/// Add a camera at [`CAMERA_POSITION`], looking at the origin
pub(crate) fn add_camera(world: &mut World, camera: Camera) -> Entity {
    let mut local_transform = LocalTransform::from_translation(CAMERA_POSITION);
    local_transform.look_at(Vec3::ZERO);
    world.spawn((
        camera,
        Info::named("Camera"),
        local_transform,
        GlobalTransform::from(local_transform),
    ))
}
