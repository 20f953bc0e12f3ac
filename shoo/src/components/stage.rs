use crate::{
    components::{GlobalTransform, Info, LocalTransform},
    hecs::{Entity, World},
};

/// Marker component for the player's frame of reference.
///
/// Tracked controllers are parented to the stage, so moving the stage moves the player.
#[derive(Debug)]
pub struct Stage;

/// Setup the Stage entity that tracked things are parented to
pub fn add_stage(world: &mut World) -> Entity {
    world.spawn((
        Stage {},
        Info::named("Stage"),
        GlobalTransform::default(),
        LocalTransform::default(),
    ))
}
