use glam::Affine3A;
use hecs::{Entity, World};

use crate::{
    components::{GlobalTransform, Grip, Handedness, Info, LocalTransform, Parent, Pointer},
    contexts::InputContext,
    util::despawn_recursive,
};

/// Something that happened to a tracked controller this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerChange {
    /// A controller was connected and now has entities in the scene
    Added {
        handedness: Handedness,
        /// Only present if the runtime reports a grip pose for this controller
        grip: Option<Entity>,
        pointer: Entity,
    },
    /// A controller went away. Its entities, and anything parented to them, are gone.
    Removed { handedness: Handedness },
}

/// Controllers system
/// Keeps a [`Pointer`] (and a [`Grip`], if there is one) parented to the stage for every connected controller.
///
/// Since these entities are parented to the stage, their [`LocalTransform`] is their pose in stage space.
pub fn controllers_system(
    world: &mut World,
    input_context: &InputContext,
    stage_entity: Entity,
) -> Vec<ControllerChange> {
    let mut changes = Vec::new();
    let existing = world
        .query::<&Pointer>()
        .iter()
        .map(|(entity, pointer)| (entity, *pointer))
        .collect::<Vec<_>>();

    for handedness in Handedness::BOTH {
        let controller = input_context.controller(handedness);
        let current = existing
            .iter()
            .find(|(_, pointer)| pointer.handedness == handedness)
            .copied();

        match (controller.connected(), current) {
            (true, None) => {
                let grip = controller
                    .stage_from_grip()
                    .map(|stage_from_grip| add_grip(world, stage_entity, handedness, &stage_from_grip));
                let pointer = world.spawn((
                    Pointer { handedness, grip },
                    Info::named(&format!("{handedness:?} Pointer")),
                    LocalTransform::from(controller.stage_from_pointer()),
                    GlobalTransform::default(),
                    Parent(stage_entity),
                ));
                log::info!("[SHOO_CONTROLLERS] {handedness:?} controller connected");
                changes.push(ControllerChange::Added {
                    handedness,
                    grip,
                    pointer,
                });
            }
            (true, Some((pointer_entity, pointer))) => {
                if let Ok(mut local_transform) = world.get::<&mut LocalTransform>(pointer_entity) {
                    local_transform.update_from_affine(&controller.stage_from_pointer());
                }
                if let (Some(grip), Some(stage_from_grip)) =
                    (pointer.grip, controller.stage_from_grip())
                {
                    if let Ok(mut local_transform) = world.get::<&mut LocalTransform>(grip) {
                        local_transform.update_from_affine(&stage_from_grip);
                    }
                }
            }
            (false, Some((pointer_entity, pointer))) => {
                if let Some(grip) = pointer.grip {
                    despawn_recursive(world, grip);
                }
                despawn_recursive(world, pointer_entity);
                log::info!("[SHOO_CONTROLLERS] {handedness:?} controller disconnected");
                changes.push(ControllerChange::Removed { handedness });
            }
            (false, None) => {}
        }
    }

    changes
}

fn add_grip(
    world: &mut World,
    stage_entity: Entity,
    handedness: Handedness,
    stage_from_grip: &Affine3A,
) -> Entity {
    world.spawn((
        Grip { handedness },
        Info::named(&format!("{handedness:?} Grip")),
        LocalTransform::from(*stage_from_grip),
        GlobalTransform::default(),
        Parent(stage_entity),
    ))
}
