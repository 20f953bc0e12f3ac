use std::fmt::Write;

use hecs::{Entity, World};

use crate::{
    components::{Info, LocalTransform, Parent},
    contexts::InputContext,
};

/// A simple system used to assist with debugging a scene.
///
/// When the player toggles the inspector, the scene graph is written to the log. Returns what was logged.
pub fn debug_system(world: &World, input_context: &InputContext) -> Option<String> {
    if !input_context.inspector_toggled() {
        return None;
    }

    let dump = describe_scene(world);
    log::info!("[SHOO_DEBUG] Scene graph:\n{dump}");
    Some(dump)
}

/// Render every entity in the world as an indented tree, roots first
pub fn describe_scene(world: &World) -> String {
    let mut roots = world
        .iter()
        .filter(|e| !e.has::<Parent>())
        .map(|e| e.entity())
        .collect::<Vec<_>>();
    roots.sort_by_key(|e| e.id());

    let mut output = String::new();
    for root in roots {
        describe_entity(world, root, 0, &mut output);
    }
    output
}

fn describe_entity(world: &World, entity: Entity, depth: usize, output: &mut String) {
    let name = world
        .get::<&Info>(entity)
        .map(|i| i.name.clone())
        .unwrap_or_else(|_| format!("{entity:?}"));
    let translation = world
        .get::<&LocalTransform>(entity)
        .map(|t| format!(" @ {:.2?}", t.translation.to_array()))
        .unwrap_or_default();
    let _ = writeln!(output, "{}{name}{translation}", "  ".repeat(depth));

    let mut children = world
        .query::<&Parent>()
        .iter()
        .filter(|(_, p)| p.0 == entity)
        .map(|(e, _)| e)
        .collect::<Vec<_>>();
    children.sort_by_key(|e| e.id());
    for child in children {
        describe_entity(world, child, depth + 1, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::InputEvent;

    #[test]
    fn test_debug_system() {
        let mut world = World::new();
        let parent = world.spawn((Info::named("Fly"), LocalTransform::default()));
        world.spawn((Info::named("Wings"), Parent(parent)));
        world.spawn((Info::named("Ground"),));

        let mut input_context = InputContext::default();
        input_context.update(&[]);
        assert!(debug_system(&world, &input_context).is_none());

        input_context.update(&[InputEvent::ToggleInspector]);
        let dump = debug_system(&world, &input_context).unwrap();
        assert_eq!(dump, "Fly @ [0.00, 0.00, 0.00]\n  Wings\nGround\n");
    }
}
