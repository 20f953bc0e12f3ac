/// The Visibility component determines whether a given entity is shown or hidden within the world.
///
/// Hidden entities can't be picked by pointers.
///
/// Basic usage:
/// ```ignore
/// world.insert_one(entity, Visible {})
/// world.remove_one::<Visible>(entity)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Visible {}
