/// Component that adds some information about the entity
/// Useful for debugging - added by default by the asset importer
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Info {
    /// A helpful name
    pub name: String,
    /// Node ID from the original glTF file
    pub node_id: usize,
}

impl Info {
    /// Convenience function for entities that didn't come from a glTF file
    pub fn named(name: &str) -> Self {
        Info {
            name: name.to_string(),
            node_id: 0,
        }
    }
}
