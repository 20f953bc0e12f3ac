/// Marker component for the top-level entity of an imported model
#[derive(Debug, Clone, Copy, Default)]
pub struct Root {}
