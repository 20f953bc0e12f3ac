use thiserror::Error;

/// Everything that can go wrong inside Shoo.
#[derive(Error, Debug)]
pub enum ShooError {
    /// The engine has been asked to quit
    #[error("The engine is shutting down")]
    ShuttingDown,
    /// The glTF file could not be parsed
    #[error("There was a problem parsing a glTF file")]
    GltfError(#[from] gltf::Error),
    /// The glTF file parsed, but doesn't describe something we can use
    #[error("Invalid model: {0}")]
    InvalidModel(String),
    /// A model didn't have a mesh at the index we expected
    #[error("Model {model} has no mesh at index {index}")]
    MissingMesh {
        /// Name of the model
        model: String,
        /// The index that was requested
        index: usize,
    },
    /// An entity was missing a component we expected it to have
    #[error(transparent)]
    ComponentError(#[from] hecs::ComponentError),
    /// An entity no longer exists
    #[error(transparent)]
    NoSuchEntity(#[from] hecs::NoSuchEntity),
    /// The background worker went away
    #[error("The asset worker has disconnected")]
    WorkerDisconnected,
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
