use std::{path::PathBuf, sync::mpsc, sync::Arc};

use crate::{
    asset_importer::{load_model, Model},
    ShooError, ShooResult,
};

/// Identifies a single model load. Handed out by [`crate::AssetLoader::load_model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub u64);

/// Where a model should be loaded from
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// A `.gltf` or `.glb` file on disk
    Path(PathBuf),
    /// The contents of a `.gltf` or `.glb` file, usually from `include_bytes!`
    Bytes(Arc<Vec<u8>>),
}

impl AssetSource {
    /// A short name for the asset, used in logs and as the [`Model`]'s name
    pub fn name(&self) -> String {
        match self {
            AssetSource::Path(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            AssetSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

/// Posted back to the engine when a load finishes, one way or the other
#[derive(Debug)]
pub enum AssetEvent {
    /// The model is ready to be added to a scene
    Loaded {
        /// The load this answers
        id: AssetId,
        /// The model
        model: Model,
    },
    /// The model couldn't be loaded
    Failed {
        /// The load this answers
        id: AssetId,
        /// What went wrong
        error: String,
    },
}

impl AssetEvent {
    /// Which load this event answers
    pub fn id(&self) -> AssetId {
        match self {
            AssetEvent::Loaded { id, .. } | AssetEvent::Failed { id, .. } => *id,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LoadRequest {
    pub(crate) id: AssetId,
    pub(crate) source: AssetSource,
}

/// A background thread that loads models off the frame loop.
pub(crate) struct Workers {
    sender: tokio::sync::mpsc::UnboundedSender<LoadRequest>,
    receiver: mpsc::Receiver<AssetEvent>,
}

impl Workers {
    pub fn new() -> ShooResult<Self> {
        let (to_engine, from_worker) = mpsc::channel();
        let (to_worker, mut from_engine) = tokio::sync::mpsc::unbounded_channel::<LoadRequest>();

        std::thread::Builder::new()
            .name("shoo_worker".into())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        log::error!("[SHOO_WORKER] Unable to start runtime: {e:?}");
                        return;
                    }
                };

                let local_set = tokio::task::LocalSet::new();
                local_set.spawn_local(async move {
                    while let Some(request) = from_engine.recv().await {
                        let to_engine = to_engine.clone();
                        tokio::task::spawn_local(async move {
                            let event = load(request).await;
                            if to_engine.send(event).is_err() {
                                log::debug!("[SHOO_WORKER] Engine went away, dropping load result");
                            }
                        });
                    }
                });

                log::debug!("[SHOO_WORKER] Runtime starting..");
                runtime.block_on(local_set);
                log::debug!("[SHOO_WORKER] Engine hung up, runtime finished");
            })?;

        Ok(Self {
            sender: to_worker,
            receiver: from_worker,
        })
    }

    /// Ask the worker to load a model. The answer arrives through [`Workers::drain`].
    pub fn request(&self, id: AssetId, source: AssetSource) -> ShooResult<()> {
        self.sender
            .send(LoadRequest { id, source })
            .map_err(|_| ShooError::WorkerDisconnected)
    }

    /// Every load that has finished since the last call
    pub fn drain(&self) -> Vec<AssetEvent> {
        self.receiver.try_iter().collect()
    }
}

async fn load(request: LoadRequest) -> AssetEvent {
    let LoadRequest { id, source } = request;
    let name = source.name();
    let result = match source {
        AssetSource::Path(path) => match tokio::fs::read(&path).await {
            Ok(bytes) => load_model(&name, &bytes),
            Err(e) => Err(e.into()),
        },
        AssetSource::Bytes(bytes) => load_model(&name, &bytes),
    };

    match result {
        Ok(model) => {
            log::info!("[SHOO_WORKER] Loaded {name}");
            AssetEvent::Loaded { id, model }
        }
        Err(e) => {
            log::error!("[SHOO_WORKER] Failed to load {name}: {e:?}");
            AssetEvent::Failed {
                id,
                error: e.to_string(),
            }
        }
    }
}
