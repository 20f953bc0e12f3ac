use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shoo::{glam::Vec3, workers::AssetSource};

/// Name of the environment variable pointing at a JSON config file
pub const CONFIG_ENV_VAR: &str = "FLY_SWAT_CONFIG";

static FLY_MODEL: &[u8] = include_bytes!("../assets/fly.gltf");
static SWATTER_MODEL: &[u8] = include_bytes!("../assets/fly_swatter.gltf");

/// How the swatter gets into the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwatterMode {
    /// Loaded when the right controller connects and held in the player's hand
    #[default]
    Controller,
    /// Loaded with the fly and left at `fixed_swatter_position`
    Fixed,
}

/// Everything about the game that can be tuned without a rebuild.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub swatter_mode: SwatterMode,
    pub fly_start: Vec3,
    pub fly_scale: f32,
    /// How far the fly moves each frame. Frames, not seconds.
    pub fly_step: f32,
    pub fly_axis: Vec3,
    /// Once the fly is this far from `fly_start`, it has got away
    pub fly_escape_distance: f32,
    /// Which of the swatter's meshes does the swatting
    pub swatter_hit_mesh: usize,
    pub swatter_offset: Vec3,
    pub swatter_scale: f32,
    pub fixed_swatter_position: Vec3,
    pub gravity: Vec3,
    pub solver_iterations: usize,
    pub cutscene_seconds: f32,
    pub fly_model: Option<PathBuf>,
    pub swatter_model: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            swatter_mode: SwatterMode::Controller,
            fly_start: Vec3::new(0., 1., -8.5),
            fly_scale: 20.,
            fly_step: 0.0001,
            fly_axis: Vec3::X,
            fly_escape_distance: 12.5,
            swatter_hit_mesh: 2,
            swatter_offset: Vec3::new(0., 0., 0.5),
            swatter_scale: 0.25,
            fixed_swatter_position: Vec3::new(0., 1., -8.5),
            gravity: Vec3::new(0., -1., 0.),
            solver_iterations: 10,
            cutscene_seconds: 3.,
            fly_model: None,
            swatter_model: None,
        }
    }
}

impl GameConfig {
    /// Read the config from the file named by [`CONFIG_ENV_VAR`], or fall back to the defaults if it isn't set.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Default::default()),
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config = serde_json::from_slice(&contents)
            .with_context(|| format!("Unable to parse config file {}", path.display()))?;
        log::info!("[FLY_SWAT] Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn fly_source(&self) -> AssetSource {
        model_source(&self.fly_model, FLY_MODEL)
    }

    pub fn swatter_source(&self) -> AssetSource {
        model_source(&self.swatter_model, SWATTER_MODEL)
    }
}

fn model_source(path: &Option<PathBuf>, embedded: &'static [u8]) -> AssetSource {
    match path {
        Some(path) => AssetSource::Path(path.clone()),
        None => AssetSource::Bytes(Arc::new(embedded.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "swatter_mode": "fixed", "fly_step": 0.5 }"#).unwrap();
        assert_eq!(config.swatter_mode, SwatterMode::Fixed);
        assert_eq!(config.fly_step, 0.5);
        assert_eq!(config.fly_scale, 20.);
        assert_eq!(config.swatter_hit_mesh, 2);
    }

    #[test]
    fn test_model_sources() {
        let mut config = GameConfig::default();
        assert!(matches!(config.fly_source(), AssetSource::Bytes(_)));

        config.swatter_model = Some("models/swatter.glb".into());
        assert!(matches!(config.swatter_source(), AssetSource::Path(p) if p.ends_with("swatter.glb")));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let error = GameConfig::from_path(Path::new("/no/such/config.json")).unwrap_err();
        assert!(error.to_string().contains("/no/such/config.json"));
    }
}
