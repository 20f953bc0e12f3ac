use shoo::{
    asset_importer::{load_model, Model},
    workers::{AssetId, AssetSource},
    AssetLoader,
};

pub fn fly_model() -> Model {
    load_model("fly", include_bytes!("../assets/fly.gltf")).unwrap()
}

pub fn swatter_model() -> Model {
    load_model("fly_swatter", include_bytes!("../assets/fly_swatter.gltf")).unwrap()
}

/// Remembers what it was asked to load, and never loads anything
#[derive(Debug, Default)]
pub struct FakeLoader {
    pub requests: Vec<(AssetId, AssetSource)>,
}

impl AssetLoader for FakeLoader {
    fn load_model(&mut self, source: AssetSource) -> AssetId {
        let id = AssetId(self.requests.len() as u64 + 1000);
        self.requests.push((id, source));
        id
    }
}
