use shoo::{
    contexts::InputContext, workers::AssetEvent, AssetLoader, Engine, ShooResult, TickData,
};

use crate::{
    config::GameConfig,
    resources::{GameEvent, GameState},
    scenes::{ActiveScene, GameScene, MenuScene},
};

/// The game: which state it's in, and the scene that state is showing.
#[derive(Debug)]
pub struct App {
    config: GameConfig,
    state: GameState,
    scene: ActiveScene,
    cutscene_remaining: f32,
}

impl App {
    pub fn new(config: GameConfig) -> ShooResult<Self> {
        Ok(Self {
            config,
            state: GameState::Start,
            scene: ActiveScene::Menu(MenuScene::new("Start Game")?),
            cutscene_remaining: 0.,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    /// Run one frame against the engine
    pub fn tick(&mut self, engine: &mut Engine, tick_data: TickData) -> ShooResult<()> {
        let input_context = engine.input_context.clone();
        let asset_events = engine.take_asset_events();
        self.update(&input_context, asset_events, engine, tick_data.delta)
    }

    /// Run one frame: tick the active scene, then act on whatever it reports.
    pub fn update(
        &mut self,
        input_context: &InputContext,
        asset_events: Vec<AssetEvent>,
        loader: &mut dyn AssetLoader,
        delta: f32,
    ) -> ShooResult<()> {
        let mut event = match &mut self.scene {
            ActiveScene::Menu(menu) => menu.tick(input_context)?,
            ActiveScene::Game(game) => game.tick(input_context, asset_events, loader)?,
        };

        if self.state == GameState::Cutscene && event.is_none() {
            self.cutscene_remaining -= delta;
            if self.cutscene_remaining <= 0. {
                event = Some(GameEvent::CutsceneFinished);
            }
        }

        if let Some(event) = event {
            self.transition(event, loader)?;
        }

        Ok(())
    }

    fn transition(&mut self, event: GameEvent, loader: &mut dyn AssetLoader) -> ShooResult<()> {
        let Some(next_state) = self.state.next(event) else {
            log::warn!(
                "[FLY_SWAT] Ignoring {event:?}, it means nothing in {:?}",
                self.state
            );
            return Ok(());
        };
        log::info!("[FLY_SWAT] {:?} -> {next_state:?}", self.state);

        match next_state {
            GameState::Start => self.scene = ActiveScene::Menu(MenuScene::new("Start Game")?),
            GameState::Game => {
                self.scene = ActiveScene::Game(GameScene::new(&self.config, loader)?)
            }
            GameState::Lose => self.scene = ActiveScene::Menu(MenuScene::new("Try Again")?),
            GameState::Cutscene => self.cutscene_remaining = self.config.cutscene_seconds,
        }

        self.state = next_state;
        Ok(())
    }
}
