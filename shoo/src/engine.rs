use crate::{
    contexts::{InputContext, InputSource},
    simulator::SimulatedInput,
    workers::{AssetEvent, AssetId, AssetSource, Workers},
    ShooError, ShooResult, DEFAULT_REFRESH_RATE,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::sleep,
    time::{Duration, Instant},
};

/// Builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    refresh_rate: Option<f32>,
    input_source: Option<Box<dyn InputSource>>,
}

impl EngineBuilder {
    /// Create an `EngineBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Pace frames to this many per second. With `None`, frames run back to back and every tick
    /// reports a delta of exactly one frame at [`DEFAULT_REFRESH_RATE`]. Rates that don't give a finite frame time
    /// are treated as `None`.
    pub fn refresh_rate(mut self, refresh_rate: Option<f32>) -> Self {
        self.refresh_rate = refresh_rate.filter(|r| *r > 0. && (1. / r).is_finite());
        self
    }

    /// Where the engine gets its input from. Defaults to a [`SimulatedInput`] with nothing scripted.
    pub fn input_source(mut self, input_source: impl InputSource + 'static) -> Self {
        self.input_source = Some(Box::new(input_source));
        self
    }

    /// Build the `Engine`
    pub fn build(self) -> ShooResult<Engine> {
        let should_quit = Arc::new(AtomicBool::from(false));

        // Register a Ctrl-C handler. This can only be done once per process, so a second engine just goes without.
        {
            let should_quit = should_quit.clone();
            if let Err(e) = ctrlc::set_handler(move || should_quit.store(true, Ordering::Relaxed))
            {
                log::warn!("[SHOO_ENGINE] Unable to register Ctrl-C handler: {e}");
            }
        }

        log::info!(
            "[SHOO_ENGINE] Starting, refresh rate {}",
            self.refresh_rate
                .map(|r| format!("{r}Hz"))
                .unwrap_or_else(|| "unpaced".into())
        );

        Ok(Engine {
            should_quit,
            refresh_rate: self.refresh_rate,
            input_source: self
                .input_source
                .unwrap_or_else(|| Box::new(SimulatedInput::new())),
            input_context: Default::default(),
            performance_timers: Default::default(),
            workers: Workers::new()?,
            asset_events: Default::default(),
            next_asset_id: 0,
            frame_index: 0,
            last_frame: Instant::now(),
        })
    }
}

/// Something that can load models in the background.
///
/// Loads never block. Each call hands back an [`AssetId`], and the matching [`AssetEvent`] turns up later.
pub trait AssetLoader {
    /// Start loading a model
    fn load_model(&mut self, source: AssetSource) -> AssetId;
}

/// The Shoo Engine
/// A wrapper around the "external world" from the perspective of a game: input, the clock and background loading.
/// **IMPORTANT**: make sure you call `update` and then `finish` each tick
pub struct Engine {
    should_quit: Arc<AtomicBool>,
    refresh_rate: Option<f32>,
    input_source: Box<dyn InputSource>,
    /// Input context
    pub input_context: InputContext,
    /// Performance timers
    pub performance_timers: PerformanceTimers,
    workers: Workers,
    asset_events: Vec<AssetEvent>,
    next_asset_id: u64,
    frame_index: u64,
    last_frame: Instant,
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct PerformanceTimers {
    pub frame_start: Instant,
    pub timings: Vec<usize>,
    pub last_update: Instant,
}

impl PerformanceTimers {
    fn start(&mut self) {
        self.frame_start = Instant::now();
    }

    fn end(&mut self) {
        let now = Instant::now();
        let tic_time = now - self.frame_start;
        self.timings.push(tic_time.as_micros() as usize);

        if (now - self.last_update).as_secs_f32() >= 1.0 {
            let average = self.timings.iter().sum::<usize>() / self.timings.len();
            log::debug!("[SHOO_PERF] Average tic time: {average}us");
            self.last_update = now;
            self.timings.clear();
        }
    }
}

impl Default for PerformanceTimers {
    fn default() -> Self {
        Self {
            frame_start: Instant::now(),
            last_update: Instant::now(),
            timings: Default::default(),
        }
    }
}

/// The result of calling `update()` on Engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickData {
    /// Which frame this is, starting from 0
    pub frame_index: u64,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl Engine {
    /// Create a new instance of the engine with the default settings
    pub fn new() -> ShooResult<Self> {
        EngineBuilder::new()
            .refresh_rate(Some(DEFAULT_REFRESH_RATE))
            .build()
    }

    /// IMPORTANT: Call this function each tick to pick up input and finished loads
    pub fn update(&mut self) -> ShooResult<TickData> {
        if self.should_quit.load(Ordering::Acquire) {
            log::info!("[SHOO_ENGINE] Shoo is now exiting!");
            return Err(ShooError::ShuttingDown);
        }

        let delta = match self.refresh_rate {
            Some(refresh_rate) => {
                let frame_time = Duration::from_secs_f32(1. / refresh_rate);
                let elapsed = self.last_frame.elapsed();
                if elapsed < frame_time {
                    sleep(frame_time - elapsed);
                }
                let now = Instant::now();
                let delta = (now - self.last_frame).as_secs_f32();
                self.last_frame = now;
                delta
            }
            None => 1. / DEFAULT_REFRESH_RATE,
        };

        let events = self.input_source.poll(self.frame_index);
        self.input_context.update(&events);
        if self.input_context.quit_requested() {
            log::info!("[SHOO_ENGINE] Quit requested, Shoo is now exiting!");
            return Err(ShooError::ShuttingDown);
        }

        // Check to see if there are any messages from our workers:
        self.asset_events.extend(self.workers.drain());

        self.performance_timers.start();
        Ok(TickData {
            frame_index: self.frame_index,
            delta,
        })
    }

    /// Call this after update
    pub fn finish(&mut self) -> ShooResult<()> {
        self.performance_timers.end();
        self.frame_index += 1;
        Ok(())
    }

    /// Every load that has finished since the last call. Each [`AssetId`] is answered exactly once.
    pub fn take_asset_events(&mut self) -> Vec<AssetEvent> {
        std::mem::take(&mut self.asset_events)
    }

    /// The frame that the next call to `update` will return
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

impl AssetLoader for Engine {
    fn load_model(&mut self, source: AssetSource) -> AssetId {
        let id = AssetId(self.next_asset_id);
        self.next_asset_id += 1;
        log::debug!("[SHOO_ENGINE] Loading {} as {id:?}", source.name());

        if let Err(e) = self.workers.request(id, source) {
            self.asset_events.push(AssetEvent::Failed {
                id,
                error: e.to_string(),
            });
        }

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::InputEvent;

    fn unpaced(input: SimulatedInput) -> Engine {
        EngineBuilder::new()
            .refresh_rate(None)
            .input_source(input)
            .build()
            .unwrap()
    }

    #[test]
    fn test_frames_count_up() {
        let mut engine = unpaced(SimulatedInput::new());
        for i in 0..3 {
            let tick_data = engine.update().unwrap();
            assert_eq!(tick_data.frame_index, i);
            assert!((tick_data.delta - 1. / DEFAULT_REFRESH_RATE).abs() < f32::EPSILON);
            engine.finish().unwrap();
        }
        assert_eq!(engine.frame_index(), 3);
    }

    #[test]
    fn test_quit_event_shuts_down() {
        let mut engine = unpaced(SimulatedInput::from_script([(1, InputEvent::Quit)]));
        assert!(engine.update().is_ok());
        engine.finish().unwrap();
        assert!(matches!(engine.update(), Err(ShooError::ShuttingDown)));
    }

    #[test]
    fn test_paced_frames_take_time() {
        let mut engine = EngineBuilder::new()
            .refresh_rate(Some(100.))
            .build()
            .unwrap();
        let start = Instant::now();
        for _ in 0..3 {
            engine.update().unwrap();
            engine.finish().unwrap();
        }
        assert!(start.elapsed() >= Duration::from_millis(25));
    }

    #[test]
    fn test_unusable_refresh_rates_run_unpaced() {
        for refresh_rate in [0., -72., 1e-40, f32::NAN, f32::NEG_INFINITY] {
            let mut engine = EngineBuilder::new()
                .refresh_rate(Some(refresh_rate))
                .build()
                .unwrap();
            assert_eq!(engine.refresh_rate, None);
            let tick_data = engine.update().unwrap();
            assert!((tick_data.delta - 1. / DEFAULT_REFRESH_RATE).abs() < f32::EPSILON);
            engine.finish().unwrap();
        }
    }

    #[test]
    fn test_load_model_answers_each_id_once() {
        let mut engine = unpaced(SimulatedInput::new());
        let first = engine.load_model(AssetSource::Bytes(Arc::new(b"nope".to_vec())));
        let second = engine.load_model(AssetSource::Bytes(Arc::new(b"nope".to_vec())));
        assert_ne!(first, second);

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut answered = Vec::new();
        while answered.len() < 2 && Instant::now() < deadline {
            engine.update().unwrap();
            answered.extend(engine.take_asset_events().iter().map(|e| e.id()));
            engine.finish().unwrap();
        }
        answered.sort();
        assert_eq!(answered, vec![first, second]);
    }
}
