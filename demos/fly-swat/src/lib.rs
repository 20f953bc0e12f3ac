mod app;
mod config;
mod resources;
mod scenes;
mod systems;
#[cfg(test)]
mod test_utils;

pub use app::App;
pub use config::{GameConfig, SwatterMode};

use std::f32::consts::PI;

use shoo::{
    components::Handedness,
    contexts::InputEvent,
    glam::{Affine3A, Quat},
    simulator::SimulatedInput,
    EngineBuilder, ShooError, ShooResult, DEFAULT_REFRESH_RATE,
};

pub fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("[FLY_SWAT] MAIN!");
    if let Err(e) = real_main() {
        log::error!("[FLY_SWAT] ERROR IN MAIN! {e:?}");
    }
}

pub fn real_main() -> ShooResult<()> {
    let config = GameConfig::load()?;
    let mut engine = EngineBuilder::new()
        .refresh_rate(Some(DEFAULT_REFRESH_RATE))
        .input_source(desktop_input())
        .build()?;
    let mut app = App::new(config)?;

    loop {
        let tick_data = match engine.update() {
            Ok(tick_data) => tick_data,
            Err(ShooError::ShuttingDown) => break,
            Err(e) => return Err(e),
        };
        app.tick(&mut engine, tick_data)?;
        engine.finish()?;
    }

    Ok(())
}

/// With no headset, a right hand reaches out, presses start, and holds the swatter where the fly will be.
/// A second round starts once the first cutscene is over.
fn desktop_input() -> SimulatedInput {
    let right = Handedness::Right;
    let trigger = |value| InputEvent::Trigger {
        handedness: right,
        value,
    };

    SimulatedInput::from_script([
        (
            1,
            InputEvent::ControllerConnected {
                handedness: right,
                grip: Some(Affine3A::from_translation([0., 1., -8.45].into())),
                pointer: Affine3A::from_rotation_translation(
                    Quat::from_rotation_y(PI),
                    [0., 0., -3.].into(),
                ),
            },
        ),
        (2, trigger(1.)),
        (3, trigger(0.)),
        (400, trigger(1.)),
        (401, trigger(0.)),
        (500, InputEvent::ToggleInspector),
        (600, InputEvent::Quit),
    ])
}
