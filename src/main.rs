use clap::Parser;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};
use log::info;

mod config;
mod geometry;
mod graphics;
mod orbit;
mod state;
mod widget;

use config::{Args, WorldConfig};
use state::{AppState, SimulationState};
use widget::ChaosWidget;

pub fn main() -> Result<(), PlatformError> {
    env_logger::init();

    let args = Args::parse();
    let world = WorldConfig::from_args(&args);
    info!(
        "window {}x{}, margin {}, radius {:.1}, {} points per flush",
        world.width,
        world.height,
        world.margin,
        world.radius(),
        world.points_per_flush
    );

    let main_window = WindowDesc::new(ChaosWidget::new(SimulationState::new(world)))
        .title(LocalizedString::new("Chaos Game"))
        .window_size((world.width, world.height));

    AppLauncher::with_window(main_window).launch(AppState::new())?;

    Ok(())
}
