mod app;
mod config;

use clap::Parser;
use eframe::egui;
use engine::config::Validate;
use engine::game::{GameSettings, GameState, SessionRng};
use engine::logger::init_logger;

use app::ArcadeApp;
use config::load_display_config;

#[derive(Parser, Debug)]
#[command(
    name = "snake_arcade",
    about = "Single-player arcade snake on a toroidal grid"
)]
struct Args {
    /// Session seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Display config file (defaults to snake_arcade_config.yaml next to the executable)
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let display = load_display_config(args.config.as_deref())?;
    let settings = GameSettings::default();
    settings.validate()?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    engine::log!("Starting round with seed {}", rng.seed());

    let state = GameState::new(settings.clone(), &mut rng);

    let canvas_width = settings.grid.width as f32 * display.cell_size_px;
    let canvas_height = settings.grid.height as f32 * display.cell_size_px;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_width + 16.0, canvas_height + 56.0])
            .with_title("Snake Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(move |_cc| Ok(Box::new(ArcadeApp::new(state, rng, display)))),
    )?;

    Ok(())
}
