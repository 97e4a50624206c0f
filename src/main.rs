use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info, LevelFilter};
use termion::input::TermRead;
use termion::raw::IntoRawMode;

use crate::config::game_config::load_game_config;
use crate::engine::game_engine::GameEngine;
use crate::engine::level::Level;
use crate::error::errors::GameError;
use crate::settings::{RenderMode, Settings, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use crate::terminal::terminal_manager;
use crate::view::console_view::ConsoleView;
use crate::view::tui_view::TuiView;
use crate::view::GameView;

mod character;
mod config;
mod engine;
mod error;
mod logging;
mod map;
mod settings;
mod terminal;
mod ui;
mod view;

#[derive(Parser)]
#[command(name = "gridwalk")]
#[command(about = "Walk a tile map in the terminal and pick up what you find")]
#[command(version)]
struct Cli {
    /// Directory holding map.json, items.json, terrain.json and optionally theme.json
    #[arg(short, long, default_value = "resources")]
    config_dir: PathBuf,

    /// How to draw the game
    #[arg(short, long, value_enum, default_value_t = RenderMode::Tui)]
    mode: RenderMode,

    /// Viewport width in tiles
    #[arg(long, default_value_t = DEFAULT_VIEW_WIDTH)]
    view_width: u16,

    /// Viewport height in tiles
    #[arg(long, default_value_t = DEFAULT_VIEW_HEIGHT)]
    view_height: u16,

    #[arg(long, default_value = "gridwalk.log")]
    log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    #[arg(short, long, default_value = "Player")]
    player_name: String,
}

fn run_game<V: GameView>(view: V, level: Level, settings: Settings) -> Result<(), GameError> {
    let mut engine = GameEngine::new(view, level, settings);
    engine.run(io::stdin().keys())
}

fn run(cli: Cli) -> Result<(), GameError> {
    let config = load_game_config(&cli.config_dir)?;
    let settings = Settings::new(cli.view_width, cli.view_height, cli.mode, cli.player_name, config.theme.clone());
    let level = Level::from_config(&config, settings.player_name.clone());
    info!("Starting in {:?} mode with a {}x{} viewport", settings.render_mode, settings.view_width, settings.view_height);

    match settings.render_mode {
        RenderMode::Tui => {
            let view = TuiView::new(terminal_manager::init()?, settings.theme.clone());
            run_game(view, level, settings)
        },
        RenderMode::Console => {
            let view = ConsoleView::new(io::stdout().into_raw_mode()?, settings.theme.clone());
            run_game(view, level, settings)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_file, cli.log_level) {
        eprintln!("Failed to set up logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        error!("Exiting with error: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
    info!("Goodbye");
}
