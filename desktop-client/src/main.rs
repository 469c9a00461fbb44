mod canvas;
mod colors;
mod command_sender;
mod config;
mod local_game;
mod state;
mod ui;

use clap::Parser;
use common::logger::{self, LogLevel};
use common::log;
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use config::get_config_manager;
use local_game::local_game_task;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML config file. Defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    let grid = config.game.grid();

    let shared_state = SharedState::new();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let seed = args.seed;
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();
        match runtime {
            Ok(rt) => rt.block_on(local_game_task(config, seed, shared_state_clone, input_rx)),
            Err(e) => log!("Failed to start game runtime: {}", e),
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([grid.width() as f32 + 40.0, grid.height() as f32 + 200.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                CommandSender::new(input_tx),
                grid,
            )))
        }),
    )?;

    Ok(())
}
