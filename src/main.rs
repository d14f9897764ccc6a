//! Binary entrypoint for the mofdin text adventure.
//!
//! Runs one session on the terminal, reading a line per choice. Logging goes
//! to stderr so it never interleaves with the scene text.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use mofdin::build_info::VERSION_LINE;
use mofdin::config::{GameConfig, LOG_ENV_VAR};
use mofdin::{Game, SaveManager, TerminalConsole};

#[derive(Parser)]
#[command(name = "mofdin")]
#[command(about = "A small terminal adventure: slay the dragon")]
#[command(version = VERSION_LINE)]
struct Cli {
    /// Save file location (defaults to ~/.mofdin/player.json)
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Seed the dice for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let config = match GameConfig::resolve(cli.save, cli.seed, cli.verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("mofdin: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config);
    log::info!(
        "Starting mofdin {} with save file {}",
        env!("CARGO_PKG_VERSION"),
        config.save_path.display()
    );
    if let Some(seed) = config.seed {
        log::debug!("Using fixed seed {}", seed);
    }

    let mut game = Game::new(
        TerminalConsole::new(),
        config.rng(),
        SaveManager::new(&config.save_path),
    );
    match game.run() {
        Ok(outcome) => {
            log::info!("Session ended: {:?}", outcome);
        }
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(config: &GameConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level());
    builder.parse_env(LOG_ENV_VAR);
    builder.target(env_logger::Target::Stderr);
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    if let Err(e) = builder.try_init() {
        eprintln!("mofdin: logging disabled: {}", e);
    }
}
