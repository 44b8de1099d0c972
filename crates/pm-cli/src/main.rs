//! Terminal frontend for The Poirot Mystery.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use pm_game::GameConfig;

#[derive(Parser)]
#[command(
    name = "poirot",
    about = "The Poirot Mystery, a text detective game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the account and progress stores
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Secret words and riddles for the door games
    #[arg(long, global = true, default_value = "data/game_data.json")]
    content: PathBuf,

    /// Where the session log is written (`.md` for markdown, `.json` for JSON)
    #[arg(long, global = true, default_value = "log_file")]
    log_file: PathBuf,

    /// RNG seed for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Milliseconds per character when revealing story text (0 disables)
    #[arg(long, global = true, default_value = "5")]
    reveal_delay: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in or register, then investigate (the default)
    Play,

    /// Show the best detectives
    Leaderboard {
        /// Number of players to show
        #[arg(short = 'n', long, default_value_t = pm_store::DEFAULT_TOP)]
        top: usize,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_data_dir(&self.data_dir)
            .with_content_path(&self.content)
            .with_log_path(&self.log_file)
            .with_reveal_delay(self.reveal_delay);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(config),
        Commands::Leaderboard { top } => commands::leaderboard::run(config, top),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
