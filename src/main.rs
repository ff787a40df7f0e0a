use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use readalong::cli::{Cli, Commands, ConfigCommands};
use readalong::Config;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose; logs go to stderr to keep output clean
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Index { file, json } => commands::index::handle_index(&file, json, &config),
        Commands::Locate { file, timing } => {
            commands::index::handle_locate(&file, timing.time, timing.duration, &config)
        }
        Commands::Seek {
            file,
            word,
            duration,
        } => commands::index::handle_seek(&file, word, duration, &config),
        Commands::Render { file } => commands::render::handle_render(&file, &config),
        Commands::Play(args) => commands::play::handle_play(&args, &config),
        Commands::Cite { references, spec } => commands::cite::handle_cite(&references, &spec),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
    }
}
