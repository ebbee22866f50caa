//! CampusHub library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { user_id, name } => {
            cli::commands::session::login(cli, cfg, user_id, name.as_deref())
        }
        Commands::Logout => cli::commands::session::logout(cli, cfg),
        Commands::Whoami => cli::commands::session::whoami(cli, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cli, cfg),
        Commands::Events { action } => cli::commands::events::handle(action, cli, cfg),
        Commands::Complaints { action } => cli::commands::complaints::handle(action, cli, cfg),
        Commands::Feedback { action } => cli::commands::feedback::handle(action, cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; the `--db` flag overrides the configured database
    // for this invocation only. Relative names resolve into the config
    // directory, same as at init time.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db(custom_db).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
