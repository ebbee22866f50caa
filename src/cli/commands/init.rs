use crate::config::Config;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg_path = Config::config_file();
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        // Must match the resolution init_all just recorded, or a relative
        // --db would migrate a different file than the config points at.
        cfg.database = Config::resolve_db(custom_db).to_string_lossy().to_string();
    }

    println!("⚙️  Initializing CampusHub…");
    println!("📄 Config file : {}", cfg_path.display());
    println!("🗄️  Database   : {}", &cfg.database);

    let conn = Connection::open(&cfg.database)?;
    run_pending_migrations(&conn)?;
    audit(&conn, "init", "", "database initialized")?;

    println!("✅ Ready. Sign in with `campushub login <user-id>`.");
    Ok(())
}
