//! `login`, `logout`, and `whoami` handlers.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session;
use crate::ui::messages;

pub fn login(cli: &Cli, cfg: &Config, user_id: &str, name: Option<&str>) -> AppResult<()> {
    // cfg.database already carries any `--db` override, resolved by run().
    let updated = Config {
        database: cfg.database.clone(),
        default_event_category: cfg.default_event_category.clone(),
        user_id: Some(user_id.trim().to_string()),
        display_name: name.map(|n| n.to_string()),
    };

    if !cli.test {
        updated.save()?;
    }

    match name {
        Some(n) => messages::success(format!("Signed in as {n} ({user_id})")),
        None => messages::success(format!("Signed in as {user_id}")),
    }
    Ok(())
}

pub fn logout(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let updated = Config {
        database: cfg.database.clone(),
        default_event_category: cfg.default_event_category.clone(),
        user_id: None,
        display_name: None,
    };

    if !cli.test {
        updated.save()?;
    }

    messages::success("Signed out.");
    Ok(())
}

pub fn whoami(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match session::current(cli.acting_user.as_deref(), cfg) {
        Some(id) => match &cfg.display_name {
            Some(n) if cli.acting_user.is_none() => println!("{} ({})", id.user_id, n),
            _ => println!("{}", id.user_id),
        },
        None => messages::info("Not signed in."),
    }
    Ok(())
}
