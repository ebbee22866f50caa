use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::dashboard;
use crate::db::gateway::SqliteGateway;
use crate::errors::AppResult;
use crate::session;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREEN, RESET};
use crate::utils::date::now_local;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(identity) = session::current(cli.acting_user.as_deref(), cfg) else {
        messages::warning("Sign in to see your dashboard.");
        return Ok(());
    };

    let mut gateway = SqliteGateway::open(&cfg.database)?;
    let now = now_local();

    let dash = match dashboard::load(&mut gateway, &identity, &now) {
        Ok(d) => d,
        Err(e) => {
            messages::error("Failed to load dashboard");
            return Err(e);
        }
    };

    match &cfg.display_name {
        Some(n) if cli.acting_user.is_none() => messages::header(format!("Welcome back, {n}!")),
        _ => messages::header("Welcome back!"),
    }
    println!();

    println!(
        "{CYAN}• Total events:{RESET}  {GREEN}{}{RESET}",
        dash.stats.total_events
    );
    println!(
        "{CYAN}• My complaints:{RESET} {GREEN}{}{RESET}",
        dash.stats.my_complaints
    );
    println!(
        "{CYAN}• My feedback:{RESET}   {GREEN}{}{RESET}",
        dash.stats.my_feedback
    );
    println!();

    messages::header("Upcoming Events");
    if dash.upcoming.is_empty() {
        messages::info("No upcoming events");
    } else {
        for ev in &dash.upcoming {
            println!(
                "  {} | {} [{}]",
                ev.event_date_str(),
                ev.title,
                ev.category.to_db_str()
            );
        }
    }

    Ok(())
}
