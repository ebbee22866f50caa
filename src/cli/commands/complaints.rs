use crate::cli::parser::{Cli, ComplaintsAction};
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::gateway::SqliteGateway;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::complaint::{Complaint, ComplaintCategory, ComplaintsTable, NewComplaint};
use crate::session;
use crate::ui::messages;
use crate::utils::colors::{colorize_category, colorize_status};
use crate::utils::table::{Column, Table};

pub fn handle(action: &ComplaintsAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let identity = session::current(cli.acting_user.as_deref(), cfg);
    let mut gateway = SqliteGateway::open(&cfg.database)?;
    let mut controller = Controller::<ComplaintsTable>::new();

    match action {
        ComplaintsAction::List { json } => {
            if identity.is_none() {
                messages::warning("Sign in to see your complaints.");
                return Ok(());
            }

            if let Err(e) = controller.fetch(&mut gateway, identity.as_ref()) {
                messages::error("Failed to load complaints");
                return Err(e);
            }

            if *json {
                let payload = serde_json::to_string_pretty(controller.records())
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{payload}");
                return Ok(());
            }

            if controller.records().is_empty() {
                messages::info("No complaints submitted yet");
                return Ok(());
            }

            print_complaints(controller.records());
        }

        ComplaintsAction::Add {
            title,
            description,
            category,
        } => {
            let category = match category.as_deref() {
                Some(raw) => ComplaintCategory::from_arg(raw)
                    .ok_or_else(|| AppError::InvalidCategory(raw.to_string()))?,
                None => ComplaintCategory::default(),
            };

            let draft = NewComplaint {
                title: title.clone(),
                description: description.clone(),
                category,
            };

            if let Err(e) = controller.submit(&mut gateway, identity.as_ref(), &draft) {
                match &e {
                    AppError::AuthRequired => messages::error("You must be signed in"),
                    AppError::Validation(_) => {}
                    _ => messages::error("Failed to submit complaint"),
                }
                return Err(e);
            }

            audit(&gateway.pool.conn, "insert", "complaints", title)?;
            messages::success("Complaint submitted successfully!");
        }
    }

    Ok(())
}

fn print_complaints(complaints: &[Complaint]) {
    let mut table = Table::new(vec![
        Column::new("TITLE", 28),
        Column::new("CATEGORY", 12),
        Column::new("STATUS", 12),
        Column::new("FILED", 25),
    ]);

    for c in complaints {
        table.add_row(vec![
            c.title.clone(),
            colorize_category(c.category.to_db_str()),
            colorize_status(&c.status),
            c.created_at.clone(),
        ]);
    }

    print!("{}", table.render());
}
