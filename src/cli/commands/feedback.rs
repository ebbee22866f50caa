use crate::cli::parser::{Cli, FeedbackAction};
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::gateway::SqliteGateway;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::feedback::{Feedback, FeedbackTable, NewFeedback};
use crate::session;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

pub fn handle(action: &FeedbackAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let identity = session::current(cli.acting_user.as_deref(), cfg);
    let mut gateway = SqliteGateway::open(&cfg.database)?;
    let mut controller = Controller::<FeedbackTable>::new();

    match action {
        FeedbackAction::List { json } => {
            if identity.is_none() {
                messages::warning("Sign in to see your feedback.");
                return Ok(());
            }

            if let Err(e) = controller.fetch(&mut gateway, identity.as_ref()) {
                messages::error("Failed to load feedback");
                return Err(e);
            }

            if *json {
                let payload = serde_json::to_string_pretty(controller.records())
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{payload}");
                return Ok(());
            }

            if controller.records().is_empty() {
                messages::info("No feedback shared yet");
                return Ok(());
            }

            print_feedback(controller.records());
        }

        FeedbackAction::Add { title, message } => {
            let draft = NewFeedback {
                title: title.clone(),
                message: message.clone(),
            };

            if let Err(e) = controller.submit(&mut gateway, identity.as_ref(), &draft) {
                match &e {
                    AppError::AuthRequired => messages::error("You must be signed in"),
                    AppError::Validation(_) => {}
                    _ => messages::error("Failed to share feedback"),
                }
                return Err(e);
            }

            audit(&gateway.pool.conn, "insert", "feedback", title)?;
            messages::success("Feedback shared successfully!");
        }
    }

    Ok(())
}

fn print_feedback(feedback: &[Feedback]) {
    let mut table = Table::new(vec![
        Column::new("TITLE", 28),
        Column::new("MESSAGE", 40),
        Column::new("SHARED", 25),
    ]);

    for f in feedback {
        table.add_row(vec![f.title.clone(), f.message.clone(), f.created_at.clone()]);
    }

    print!("{}", table.render());
}
