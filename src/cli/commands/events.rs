use crate::cli::parser::{Cli, EventsAction};
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::gateway::SqliteGateway;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::event::{CategoryFilter, Event, EventCategory, EventsTable, NewEvent};
use crate::session;
use crate::ui::messages;
use crate::utils::colors::colorize_category;
use crate::utils::date::parse_event_date;
use crate::utils::table::{Column, Table};

pub fn handle(action: &EventsAction, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let identity = session::current(cli.acting_user.as_deref(), cfg);
    let mut gateway = SqliteGateway::open(&cfg.database)?;
    let mut controller = Controller::<EventsTable>::new();

    match action {
        EventsAction::List { category, json } => {
            let filter = CategoryFilter::from_arg(category.as_deref())?;

            if let Err(e) = controller.fetch(&mut gateway, identity.as_ref()) {
                messages::error("Failed to load events");
                return Err(e);
            }

            let visible = controller.filtered(|ev| filter.matches(ev));

            if *json {
                let payload = serde_json::to_string_pretty(&visible)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{payload}");
                return Ok(());
            }

            if visible.is_empty() {
                messages::info("No events found");
                return Ok(());
            }

            print_events(&visible);
        }

        EventsAction::Add {
            title,
            description,
            category,
            event_date,
        } => {
            let category = match category.as_deref() {
                Some(raw) => EventCategory::from_arg(raw)
                    .ok_or_else(|| AppError::InvalidCategory(raw.to_string()))?,
                None => EventCategory::from_arg(&cfg.default_event_category)
                    .unwrap_or_default(),
            };

            let event_date = parse_event_date(event_date)
                .ok_or_else(|| AppError::InvalidDate(event_date.clone()))?;

            let draft = NewEvent {
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                category,
                event_date,
            };

            if let Err(e) = controller.submit(&mut gateway, identity.as_ref(), &draft) {
                match &e {
                    AppError::AuthRequired => {
                        messages::error("You must be signed in to create events")
                    }
                    AppError::Validation(_) => {}
                    _ => messages::error("Failed to create event"),
                }
                return Err(e);
            }

            audit(&gateway.pool.conn, "insert", "events", title)?;
            messages::success("Event created successfully!");
        }
    }

    Ok(())
}

fn print_events(events: &[&Event]) {
    let mut table = Table::new(vec![
        Column::new("WHEN", 16),
        Column::new("TITLE", 28),
        Column::new("CATEGORY", 12),
        Column::new("BY", 12),
    ]);

    for ev in events {
        table.add_row(vec![
            ev.event_date_str(),
            ev.title.clone(),
            colorize_category(ev.category.to_db_str()),
            ev.created_by.clone(),
        ]);
    }

    print!("{}", table.render());

    for ev in events {
        if !ev.description.trim().is_empty() {
            println!();
            println!("• {}", ev.title);
            for line in textwrap::wrap(&ev.description, 72) {
                println!("  {line}");
            }
        }
    }
}
