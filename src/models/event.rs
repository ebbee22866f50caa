use crate::core::table::{Direction, Draft, OrderBy, Scope, Table, TableConfig};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Campus event categories, as offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventCategory {
    General,
    Academics,
    Clubs,
    Hostel,
}

impl EventCategory {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventCategory::General => "General",
            EventCategory::Academics => "Academics",
            EventCategory::Clubs => "Clubs",
            EventCategory::Hostel => "Hostel",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "General" => Some(EventCategory::General),
            "Academics" => Some(EventCategory::Academics),
            "Clubs" => Some(EventCategory::Clubs),
            "Hostel" => Some(EventCategory::Hostel),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (any case).
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(EventCategory::General),
            "academics" => Some(EventCategory::Academics),
            "clubs" => Some(EventCategory::Clubs),
            "hostel" => Some(EventCategory::Hostel),
            _ => None,
        }
    }
}

impl Default for EventCategory {
    fn default() -> Self {
        EventCategory::General
    }
}

/// Category filter for the events list. Purely client-side: it narrows the
/// already-fetched list and never touches the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn from_arg(s: Option<&str>) -> AppResult<Self> {
        match s {
            None => Ok(CategoryFilter::All),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(CategoryFilter::All),
            Some(raw) => EventCategory::from_arg(raw)
                .map(CategoryFilter::Only)
                .ok_or_else(|| AppError::InvalidCategory(raw.to_string())),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => event.category == *c,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,        // ⇔ events.description (TEXT, default '')
    pub category: EventCategory,    // ⇔ events.category
    pub event_date: NaiveDateTime,  // ⇔ events.event_date (TEXT "YYYY-MM-DD HH:MM")
    pub created_by: String,         // ⇔ events.created_by (owner identity, immutable)
    pub created_at: String,         // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    pub fn event_date_str(&self) -> String {
        crate::utils::date::fmt_event_date(&self.event_date)
    }
}

/// Creatable field set for an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub event_date: NaiveDateTime,
}

impl Draft for NewEvent {
    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title".to_string()));
        }
        // description is optional, date validity is enforced at parse time
        Ok(())
    }
}

pub struct EventsTable;

impl Table for EventsTable {
    type Row = Event;
    type Draft = NewEvent;

    fn config() -> TableConfig {
        TableConfig {
            table: "events",
            scope: Scope::Public,
            owner_column: "created_by",
            order: OrderBy {
                column: "event_date",
                direction: Direction::Asc,
            },
            requires_auth: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with(category: EventCategory, title: &str) -> Event {
        Event {
            id: 0,
            title: title.to_string(),
            description: String::new(),
            category,
            event_date: crate::utils::date::parse_event_date("2026-05-01 10:00").unwrap(),
            created_by: "u-alice".to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn category_round_trips_through_db_strings() {
        for c in [
            EventCategory::General,
            EventCategory::Academics,
            EventCategory::Clubs,
            EventCategory::Hostel,
        ] {
            assert_eq!(EventCategory::from_db_str(c.to_db_str()), Some(c));
        }
        assert_eq!(EventCategory::from_db_str("Sports"), None);
    }

    #[test]
    fn filter_all_is_the_identity_filter() {
        let f = CategoryFilter::from_arg(None).unwrap();
        assert!(f.matches(&event_with(EventCategory::Clubs, "a")));
        assert!(f.matches(&event_with(EventCategory::Hostel, "b")));
    }

    #[test]
    fn filter_only_matches_its_category() {
        let f = CategoryFilter::from_arg(Some("clubs")).unwrap();
        assert!(f.matches(&event_with(EventCategory::Clubs, "a")));
        assert!(!f.matches(&event_with(EventCategory::General, "b")));
    }

    #[test]
    fn unknown_filter_category_is_an_error() {
        assert!(CategoryFilter::from_arg(Some("sports")).is_err());
    }

    #[test]
    fn empty_title_fails_validation() {
        let draft = NewEvent {
            title: "  ".to_string(),
            description: String::new(),
            category: EventCategory::General,
            event_date: crate::utils::date::parse_event_date("2026-05-01 10:00").unwrap(),
        };
        assert!(crate::core::table::Draft::validate(&draft).is_err());
    }
}
