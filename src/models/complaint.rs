use crate::core::table::{Direction, Draft, OrderBy, Scope, Table, TableConfig};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplaintCategory {
    Hostel,
    Academics,
    Other,
}

impl ComplaintCategory {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ComplaintCategory::Hostel => "Hostel",
            ComplaintCategory::Academics => "Academics",
            ComplaintCategory::Other => "Other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Hostel" => Some(ComplaintCategory::Hostel),
            "Academics" => Some(ComplaintCategory::Academics),
            "Other" => Some(ComplaintCategory::Other),
            _ => None,
        }
    }

    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hostel" => Some(ComplaintCategory::Hostel),
            "academics" => Some(ComplaintCategory::Academics),
            "other" => Some(ComplaintCategory::Other),
            _ => None,
        }
    }
}

impl Default for ComplaintCategory {
    fn default() -> Self {
        ComplaintCategory::Other
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Complaint {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    /// Raw status string. Kept untyped on purpose: it is mutated outside
    /// this client and may hold values we cannot enumerate.
    pub status: String,
    pub user_id: String,    // ⇔ complaints.user_id (owner identity, immutable)
    pub created_at: String, // ⇔ complaints.created_at (TEXT, ISO8601)
}

/// Creatable field set for a complaint. Status is deliberately absent.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
}

impl Draft for NewComplaint {
    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description".to_string()));
        }
        Ok(())
    }
}

pub struct ComplaintsTable;

impl Table for ComplaintsTable {
    type Row = Complaint;
    type Draft = NewComplaint;

    fn config() -> TableConfig {
        TableConfig {
            table: "complaints",
            scope: Scope::OwnerOnly,
            owner_column: "user_id",
            order: OrderBy {
                column: "created_at",
                direction: Direction::Desc,
            },
            requires_auth: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Draft as _;

    #[test]
    fn category_round_trips_through_db_strings() {
        for c in [
            ComplaintCategory::Hostel,
            ComplaintCategory::Academics,
            ComplaintCategory::Other,
        ] {
            assert_eq!(ComplaintCategory::from_db_str(c.to_db_str()), Some(c));
        }
    }

    #[test]
    fn title_and_description_are_required() {
        let missing_title = NewComplaint {
            title: String::new(),
            description: "The tap drips".to_string(),
            category: ComplaintCategory::Hostel,
        };
        assert!(matches!(
            missing_title.validate(),
            Err(AppError::Validation(f)) if f == "title"
        ));

        let missing_description = NewComplaint {
            title: "Leaky faucet".to_string(),
            description: "  ".to_string(),
            category: ComplaintCategory::Hostel,
        };
        assert!(matches!(
            missing_description.validate(),
            Err(AppError::Validation(f)) if f == "description"
        ));
    }
}
