use crate::core::table::{Direction, Draft, OrderBy, Scope, Table, TableConfig};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub user_id: String,    // ⇔ feedback.user_id (owner identity, immutable)
    pub created_at: String, // ⇔ feedback.created_at (TEXT, ISO8601)
}

/// Creatable field set for feedback.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub title: String,
    pub message: String,
}

impl Draft for NewFeedback {
    fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::Validation("message".to_string()));
        }
        Ok(())
    }
}

pub struct FeedbackTable;

impl Table for FeedbackTable {
    type Row = Feedback;
    type Draft = NewFeedback;

    fn config() -> TableConfig {
        TableConfig {
            table: "feedback",
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
