//! Remote table gateway, SQLite edition.
//!
//! The engine talks to storage through [`TableGateway`] so the controller
//! can be exercised against a fake in tests. The contract mirrors what the
//! portal needs and nothing more: filtered select, ordered select, count,
//! insert. No update, no delete, one attempt per call.

use crate::core::table::{OrderBy, RowFilter, Table};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::complaint::{Complaint, ComplaintCategory, ComplaintsTable, NewComplaint};
use crate::models::event::{Event, EventCategory, EventsTable, NewEvent};
use crate::models::feedback::{Feedback, FeedbackTable, NewFeedback};
use crate::session::Identity;
use crate::utils::date::{EVENT_DATE_FMT, created_at_now, fmt_event_date};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Row, params};

/// Read/insert operations for one table binding.
pub trait TableGateway<T: Table> {
    fn select(
        &mut self,
        filter: Option<&RowFilter>,
        order: &OrderBy,
        limit: Option<u32>,
    ) -> AppResult<Vec<T::Row>>;

    fn count(&mut self, filter: Option<&RowFilter>) -> AppResult<u64>;

    fn insert(&mut self, draft: &T::Draft, owner: &Identity) -> AppResult<()>;
}

/// The handful of queries the dashboard composes. Independent calls, no
/// cross-query atomicity.
pub trait DashboardGateway {
    fn events_count(&mut self) -> AppResult<u64>;
    fn complaints_count(&mut self, owner: &Identity) -> AppResult<u64>;
    fn feedback_count(&mut self, owner: &Identity) -> AppResult<u64>;

    /// Events at or after `after`, ascending, at most `limit`. The one
    /// lower-bound query in the system; everything else filters by equality.
    fn upcoming_events(&mut self, after: &NaiveDateTime, limit: u32)
    -> AppResult<Vec<Event>>;
}

pub struct SqliteGateway {
    pub pool: DbPool,
}

impl SqliteGateway {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self { pool })
    }

    fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

// ---------------------------------------------------------------------------
// SQL assembly
// ---------------------------------------------------------------------------

fn select_sql(
    table: &str,
    filter: Option<&RowFilter>,
    order: &OrderBy,
    limit: Option<u32>,
) -> String {
    let mut sql = format!("SELECT * FROM {table}");
    if let Some(f) = filter {
        sql.push_str(&format!(" WHERE {} = ?1", f.column));
    }
    sql.push_str(&format!(
        " ORDER BY {} {}",
        order.column,
        order.direction.as_sql()
    ));
    if let Some(n) = limit {
        sql.push_str(&format!(" LIMIT {n}"));
    }
    sql
}

fn run_select<R>(
    conn: &Connection,
    table: &str,
    filter: Option<&RowFilter>,
    order: &OrderBy,
    limit: Option<u32>,
    map: fn(&Row) -> rusqlite::Result<R>,
) -> AppResult<Vec<R>> {
    let sql = select_sql(table, filter, order, limit);
    let mut stmt = conn.prepare(&sql)?;

    let mut out = Vec::new();
    match filter {
        Some(f) => {
            let rows = stmt.query_map([f.value.as_str()], map)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map([], map)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

fn run_count(conn: &Connection, table: &str, filter: Option<&RowFilter>) -> AppResult<u64> {
    let n: i64 = match filter {
        Some(f) => conn.query_row(
            &format!("SELECT COUNT(*) FROM {table} WHERE {} = ?1", f.column),
            [f.value.as_str()],
            |row| row.get(0),
        )?,
        None => conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?,
    };
    Ok(n as u64)
}

// ---------------------------------------------------------------------------
// Row mappers
// ---------------------------------------------------------------------------

pub fn map_event_row(row: &Row) -> rusqlite::Result<Event> {
    let date_str: String = row.get("event_date")?;
    let event_date = NaiveDateTime::parse_from_str(&date_str, EVENT_DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let cat_str: String = row.get("category")?;
    let category = EventCategory::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(cat_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category,
        event_date,
        created_by: row.get("created_by")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_complaint_row(row: &Row) -> rusqlite::Result<Complaint> {
    let cat_str: String = row.get("category")?;
    let category = ComplaintCategory::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(cat_str.clone())),
        )
    })?;

    Ok(Complaint {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category,
        // Raw string: unknown statuses must load, not fail.
        status: row.get("status")?,
        user_id: row.get("user_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_feedback_row(row: &Row) -> rusqlite::Result<Feedback> {
    Ok(Feedback {
        id: row.get("id")?,
        title: row.get("title")?,
        message: row.get("message")?,
        user_id: row.get("user_id")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------------
// Table bindings
// ---------------------------------------------------------------------------

impl TableGateway<EventsTable> for SqliteGateway {
    fn select(
        &mut self,
        filter: Option<&RowFilter>,
        order: &OrderBy,
        limit: Option<u32>,
    ) -> AppResult<Vec<Event>> {
        let table = EventsTable::config().table;
        run_select(self.conn(), table, filter, order, limit, map_event_row)
    }

    fn count(&mut self, filter: Option<&RowFilter>) -> AppResult<u64> {
        run_count(self.conn(), EventsTable::config().table, filter)
    }

    fn insert(&mut self, draft: &NewEvent, owner: &Identity) -> AppResult<()> {
        self.conn().execute(
            "INSERT INTO events (title, description, category, event_date, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.title,
                draft.description,
                draft.category.to_db_str(),
                fmt_event_date(&draft.event_date),
                owner.user_id,
                created_at_now(),
            ],
        )?;
        Ok(())
    }
}

impl TableGateway<ComplaintsTable> for SqliteGateway {
    fn select(
        &mut self,
        filter: Option<&RowFilter>,
        order: &OrderBy,
        limit: Option<u32>,
    ) -> AppResult<Vec<Complaint>> {
        let table = ComplaintsTable::config().table;
        run_select(self.conn(), table, filter, order, limit, map_complaint_row)
    }

    fn count(&mut self, filter: Option<&RowFilter>) -> AppResult<u64> {
        run_count(self.conn(), ComplaintsTable::config().table, filter)
    }

    fn insert(&mut self, draft: &NewComplaint, owner: &Identity) -> AppResult<()> {
        // `status` is intentionally absent: the schema default stamps it.
        self.conn().execute(
            "INSERT INTO complaints (title, description, category, user_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.title,
                draft.description,
                draft.category.to_db_str(),
                owner.user_id,
                created_at_now(),
            ],
        )?;
        Ok(())
    }
}

impl TableGateway<FeedbackTable> for SqliteGateway {
    fn select(
        &mut self,
        filter: Option<&RowFilter>,
        order: &OrderBy,
        limit: Option<u32>,
    ) -> AppResult<Vec<Feedback>> {
        let table = FeedbackTable::config().table;
        run_select(self.conn(), table, filter, order, limit, map_feedback_row)
    }

    fn count(&mut self, filter: Option<&RowFilter>) -> AppResult<u64> {
        run_count(self.conn(), FeedbackTable::config().table, filter)
    }

    fn insert(&mut self, draft: &NewFeedback, owner: &Identity) -> AppResult<()> {
        self.conn().execute(
            "INSERT INTO feedback (title, message, user_id, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![draft.title, draft.message, owner.user_id, created_at_now()],
        )?;
        Ok(())
    }
}

impl DashboardGateway for SqliteGateway {
    fn events_count(&mut self) -> AppResult<u64> {
        run_count(self.conn(), EventsTable::config().table, None)
    }

    fn complaints_count(&mut self, owner: &Identity) -> AppResult<u64> {
        let cfg = ComplaintsTable::config();
        let filter = RowFilter::owner(cfg.owner_column, owner);
        run_count(self.conn(), cfg.table, Some(&filter))
    }

    fn feedback_count(&mut self, owner: &Identity) -> AppResult<u64> {
        let cfg = FeedbackTable::config();
        let filter = RowFilter::owner(cfg.owner_column, owner);
        run_count(self.conn(), cfg.table, Some(&filter))
    }

    fn upcoming_events(
        &mut self,
        after: &NaiveDateTime,
        limit: u32,
    ) -> AppResult<Vec<Event>> {
        // Fixed-width date strings, so >= compares chronologically.
        let mut stmt = self.conn().prepare(
            "SELECT * FROM events
             WHERE event_date >= ?1
             ORDER BY event_date ASC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![fmt_event_date(after), limit], map_event_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
