//! Schema migration engine.
//!
//! Migrations are idempotent and tracked in `schema_version`, so `init` can
//! be re-run safely on an existing database.

use rusqlite::{Connection, OptionalExtension, Result};

const SCHEMA_VERSION: i64 = 1;

/// Ensure that the `schema_version` table exists.
fn ensure_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn current_version(conn: &Connection) -> Result<i64> {
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

fn record_version(conn: &Connection, version: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        rusqlite::params![version, chrono::Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// v1: the three portal tables plus the internal audit log.
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category    TEXT NOT NULL DEFAULT 'General'
                        CHECK(category IN ('General','Academics','Clubs','Hostel')),
            event_date  TEXT NOT NULL,
            created_by  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS complaints (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            category    TEXT NOT NULL DEFAULT 'Other'
                        CHECK(category IN ('Hostel','Academics','Other')),
            status      TEXT NOT NULL DEFAULT 'Pending',
            user_id     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS feedback (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL,
            message    TEXT NOT NULL,
            user_id    TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run every migration newer than the recorded schema version.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_version_table(conn)?;

    let from = current_version(conn)?;

    if from < 1 {
        migrate_v1(conn)?;
        record_version(conn, 1)?;
    }

    debug_assert!(current_version(conn)? == SCHEMA_VERSION);
    Ok(())
}
