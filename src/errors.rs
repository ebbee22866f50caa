//! Unified application error type.
//! All modules (db, core, cli, session) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Gateway / backend
    // ---------------------------
    #[error("Backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Auth / validation
    // ---------------------------
    #[error("You must be signed in to do this. Run `campushub login <user-id>` first.")]
    AuthRequired,

    #[error("Missing required field: {0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDate(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
