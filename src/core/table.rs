//! Per-table configuration for the list-create-refresh engine.
//!
//! Each surface (events, complaints, feedback) declares how its table is
//! read and written through a [`TableConfig`] instead of carrying its own
//! copy of the fetch/submit flow.

use crate::errors::AppResult;
use crate::session::Identity;

/// Read visibility of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Rows are readable by anyone, signed in or not.
    Public,
    /// Reads are filtered to rows whose owner column equals the current
    /// identity. With no identity the list stays empty.
    OwnerOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Server-side sort: one column, one direction.
#[derive(Debug, Clone, Copy)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: Direction,
}

/// Equality predicate on a single column, used for owner scoping.
#[derive(Debug, Clone)]
pub struct RowFilter {
    pub column: &'static str,
    pub value: String,
}

impl RowFilter {
    pub fn owner(column: &'static str, identity: &Identity) -> Self {
        Self {
            column,
            value: identity.user_id.clone(),
        }
    }
}

/// Static description of one table binding.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    pub table: &'static str,
    pub scope: Scope,
    pub owner_column: &'static str,
    pub order: OrderBy,
    /// Whether the list fetch is gated on an identity being present.
    /// Public tables fetch unconditionally.
    pub requires_auth: bool,
}

impl TableConfig {
    /// The read filter implied by this table's scope for the given identity.
    /// `None` means an unfiltered read; owner-only tables with no identity
    /// must not be read at all (callers skip the fetch).
    pub fn scope_filter(&self, identity: Option<&Identity>) -> Option<RowFilter> {
        match self.scope {
            Scope::Public => None,
            Scope::OwnerOnly => identity.map(|id| RowFilter::owner(self.owner_column, id)),
        }
    }
}

/// A table the LCR engine can drive.
pub trait Table {
    /// Row shape returned by reads.
    type Row: Clone;
    /// Creatable field set, as entered in the creation form.
    type Draft: Draft;

    fn config() -> TableConfig;
}

/// A creation form's field set.
pub trait Draft {
    /// Structural validation only: required fields must be non-empty.
    /// Anything deeper is the backend's business.
    fn validate(&self) -> AppResult<()>;
}
