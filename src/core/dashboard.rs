//! Dashboard aggregation.
//!
//! A read-only composition over independent queries: three counts and a
//! bounded upcoming-events list. Recomputed fully on every invocation, with
//! no cross-query atomicity — under concurrent writers the numbers may
//! reflect slightly different points in time.

use crate::db::gateway::DashboardGateway;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::session::Identity;
use chrono::NaiveDateTime;

/// How many upcoming events the dashboard shows.
pub const UPCOMING_LIMIT: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_events: u64,
    pub my_complaints: u64,
    pub my_feedback: u64,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub upcoming: Vec<Event>,
}

/// Load the dashboard for one identity as of `now`.
pub fn load<G: DashboardGateway>(
    gateway: &mut G,
    identity: &Identity,
    now: &NaiveDateTime,
) -> AppResult<Dashboard> {
    let upcoming = gateway.upcoming_events(now, UPCOMING_LIMIT)?;

    let stats = DashboardStats {
        total_events: gateway.events_count()?,
        my_complaints: gateway.complaints_count(identity)?,
        my_feedback: gateway.feedback_count(identity)?,
    };

    Ok(Dashboard { stats, upcoming })
}
