//! Generic list-create-refresh controller.
//!
//! One engine drives all three surfaces: fetch a scoped, ordered list,
//! mediate creation, refetch after a successful insert. The per-table
//! differences live entirely in [`Table`] configurations.

use crate::core::table::{Scope, Table};
use crate::db::gateway::TableGateway;
use crate::errors::{AppError, AppResult};
use crate::session::Identity;

/// Lifecycle of a controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Created, nothing fetched yet.
    Idle,
    /// A fetch has been issued and not yet completed.
    Loading,
    /// At least one fetch completed (successfully or not).
    Ready,
}

pub struct Controller<T: Table> {
    records: Vec<T::Row>,
    state: ControllerState,
    /// Generation of the most recently issued fetch. Completions carrying
    /// an older generation are stale and get dropped.
    issued: u64,
}

impl<T: Table> Default for Controller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Table> Controller<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: ControllerState::Idle,
            issued: 0,
        }
    }

    pub fn records(&self) -> &[T::Row] {
        &self.records
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Issue a scoped, ordered read and apply its result.
    ///
    /// Owner-scoped tables with no identity skip the read entirely and the
    /// list remains empty. On error the previous list is preserved (a failed
    /// refresh shows stale data by design) and the error is returned for the
    /// caller to surface as a notification.
    pub fn fetch<G: TableGateway<T>>(
        &mut self,
        gateway: &mut G,
        identity: Option<&Identity>,
    ) -> AppResult<()> {
        let cfg = T::config();

        let gated = cfg.requires_auth || cfg.scope == Scope::OwnerOnly;
        if gated && identity.is_none() {
            self.state = ControllerState::Ready;
            return Ok(());
        }

        let generation = self.begin_fetch();
        let result = gateway.select(cfg.scope_filter(identity).as_ref(), &cfg.order, None);
        self.complete_fetch(generation, result)
    }

    /// Start a fetch and hand out its generation token. Split from
    /// [`complete_fetch`] so overlapping fetches can be resolved
    /// deterministically: only the latest issued generation may land.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.state = ControllerState::Loading;
        self.issued
    }

    /// Apply the result of a previously issued fetch.
    ///
    /// A completion for anything but the latest generation is stale and is
    /// discarded without touching the list. The loading state ends no matter
    /// how the fetch went.
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: AppResult<Vec<T::Row>>,
    ) -> AppResult<()> {
        if generation != self.issued {
            // A newer fetch is in flight or already landed.
            return Ok(());
        }

        self.state = ControllerState::Ready;
        match result {
            Ok(rows) => {
                self.records = rows;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Validate and insert a new record, then refetch.
    ///
    /// With no identity this rejects before any gateway call. The insert
    /// carries all draft fields plus the owner identity; the new record's
    /// position in the refreshed list is whatever the server-side order says.
    pub fn submit<G: TableGateway<T>>(
        &mut self,
        gateway: &mut G,
        identity: Option<&Identity>,
        draft: &T::Draft,
    ) -> AppResult<()> {
        use crate::core::table::Draft as _;

        let identity = identity.ok_or(AppError::AuthRequired)?;
        draft.validate()?;

        gateway.insert(draft, identity)?;
        self.fetch(gateway, Some(identity))
    }

    /// Pure client-side view over the fetched list. Does not touch the
    /// gateway; preserves fetch order.
    pub fn filtered<P>(&self, predicate: P) -> Vec<&T::Row>
    where
        P: Fn(&T::Row) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }
}
