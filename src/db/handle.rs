//! Shared database handle lifecycle.
//!
//! [`HandleManager::initialize`] resolves the one client instance for the
//! process, binds it into a [`ProcessSlot`] outside production, and kicks off
//! a best-effort background connection. Connection failures are logged and
//! otherwise ignored; callers that need to know whether the database is
//! reachable use [`DatabaseClient::ping`].

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::RunMode;
use crate::db::client::DatabaseClient;
use crate::db::slot::ProcessSlot;

/// Result of the background connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarmupOutcome {
    Connected,
    Failed(String),
}

/// A ready-to-use client plus the warm-up task started for it.
///
/// The connection may not be open yet when this is returned.
pub struct SharedHandle<C> {
    client: Arc<C>,
    warmup: Option<JoinHandle<WarmupOutcome>>,
}

impl<C> SharedHandle<C> {
    /// Split into the client and its warm-up task. The task is absent when
    /// no async runtime was available.
    pub fn into_parts(self) -> (Arc<C>, Option<JoinHandle<WarmupOutcome>>) {
        (self.client, self.warmup)
    }
}

/// Hands out the process-wide database client.
pub struct HandleManager<'a, C> {
    slot: &'a ProcessSlot<C>,
    run_mode: RunMode,
}

impl<'a, C: DatabaseClient> HandleManager<'a, C> {
    pub fn new(slot: &'a ProcessSlot<C>, run_mode: RunMode) -> Self {
        Self { slot, run_mode }
    }

    /// Resolve the shared client and start a background connection attempt.
    ///
    /// Repeated calls outside production return the same instance. In
    /// production the slot is left untouched and every call constructs.
    pub fn initialize<F>(&self, construct: F) -> SharedHandle<C>
    where
        F: FnOnce() -> C,
    {
        let persist = !self.run_mode.is_production();
        let (client, constructed) = self.slot.get_or_construct(construct, persist);

        tracing::debug!(
            slot = self.slot.name(),
            run_mode = %self.run_mode,
            constructed,
            bound = self.slot.is_bound(),
            "Database handle resolved"
        );

        let warmup = spawn_warmup(Arc::clone(&client));
        SharedHandle { client, warmup }
    }
}

fn spawn_warmup<C: DatabaseClient>(client: Arc<C>) -> Option<JoinHandle<WarmupOutcome>> {
    let Ok(runtime) = Handle::try_current() else {
        tracing::warn!("No async runtime available, skipping database warm-up");
        return None;
    };

    Some(runtime.spawn(async move {
        match client.connect().await {
            Ok(()) => {
                tracing::info!("Database connected");
                WarmupOutcome::Connected
            }
            Err(e) => {
                tracing::error!(error = %e, "Database connection failed");
                WarmupOutcome::Failed(e.to_string())
            }
        }
    }))
}
