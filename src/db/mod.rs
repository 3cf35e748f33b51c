//! Database access for the chat front end.
//!
//! Owns the single shared [`ChatDatabase`] handle for the process.

mod client;
mod handle;
mod slot;

pub use client::{ChatDatabase, DatabaseClient};
pub use handle::{HandleManager, SharedHandle};
pub use slot::ProcessSlot;

use crate::config::{DatabaseConfig, RunMode};
use crate::error::AppResult;

/// Well-known slot holding the process's database handle.
pub static DATABASE_SLOT: ProcessSlot<ChatDatabase> = ProcessSlot::new("guftagu.database");

/// Resolve the process-wide database handle from configuration.
///
/// Only URL parsing can fail here; the connection itself is attempted in the
/// background.
pub fn connect(config: &DatabaseConfig, run_mode: RunMode) -> AppResult<SharedHandle<ChatDatabase>> {
    let options = config.connect_options()?;
    let manager = HandleManager::new(&DATABASE_SLOT, run_mode);
    Ok(manager.initialize(|| ChatDatabase::new(options, config)))
}
