//! Application state for the schedule core API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::schedule::Scheduler;

/// Shared application state.
///
/// Contains the scheduler shared across all request handlers; the scheduler
/// itself is a cheap clone over one store handle.
#[derive(Clone)]
pub struct AppState {
    scheduler: Scheduler,
}

impl AppState {
    /// Creates a new application state with the given scheduler.
    pub fn new(scheduler: Scheduler) -> Self {
        Self { scheduler }
    }

    /// Returns a reference to the scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
