//! Core data models for the schedule core.
//!
//! This module contains all the domain models used throughout the crate.

mod leave;
mod shift;
mod user;

pub use leave::{Leave, LeaveType, NewLeave};
pub use shift::{NewShift, Shift};
pub use user::{Role, User};
