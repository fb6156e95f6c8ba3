//! Balance reconciliation logic for the schedule core.
//!
//! This module contains the pure computations that keep every user's
//! overtime balance consistent: the per-mutation shift delta (creation,
//! deletion, same-owner edit and owner-change edit) and the leave
//! correction, including the annual-leave weekday credit.
//!
//! Nothing in this module holds state or touches the store; the lifecycle
//! managers in [`crate::schedule`] apply the computed deltas.

mod leave_correction;
mod shift_delta;

pub use leave_correction::{WEEKDAY_LEAVE_CREDIT_HOURS, is_weekend, leave_correction};
pub use shift_delta::{BalanceDelta, OvertimeSource, shift_overtime_delta};
