//! Leave model and related types.
//!
//! This module defines the Leave struct, its insert payload and the
//! LeaveType enum for representing declared leave days.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the kind of leave declared for a day.
///
/// Only [`LeaveType::Annual`] on a weekday converts a working day into a
/// credited 8-hour day; the other types merely cancel out any overtime that
/// was already scheduled on the removed shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Sick leave backed by a medical certificate.
    SickLeave,
    /// Leave taken on demand, without prior notice.
    OnDemand,
    /// Special-circumstance leave (e.g., family events).
    SpecialCircumstance,
}

/// Represents a declared leave day.
///
/// `overtime_correction` stores the exact balance delta this leave caused at
/// creation time. It is immutable thereafter; cancelling the leave applies
/// the negation of this stored value rather than recomputing it, so the
/// reversal is always exact even if the user's shifts have since changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave record.
    pub id: i64,
    /// The id of the user the leave belongs to.
    pub user_id: i64,
    /// The calendar day of the leave (no time component).
    pub date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// The exact balance delta applied when this leave was created.
    pub overtime_correction: Decimal,
}

/// Insert payload for a leave record; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLeave {
    /// The id of the user the leave belongs to.
    pub user_id: i64,
    /// The calendar day of the leave.
    pub date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// The balance delta computed at creation time.
    pub overtime_correction: Decimal,
}
