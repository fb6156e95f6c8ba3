//! Shift model and related types.
//!
//! This module defines the Shift struct and its insert payload for
//! representing scheduled work in the roster.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a scheduled work shift.
///
/// `overtime_hours` is supplied by the caller when the shift is assigned and
/// is tracked independently of the raw `end_time - start_time` duration. It
/// is the shift's contribution to the owning user's overtime balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: i64,
    /// The id of the user who owns this shift.
    pub user_id: i64,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift (strictly after the start time).
    pub end_time: NaiveDateTime,
    /// Free-text position label (e.g., "Cashier").
    pub position: String,
    /// Signed overtime hours attributed to this shift.
    pub overtime_hours: Decimal,
}

/// Insert payload for a shift; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShift {
    /// The id of the user who will own the shift.
    pub user_id: i64,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Free-text position label.
    pub position: String,
    /// Signed overtime hours attributed to the shift.
    pub overtime_hours: Decimal,
}

impl Shift {
    /// Returns the total duration of the shift in hours.
    ///
    /// Duration is raw `end_time - start_time`; it does not depend on
    /// `overtime_hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     user_id: 2,
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-13 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-13 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     position: "Cashier".to_string(),
    ///     overtime_hours: Decimal::ZERO,
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let total_minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(total_minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns true if the shift starts on the given calendar day.
    ///
    /// Leave declaration matches shifts by calendar day, not by timestamp
    /// equality.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_time.date() == date
    }
}
