//! Seed record types for the roster configuration file.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveType, Role};

/// A seeded user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// The user's id; seed ids are explicit so shifts can reference them.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email, unique across the roster.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar_url: String,
    /// Starting overtime balance in hours.
    #[serde(default)]
    pub overtime_balance: Decimal,
}

/// A seeded shift record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedShift {
    /// The shift's id.
    pub id: i64,
    /// The owning user's id; must reference a seeded user.
    pub user_id: i64,
    /// Shift start.
    pub start_time: NaiveDateTime,
    /// Shift end.
    pub end_time: NaiveDateTime,
    /// Position label.
    pub position: String,
    /// Overtime hours attributed to the shift.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// A seeded leave record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedLeave {
    /// The leave record's id.
    pub id: i64,
    /// The owning user's id; must reference a seeded user.
    pub user_id: i64,
    /// The leave calendar day.
    pub date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// The correction the leave applied when it was created.
    #[serde(default)]
    pub overtime_correction: Decimal,
}
