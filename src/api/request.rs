//! Request types for the schedule core API.
//!
//! This module defines the JSON request structures for the mutation
//! endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveType, NewShift, Role, Shift};

/// Request body for `POST /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The id of the user the shift is assigned to.
    pub user_id: i64,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Free-text position label.
    pub position: String,
    /// Signed overtime hours attributed to the shift.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Request body for `PUT /shifts/{id}`; the id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateShiftRequest {
    /// The id of the user owning the shift (may differ from the stored
    /// owner to move the shift).
    pub user_id: i64,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Free-text position label.
    pub position: String,
    /// Signed overtime hours attributed to the shift.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Request body for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    /// The id of the user taking leave.
    pub user_id: i64,
    /// The calendar day of the leave.
    pub date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// The new display name.
    pub name: String,
    /// The new login email.
    pub email: String,
}

/// Request body for `PUT /users/{id}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// The new role.
    pub role: Role,
}

impl From<CreateShiftRequest> for NewShift {
    fn from(req: CreateShiftRequest) -> Self {
        NewShift {
            user_id: req.user_id,
            start_time: req.start_time,
            end_time: req.end_time,
            position: req.position,
            overtime_hours: req.overtime_hours,
        }
    }
}

impl UpdateShiftRequest {
    /// Combines the request body with the path id into a full shift.
    pub fn into_shift(self, id: i64) -> Shift {
        Shift {
            id,
            user_id: self.user_id,
            start_time: self.start_time,
            end_time: self.end_time,
            position: self.position,
            overtime_hours: self.overtime_hours,
        }
    }
}
