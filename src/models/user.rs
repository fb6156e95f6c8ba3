//! User model and related types.
//!
//! This module defines the User struct and Role enum for representing
//! roster members and their cumulative overtime balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the access level of a roster member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrators assign shifts and declare leave.
    Admin,
    /// Employees view their own schedule.
    Employee,
}

/// Represents a roster member.
///
/// The `overtime_balance` field is the signed cumulative number of hours the
/// user is owed (positive) or owes (negative). It is never recomputed from
/// scratch on read; every shift and leave mutation adjusts it incrementally
/// so that it always equals the sum of overtime contributions from the
/// user's current shifts plus the corrections from their current leave
/// records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,
    /// The user's display name.
    pub name: String,
    /// The user's email address, used as the login identifier.
    pub email: String,
    /// The user's access level.
    pub role: Role,
    /// Reference to the user's avatar image.
    pub avatar_url: String,
    /// Signed cumulative overtime balance in hours.
    pub overtime_balance: Decimal,
}

impl User {
    /// Returns true if the user holds the administrator role.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{Role, User};
    /// use rust_decimal::Decimal;
    ///
    /// let user = User {
    ///     id: 1,
    ///     name: "Jan Kowalski".to_string(),
    ///     email: "admin@example.com".to_string(),
    ///     role: Role::Admin,
    ///     avatar_url: "https://example.com/avatars/1.png".to_string(),
    ///     overtime_balance: Decimal::ZERO,
    /// };
    /// assert!(user.is_admin());
    /// ```
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
