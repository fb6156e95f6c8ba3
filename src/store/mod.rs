//! Entity store contract and implementations.
//!
//! The schedule core treats persistence as an external record store exposing
//! create/read/update/delete per entity. Lifecycle managers depend only on
//! the [`ScheduleStore`] trait; [`InMemoryStore`] is the bundled
//! implementation for development and testing.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ScheduleResult;
use crate::models::{Leave, NewLeave, NewShift, Shift, User};

pub use memory::InMemoryStore;

/// Record store contract consumed by the lifecycle managers.
///
/// Lookups return `Ok(None)` when the id is absent; updates and deletes
/// return the matching not-found error instead, since the caller named a
/// record it expected to exist. Inserts assign the id.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Finds a user by id.
    async fn get_user(&self, id: i64) -> ScheduleResult<Option<User>>;
    /// Lists all users, ordered by id.
    async fn list_users(&self) -> ScheduleResult<Vec<User>>;
    /// Replaces a user record.
    async fn update_user(&self, user: User) -> ScheduleResult<User>;

    /// Finds a shift by id.
    async fn get_shift(&self, id: i64) -> ScheduleResult<Option<Shift>>;
    /// Lists all shifts, ordered by id.
    async fn list_shifts(&self) -> ScheduleResult<Vec<Shift>>;
    /// Lists the shifts owned by `user_id` whose start falls on `date`.
    async fn list_shifts_for_user_on(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<Shift>>;
    /// Inserts a new shift, assigning its id.
    async fn insert_shift(&self, shift: NewShift) -> ScheduleResult<Shift>;
    /// Replaces a shift record.
    async fn update_shift(&self, shift: Shift) -> ScheduleResult<Shift>;
    /// Deletes a shift by id.
    async fn delete_shift(&self, id: i64) -> ScheduleResult<()>;

    /// Finds a leave record by id.
    async fn get_leave(&self, id: i64) -> ScheduleResult<Option<Leave>>;
    /// Lists all leave records, ordered by id.
    async fn list_leaves(&self) -> ScheduleResult<Vec<Leave>>;
    /// Inserts a new leave record, assigning its id.
    async fn insert_leave(&self, leave: NewLeave) -> ScheduleResult<Leave>;
    /// Deletes a leave record by id.
    async fn delete_leave(&self, id: i64) -> ScheduleResult<()>;
}
