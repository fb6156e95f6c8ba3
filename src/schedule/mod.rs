//! Lifecycle managers for shifts, leave and user records.
//!
//! The [`Scheduler`] owns a handle to the entity store and exposes the
//! mutation operations consumed by the presentation layer. Every shift and
//! leave mutation computes its balance delta through [`crate::reconcile`]
//! and applies the balance write before the entity write; when the entity
//! write then fails, the operation surfaces
//! [`crate::error::ScheduleError::Inconsistent`] instead of masking the
//! partial completion.

mod leaves;
mod shifts;
mod users;

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Leave, Shift, User};
use crate::reconcile::BalanceDelta;
use crate::store::ScheduleStore;

pub use leaves::{LeaveCancelled, LeaveDeclared};
pub use shifts::{ShiftCreated, ShiftDeleted, ShiftUpdated};

/// A point-in-time view of the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// All users, ordered by id.
    pub users: Vec<User>,
    /// All shifts, ordered by id.
    pub shifts: Vec<Shift>,
    /// All leave records, ordered by id.
    pub leaves: Vec<Leave>,
}

/// Lifecycle manager for the roster.
///
/// Cheap to clone; all clones share the same store handle.
#[derive(Clone)]
pub struct Scheduler {
    store: Arc<dyn ScheduleStore>,
}

impl Scheduler {
    /// Creates a scheduler over the given store.
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Returns the store handle.
    pub fn store(&self) -> &Arc<dyn ScheduleStore> {
        &self.store
    }

    /// Returns the current users, shifts and leave records.
    pub async fn roster(&self) -> ScheduleResult<RosterSnapshot> {
        Ok(RosterSnapshot {
            users: self.store.list_users().await?,
            shifts: self.store.list_shifts().await?,
            leaves: self.store.list_leaves().await?,
        })
    }

    /// Adjusts one user's balance by `hours` and persists the result.
    pub(crate) async fn adjust_balance(&self, user_id: i64, hours: Decimal) -> ScheduleResult<User> {
        let mut user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;
        user.overtime_balance += hours;
        self.store.update_user(user).await
    }

    /// Applies a reconciler delta, returning the users whose balances moved.
    pub(crate) async fn apply_balance_delta(
        &self,
        delta: &BalanceDelta,
    ) -> ScheduleResult<Vec<User>> {
        match delta {
            BalanceDelta::None => Ok(Vec::new()),
            BalanceDelta::Single { user_id, hours } => {
                Ok(vec![self.adjust_balance(*user_id, *hours).await?])
            }
            BalanceDelta::Split {
                debit_user_id,
                debit_hours,
                credit_user_id,
                credit_hours,
            } => {
                let debited = self.adjust_balance(*debit_user_id, *debit_hours).await?;
                let credited = self.adjust_balance(*credit_user_id, *credit_hours).await?;
                Ok(vec![debited, credited])
            }
        }
    }
}
