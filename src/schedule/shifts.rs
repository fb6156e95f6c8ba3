//! Shift lifecycle operations.
//!
//! Creating, editing and deleting shifts all funnel their balance effect
//! through [`shift_overtime_delta`]; the owning user's balance is written
//! first and the shift record second, so a failed entity write is reported
//! as an inconsistent state rather than silently dropped.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{NewShift, Shift, User};
use crate::reconcile::{BalanceDelta, shift_overtime_delta};

use super::Scheduler;

/// Result of adding a shift: the stored shift and the owner with their
/// adjusted balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreated {
    /// The newly stored shift.
    pub shift: Shift,
    /// The owning user after the balance adjustment.
    pub user: User,
}

/// Result of updating a shift.
///
/// `users` holds the records whose balances were touched. When the edit
/// moved the shift to a different owner, the full user list is re-read from
/// the store after the two balance writes and returned instead, so a caller
/// holding a user cache can replace it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftUpdated {
    /// The stored shift after the update.
    pub shift: Shift,
    /// The affected users (all users after an owner change).
    pub users: Vec<User>,
}

/// Result of deleting a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDeleted {
    /// The shift as it was stored before deletion.
    pub shift: Shift,
    /// The owning user after the balance adjustment.
    pub user: User,
}

fn validate_times(shift_end_after_start: bool) -> ScheduleResult<()> {
    if shift_end_after_start {
        Ok(())
    } else {
        Err(ScheduleError::validation(
            "end_time",
            "must be strictly after start_time",
        ))
    }
}

impl Scheduler {
    /// Adds a shift and credits its overtime hours to the owner's balance.
    ///
    /// Validation runs before any store call. The balance write is issued
    /// first; if the subsequent shift insert fails, the operation returns
    /// [`ScheduleError::Inconsistent`].
    pub async fn add_shift(&self, data: NewShift) -> ScheduleResult<ShiftCreated> {
        validate_times(data.end_time > data.start_time)?;

        let delta = shift_overtime_delta(None, Some((&data).into()));
        let user = self
            .apply_balance_delta(&delta)
            .await?
            .pop()
            .ok_or_else(|| {
                ScheduleError::store("add_shift", "creation delta produced no balance write")
            })?;

        let shift = match self.store().insert_shift(data).await {
            Ok(shift) => shift,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "shift insert failed after balance write");
                return Err(ScheduleError::inconsistent(
                    "add_shift",
                    format!(
                        "balance updated for user {} but shift insert failed: {}",
                        user.id, e
                    ),
                ));
            }
        };

        info!(
            shift_id = shift.id,
            user_id = user.id,
            overtime_hours = %shift.overtime_hours,
            "shift added"
        );
        Ok(ShiftCreated { shift, user })
    }

    /// Updates a shift, reconciling the balance of the affected user(s).
    ///
    /// When the owner is unchanged, the single difference delta is applied.
    /// When the owner changed, the old owner is debited and the new owner
    /// credited, and all user records are refreshed from the store after the
    /// two writes.
    pub async fn update_shift(&self, updated: Shift) -> ScheduleResult<ShiftUpdated> {
        validate_times(updated.end_time > updated.start_time)?;

        let old = self
            .store()
            .get_shift(updated.id)
            .await?
            .ok_or(ScheduleError::ShiftNotFound { id: updated.id })?;

        // An owner change debits and credits two users independently; make
        // sure the new owner exists before the first write happens.
        if updated.user_id != old.user_id
            && self.store().get_user(updated.user_id).await?.is_none()
        {
            return Err(ScheduleError::UserNotFound {
                id: updated.user_id,
            });
        }

        let delta = shift_overtime_delta(Some((&old).into()), Some((&updated).into()));
        let users = self.apply_balance_delta(&delta).await?;

        let shift = match self.store().update_shift(updated).await {
            Ok(shift) => shift,
            Err(e) => {
                warn!(shift_id = old.id, error = %e, "shift update failed after balance write");
                return Err(ScheduleError::inconsistent(
                    "update_shift",
                    format!(
                        "balance updated but shift {} update failed: {}",
                        old.id, e
                    ),
                ));
            }
        };

        let owner_changed = matches!(delta, BalanceDelta::Split { .. });
        let users = if owner_changed {
            // Two independent balance writes happened; hand back the full
            // refreshed user set as the consistency safety net.
            self.store().list_users().await?
        } else {
            users
        };

        info!(
            shift_id = shift.id,
            user_id = shift.user_id,
            owner_changed,
            "shift updated"
        );
        Ok(ShiftUpdated { shift, users })
    }

    /// Deletes a shift, debiting its overtime hours from the owner.
    ///
    /// Returns `Ok(None)` when no shift with the given id exists.
    pub async fn delete_shift(&self, id: i64) -> ScheduleResult<Option<ShiftDeleted>> {
        let Some(shift) = self.store().get_shift(id).await? else {
            return Ok(None);
        };

        let delta = shift_overtime_delta(Some((&shift).into()), None);
        let user = self
            .apply_balance_delta(&delta)
            .await?
            .pop()
            .ok_or_else(|| {
                ScheduleError::store("delete_shift", "deletion delta produced no balance write")
            })?;

        if let Err(e) = self.store().delete_shift(id).await {
            warn!(shift_id = id, error = %e, "shift delete failed after balance write");
            return Err(ScheduleError::inconsistent(
                "delete_shift",
                format!(
                    "balance updated for user {} but shift {} delete failed: {}",
                    user.id, id, e
                ),
            ));
        }

        info!(shift_id = id, user_id = user.id, "shift deleted");
        Ok(Some(ShiftDeleted { shift, user }))
    }
}
