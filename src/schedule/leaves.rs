//! Leave lifecycle operations.
//!
//! Declaring leave removes the user's shifts for that calendar day, applies
//! the reconciler's correction to the balance and stores the correction on
//! the leave record. Cancelling leave applies the exact negation of the
//! stored correction; the removed shifts are not restored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Leave, LeaveType, NewLeave, Shift, User};
use crate::reconcile::leave_correction;

use super::Scheduler;

/// Result of declaring a leave day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDeclared {
    /// The stored leave record, carrying the computed correction.
    pub leave: Leave,
    /// The user after the balance correction.
    pub user: User,
    /// The shifts that were removed because the leave superseded them.
    pub removed_shifts: Vec<Shift>,
}

/// Result of cancelling a leave day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveCancelled {
    /// The leave record as it was stored before deletion.
    pub leave: Leave,
    /// The user after the reversal of the stored correction.
    pub user: User,
}

impl Scheduler {
    /// Declares leave for a user on a calendar day.
    ///
    /// Every shift of the user starting on that day is deleted, the balance
    /// correction is computed from the removed shifts and applied, and the
    /// leave record is stored with the correction so cancellation can
    /// reverse it exactly. The correction path runs uniformly even when no
    /// shifts exist that day (the correction is then zero).
    ///
    /// Once the first shift has been deleted, any later store failure in
    /// the same call is reported as [`ScheduleError::Inconsistent`].
    pub async fn add_leave(
        &self,
        user_id: i64,
        date: NaiveDate,
        leave_type: LeaveType,
    ) -> ScheduleResult<LeaveDeclared> {
        // Fail before mutating anything if the user is unknown.
        self.store()
            .get_user(user_id)
            .await?
            .ok_or(ScheduleError::UserNotFound { id: user_id })?;

        let shifts = self.store().list_shifts_for_user_on(user_id, date).await?;

        let mut mutated = false;
        for shift in &shifts {
            if let Err(e) = self.store().delete_shift(shift.id).await {
                warn!(user_id, shift_id = shift.id, error = %e, "shift delete failed during leave declaration");
                return Err(if mutated {
                    ScheduleError::inconsistent(
                        "add_leave",
                        format!(
                            "some shifts on {} were already deleted but deleting shift {} failed: {}",
                            date, shift.id, e
                        ),
                    )
                } else {
                    e
                });
            }
            mutated = true;
        }

        let correction = leave_correction(date, leave_type, &shifts);

        let user = match self.adjust_balance(user_id, correction).await {
            Ok(user) => user,
            Err(e) if mutated => {
                warn!(user_id, error = %e, "balance write failed after shifts were removed");
                return Err(ScheduleError::inconsistent(
                    "add_leave",
                    format!(
                        "shifts on {} were deleted but the balance write for user {} failed: {}",
                        date, user_id, e
                    ),
                ));
            }
            Err(e) => return Err(e),
        };

        let leave = match self
            .store()
            .insert_leave(NewLeave {
                user_id,
                date,
                leave_type,
                overtime_correction: correction,
            })
            .await
        {
            Ok(leave) => leave,
            Err(e) => {
                warn!(user_id, error = %e, "leave insert failed after balance write");
                return Err(ScheduleError::inconsistent(
                    "add_leave",
                    format!(
                        "balance updated for user {} but leave insert failed: {}",
                        user_id, e
                    ),
                ));
            }
        };

        info!(
            leave_id = leave.id,
            user_id,
            %date,
            correction = %correction,
            removed_shifts = shifts.len(),
            "leave declared"
        );
        Ok(LeaveDeclared {
            leave,
            user,
            removed_shifts: shifts,
        })
    }

    /// Cancels a leave day, reversing exactly the stored correction.
    ///
    /// Returns `Ok(None)` when no leave with the given id exists. The
    /// shifts removed when the leave was declared are not restored.
    pub async fn delete_leave(&self, id: i64) -> ScheduleResult<Option<LeaveCancelled>> {
        let Some(leave) = self.store().get_leave(id).await? else {
            return Ok(None);
        };

        let user = self
            .adjust_balance(leave.user_id, -leave.overtime_correction)
            .await?;

        if let Err(e) = self.store().delete_leave(id).await {
            warn!(leave_id = id, error = %e, "leave delete failed after balance write");
            return Err(ScheduleError::inconsistent(
                "delete_leave",
                format!(
                    "balance updated for user {} but leave {} delete failed: {}",
                    leave.user_id, id, e
                ),
            ));
        }

        info!(leave_id = id, user_id = user.id, "leave cancelled");
        Ok(Some(LeaveCancelled { leave, user }))
    }
}
