//! Shift mutation delta computation.
//!
//! This module provides the function that turns a shift mutation (create,
//! edit, delete) into the overtime-balance adjustments it requires.

use rust_decimal::Decimal;

use crate::models::{NewShift, Shift};

/// The balance-relevant facts of one side of a shift mutation.
///
/// Only the owning user and the attributed overtime hours matter for
/// reconciliation; timing and position changes never move the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeSource {
    /// The id of the user owning the shift.
    pub user_id: i64,
    /// The overtime hours attributed to the shift.
    pub overtime_hours: Decimal,
}

impl From<&Shift> for OvertimeSource {
    fn from(shift: &Shift) -> Self {
        Self {
            user_id: shift.user_id,
            overtime_hours: shift.overtime_hours,
        }
    }
}

impl From<&NewShift> for OvertimeSource {
    fn from(shift: &NewShift) -> Self {
        Self {
            user_id: shift.user_id,
            overtime_hours: shift.overtime_hours,
        }
    }
}

/// The balance adjustments required by a shift mutation.
///
/// Every mutation affects one user, except an edit that moves the shift to a
/// different owner, which debits the old owner and credits the new one. That
/// is the only case with two affected users, and callers must apply both
/// updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceDelta {
    /// No balance adjustment is required.
    None,
    /// A single user's balance changes by `hours`.
    Single {
        /// The affected user.
        user_id: i64,
        /// The signed adjustment in hours.
        hours: Decimal,
    },
    /// The shift changed owner: the old owner is debited the shift's
    /// previous overtime hours and the new owner is credited its new ones.
    Split {
        /// The previous owner.
        debit_user_id: i64,
        /// The adjustment applied to the previous owner (always negated).
        debit_hours: Decimal,
        /// The new owner.
        credit_user_id: i64,
        /// The adjustment applied to the new owner.
        credit_hours: Decimal,
    },
}

impl BalanceDelta {
    /// Returns the net system-wide balance change of this delta.
    ///
    /// For an owner change this is the credit plus the debit; moving a
    /// shift between users must never change the total overtime owed.
    pub fn net_hours(&self) -> Decimal {
        match self {
            BalanceDelta::None => Decimal::ZERO,
            BalanceDelta::Single { hours, .. } => *hours,
            BalanceDelta::Split {
                debit_hours,
                credit_hours,
                ..
            } => *debit_hours + *credit_hours,
        }
    }
}

/// Computes the balance adjustments for a shift mutation.
///
/// # Arguments
///
/// * `old` - The shift as stored before the mutation (`None` for creation)
/// * `new` - The shift as it will be stored after the mutation (`None` for
///   deletion)
///
/// # Cases
///
/// - Creation: the new owner's balance gains the shift's overtime hours.
/// - Deletion: the old owner's balance loses the shift's overtime hours.
/// - Edit, same owner: the owner's balance moves by the difference.
/// - Edit, owner changed: the old owner loses the old hours, the new owner
///   gains the new hours.
///
/// # Examples
///
/// ```
/// use roster_engine::reconcile::{BalanceDelta, OvertimeSource, shift_overtime_delta};
/// use rust_decimal::Decimal;
///
/// let before = OvertimeSource { user_id: 2, overtime_hours: Decimal::new(3, 0) };
/// let after = OvertimeSource { user_id: 2, overtime_hours: Decimal::new(1, 0) };
///
/// let delta = shift_overtime_delta(Some(before), Some(after));
/// assert_eq!(
///     delta,
///     BalanceDelta::Single { user_id: 2, hours: Decimal::new(-2, 0) }
/// );
/// ```
pub fn shift_overtime_delta(
    old: Option<OvertimeSource>,
    new: Option<OvertimeSource>,
) -> BalanceDelta {
    match (old, new) {
        (None, None) => BalanceDelta::None,
        (None, Some(created)) => BalanceDelta::Single {
            user_id: created.user_id,
            hours: created.overtime_hours,
        },
        (Some(deleted), None) => BalanceDelta::Single {
            user_id: deleted.user_id,
            hours: -deleted.overtime_hours,
        },
        (Some(before), Some(after)) if before.user_id == after.user_id => BalanceDelta::Single {
            user_id: after.user_id,
            hours: after.overtime_hours - before.overtime_hours,
        },
        (Some(before), Some(after)) => BalanceDelta::Split {
            debit_user_id: before.user_id,
            debit_hours: -before.overtime_hours,
            credit_user_id: after.user_id,
            credit_hours: after.overtime_hours,
        },
    }
}
