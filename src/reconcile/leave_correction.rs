//! Leave correction computation.
//!
//! This module computes the overtime-balance correction a leave day causes,
//! given the shifts that were scheduled on that day and are removed by the
//! leave declaration.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{LeaveType, Shift};

/// The number of hours an annual-leave weekday is paid as.
///
/// An annual-leave day replaces the scheduled shifts with one credited
/// 8-hour normal day; normal hours logged beyond this become owed overtime.
pub const WEEKDAY_LEAVE_CREDIT_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Computes the balance correction caused by declaring leave on `date`.
///
/// `shifts_on_date` are the shifts that were scheduled for the user on that
/// calendar day; declaring the leave removes them, so their overtime
/// attribution must be stripped from the balance. The computed value is
/// stored on the leave record unchanged, so that cancelling the leave can
/// apply the exact negation.
///
/// # Rules
///
/// With `total_duration` the summed raw duration of the removed shifts,
/// `total_overtime` their summed overtime attribution, and
/// `normal_hours = total_duration - total_overtime`:
///
/// - [`LeaveType::Annual`] on a weekday with at least one removed shift:
///   `(normal_hours - 8) - total_overtime`. The day is paid as an 8-hour
///   normal day; normal hours actually logged beyond 8 convert into owed
///   overtime credit, and overtime already logged on the removed shifts is
///   subtracted back out since the day is no longer worked.
/// - Every other case (other leave types, weekends, or no shifts that day):
///   `-total_overtime`, which is zero when no shifts exist.
///
/// The asymmetry is intentional: only annual leave on a weekday converts a
/// working day into a credited 8-hour day.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use roster_engine::models::{LeaveType, Shift};
/// use roster_engine::reconcile::leave_correction;
/// use rust_decimal::Decimal;
///
/// // A weekday 10-hour shift carrying 2 overtime hours
/// let shift = Shift {
///     id: 1,
///     user_id: 2,
///     start_time: NaiveDateTime::parse_from_str("2026-01-13 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-13 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     position: "Cashier".to_string(),
///     overtime_hours: Decimal::new(2, 0),
/// };
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(); // Tuesday
/// let correction = leave_correction(date, LeaveType::Annual, &[shift]);
///
/// // normal_hours = 10 - 2 = 8; (8 - 8) - 2 = -2
/// assert_eq!(correction, Decimal::new(-2, 0));
/// ```
pub fn leave_correction(date: NaiveDate, leave_type: LeaveType, shifts_on_date: &[Shift]) -> Decimal {
    let total_duration: Decimal = shifts_on_date.iter().map(Shift::duration_hours).sum();
    let total_overtime: Decimal = shifts_on_date.iter().map(|s| s.overtime_hours).sum();

    let correction = if leave_type == LeaveType::Annual
        && !is_weekend(date)
        && !shifts_on_date.is_empty()
    {
        let normal_hours = total_duration - total_overtime;
        (normal_hours - WEEKDAY_LEAVE_CREDIT_HOURS) - total_overtime
    } else {
        -total_overtime
    };

    // Negating a zero Decimal keeps the sign bit and would serialize as
    // "-0"; a zero correction is stored as plain zero.
    if correction.is_zero() {
        Decimal::ZERO
    } else {
        correction
    }
}
