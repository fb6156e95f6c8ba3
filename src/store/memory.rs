//! In-memory store implementation for development and testing.
//!
//! Records keep their date and timestamp fields as strings, the way the
//! external store persists them: full timestamps for shifts, calendar-day
//! strings for leave. The conversions at this boundary are the store's
//! responsibility; leave dates are parsed as plain calendar dates so no
//! timezone offset can ever shift the day.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use dashmap::DashMap;
use rust_decimal::Decimal;

use super::ScheduleStore;
use crate::config::RosterConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Leave, LeaveType, NewLeave, NewShift, Shift, User};

/// Wire format for shift timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Wire format for leave calendar days.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A shift as the store persists it, with string timestamps.
#[derive(Debug, Clone)]
struct ShiftRecord {
    id: i64,
    user_id: i64,
    start_time: String,
    end_time: String,
    position: String,
    overtime_hours: Decimal,
}

/// A leave record as the store persists it, with a calendar-day string.
#[derive(Debug, Clone)]
struct LeaveRecord {
    id: i64,
    user_id: i64,
    date: String,
    leave_type: LeaveType,
    overtime_correction: Decimal,
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(operation: &str, value: &str) -> ScheduleResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        ScheduleError::store(operation, format!("invalid timestamp '{}': {}", value, e))
    })
}

fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

fn parse_date(operation: &str, value: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        ScheduleError::store(operation, format!("invalid date '{}': {}", value, e))
    })
}

impl ShiftRecord {
    fn from_shift(shift: &Shift) -> Self {
        Self {
            id: shift.id,
            user_id: shift.user_id,
            start_time: format_timestamp(shift.start_time),
            end_time: format_timestamp(shift.end_time),
            position: shift.position.clone(),
            overtime_hours: shift.overtime_hours,
        }
    }

    fn from_new(id: i64, shift: &NewShift) -> Self {
        Self {
            id,
            user_id: shift.user_id,
            start_time: format_timestamp(shift.start_time),
            end_time: format_timestamp(shift.end_time),
            position: shift.position.clone(),
            overtime_hours: shift.overtime_hours,
        }
    }

    fn to_shift(&self, operation: &str) -> ScheduleResult<Shift> {
        Ok(Shift {
            id: self.id,
            user_id: self.user_id,
            start_time: parse_timestamp(operation, &self.start_time)?,
            end_time: parse_timestamp(operation, &self.end_time)?,
            position: self.position.clone(),
            overtime_hours: self.overtime_hours,
        })
    }
}

impl LeaveRecord {
    fn from_new(id: i64, leave: &NewLeave) -> Self {
        Self {
            id,
            user_id: leave.user_id,
            date: format_date(leave.date),
            leave_type: leave.leave_type,
            overtime_correction: leave.overtime_correction,
        }
    }

    fn to_leave(&self, operation: &str) -> ScheduleResult<Leave> {
        Ok(Leave {
            id: self.id,
            user_id: self.user_id,
            date: parse_date(operation, &self.date)?,
            leave_type: self.leave_type,
            overtime_correction: self.overtime_correction,
        })
    }
}

/// In-memory record store.
///
/// Ids are assigned from per-entity counters; each map entry is internally
/// consistent, but no cross-entity transaction exists, matching the
/// external-store contract the lifecycle managers are written against.
pub struct InMemoryStore {
    users: DashMap<i64, User>,
    shifts: DashMap<i64, ShiftRecord>,
    leaves: DashMap<i64, LeaveRecord>,
    shift_counter: AtomicI64,
    leave_counter: AtomicI64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            shifts: DashMap::new(),
            leaves: DashMap::new(),
            shift_counter: AtomicI64::new(1),
            leave_counter: AtomicI64::new(1),
        }
    }

    /// Creates a store seeded from a roster configuration.
    ///
    /// Id counters continue past the highest seeded id.
    pub fn from_config(config: &RosterConfig) -> Self {
        let store = Self::new();

        for user in &config.users {
            store.users.insert(
                user.id,
                User {
                    id: user.id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    role: user.role,
                    avatar_url: user.avatar_url.clone(),
                    overtime_balance: user.overtime_balance,
                },
            );
        }

        let mut max_shift_id = 0;
        for shift in &config.shifts {
            max_shift_id = max_shift_id.max(shift.id);
            store.shifts.insert(
                shift.id,
                ShiftRecord {
                    id: shift.id,
                    user_id: shift.user_id,
                    start_time: format_timestamp(shift.start_time),
                    end_time: format_timestamp(shift.end_time),
                    position: shift.position.clone(),
                    overtime_hours: shift.overtime_hours,
                },
            );
        }
        store.shift_counter.store(max_shift_id + 1, Ordering::SeqCst);

        let mut max_leave_id = 0;
        for leave in &config.leaves {
            max_leave_id = max_leave_id.max(leave.id);
            store.leaves.insert(
                leave.id,
                LeaveRecord {
                    id: leave.id,
                    user_id: leave.user_id,
                    date: format_date(leave.date),
                    leave_type: leave.leave_type,
                    overtime_correction: leave.overtime_correction,
                },
            );
        }
        store.leave_counter.store(max_leave_id + 1, Ordering::SeqCst);

        store
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn get_user(&self, id: i64) -> ScheduleResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn list_users(&self) -> ScheduleResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update_user(&self, user: User) -> ScheduleResult<User> {
        if !self.users.contains_key(&user.id) {
            return Err(ScheduleError::UserNotFound { id: user.id });
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_shift(&self, id: i64) -> ScheduleResult<Option<Shift>> {
        match self.shifts.get(&id) {
            Some(record) => Ok(Some(record.to_shift("get_shift")?)),
            None => Ok(None),
        }
    }

    async fn list_shifts(&self) -> ScheduleResult<Vec<Shift>> {
        let mut shifts = self
            .shifts
            .iter()
            .map(|e| e.value().to_shift("list_shifts"))
            .collect::<ScheduleResult<Vec<Shift>>>()?;
        shifts.sort_by_key(|s| s.id);
        Ok(shifts)
    }

    async fn list_shifts_for_user_on(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> ScheduleResult<Vec<Shift>> {
        let mut shifts = Vec::new();
        for entry in self.shifts.iter() {
            if entry.value().user_id != user_id {
                continue;
            }
            let shift = entry.value().to_shift("list_shifts_for_user_on")?;
            if shift.starts_on(date) {
                shifts.push(shift);
            }
        }
        shifts.sort_by_key(|s| s.id);
        Ok(shifts)
    }

    async fn insert_shift(&self, shift: NewShift) -> ScheduleResult<Shift> {
        let id = self.shift_counter.fetch_add(1, Ordering::SeqCst);
        let record = ShiftRecord::from_new(id, &shift);
        let created = record.to_shift("insert_shift")?;
        self.shifts.insert(id, record);
        Ok(created)
    }

    async fn update_shift(&self, shift: Shift) -> ScheduleResult<Shift> {
        if !self.shifts.contains_key(&shift.id) {
            return Err(ScheduleError::ShiftNotFound { id: shift.id });
        }
        self.shifts.insert(shift.id, ShiftRecord::from_shift(&shift));
        Ok(shift)
    }

    async fn delete_shift(&self, id: i64) -> ScheduleResult<()> {
        self.shifts
            .remove(&id)
            .ok_or(ScheduleError::ShiftNotFound { id })?;
        Ok(())
    }

    async fn get_leave(&self, id: i64) -> ScheduleResult<Option<Leave>> {
        match self.leaves.get(&id) {
            Some(record) => Ok(Some(record.to_leave("get_leave")?)),
            None => Ok(None),
        }
    }

    async fn list_leaves(&self) -> ScheduleResult<Vec<Leave>> {
        let mut leaves = self
            .leaves
            .iter()
            .map(|e| e.value().to_leave("list_leaves"))
            .collect::<ScheduleResult<Vec<Leave>>>()?;
        leaves.sort_by_key(|l| l.id);
        Ok(leaves)
    }

    async fn insert_leave(&self, leave: NewLeave) -> ScheduleResult<Leave> {
        let id = self.leave_counter.fetch_add(1, Ordering::SeqCst);
        let record = LeaveRecord::from_new(id, &leave);
        let created = record.to_leave("insert_leave")?;
        self.leaves.insert(id, record);
        Ok(created)
    }

    async fn delete_leave(&self, id: i64) -> ScheduleResult<()> {
        self.leaves
            .remove(&id)
            .ok_or(ScheduleError::LeaveNotFound { id })?;
        Ok(())
    }
}
