//! Work-schedule management core.
//!
//! This crate manages shifts and leave for a roster of users and keeps each
//! user's cumulative overtime balance consistent across every mutation:
//! adding, editing and deleting shifts, declaring leave (which supersedes the
//! shifts scheduled that day) and cancelling leave (which exactly reverses
//! the balance correction the leave caused).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod schedule;
pub mod store;
