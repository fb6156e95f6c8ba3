//! HTTP API for the schedule core.
//!
//! This module wires the lifecycle managers into an axum router consumed by
//! the presentation layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateLeaveRequest, CreateShiftRequest, UpdateProfileRequest, UpdateRoleRequest,
    UpdateShiftRequest,
};
pub use response::{ApiError, ApiErrorResponse, LeaveDeleteResponse, ShiftDeleteResponse};
pub use state::AppState;
