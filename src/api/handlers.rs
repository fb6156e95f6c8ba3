//! HTTP request handlers for the schedule core API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ScheduleError;

use super::request::{
    CreateLeaveRequest, CreateShiftRequest, UpdateProfileRequest, UpdateRoleRequest,
    UpdateShiftRequest,
};
use super::response::{ApiError, ApiErrorResponse, LeaveDeleteResponse, ShiftDeleteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/roster", get(roster_handler))
        .route("/shifts", post(create_shift_handler))
        .route(
            "/shifts/:id",
            put(update_shift_handler).delete(delete_shift_handler),
        )
        .route("/leaves", post(create_leave_handler))
        .route("/leaves/:id", delete(delete_leave_handler))
        .route("/users/:id", put(update_profile_handler))
        .route("/users/:id/role", put(update_role_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps a core error to its JSON error response.
fn error_response(correlation_id: Uuid, err: ScheduleError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn ok_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /roster.
///
/// Returns the full roster snapshot: all users, shifts and leave records.
async fn roster_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Fetching roster");

    match state.scheduler().roster().await {
        Ok(snapshot) => ok_response(StatusCode::OK, &snapshot),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts.
///
/// Credits the owner's overtime balance and stores the shift.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = request.user_id,
        "Creating shift"
    );

    match state.scheduler().add_shift(request.into()).await {
        Ok(created) => ok_response(StatusCode::CREATED, &created),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /shifts/{id}.
async fn update_shift_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        shift_id = id,
        user_id = request.user_id,
        "Updating shift"
    );

    match state.scheduler().update_shift(request.into_shift(id)).await {
        Ok(updated) => ok_response(StatusCode::OK, &updated),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /shifts/{id}.
///
/// Deleting an id that does not exist is a no-op and reports
/// `deleted: false`.
async fn delete_shift_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, shift_id = id, "Deleting shift");

    match state.scheduler().delete_shift(id).await {
        Ok(Some(deleted)) => ok_response(
            StatusCode::OK,
            &ShiftDeleteResponse {
                deleted: true,
                shift: Some(deleted.shift),
                user: Some(deleted.user),
            },
        ),
        Ok(None) => ok_response(
            StatusCode::OK,
            &ShiftDeleteResponse {
                deleted: false,
                shift: None,
                user: None,
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /leaves.
///
/// Removes the owner's shifts on the leave day, applies the balance
/// correction and stores the leave record.
async fn create_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = request.user_id,
        date = %request.date,
        "Declaring leave"
    );

    match state
        .scheduler()
        .add_leave(request.user_id, request.date, request.leave_type)
        .await
    {
        Ok(declared) => ok_response(StatusCode::CREATED, &declared),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /leaves/{id}.
///
/// Reverses the stored correction; shifts removed when the leave was
/// declared are not restored.
async fn delete_leave_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, leave_id = id, "Cancelling leave");

    match state.scheduler().delete_leave(id).await {
        Ok(Some(cancelled)) => ok_response(
            StatusCode::OK,
            &LeaveDeleteResponse {
                deleted: true,
                leave: Some(cancelled.leave),
                user: Some(cancelled.user),
            },
        ),
        Ok(None) => ok_response(
            StatusCode::OK,
            &LeaveDeleteResponse {
                deleted: false,
                leave: None,
                user: None,
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /users/{id}.
async fn update_profile_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, user_id = id, "Updating user profile");

    match state
        .scheduler()
        .update_user(id, request.name, request.email)
        .await
    {
        Ok(user) => ok_response(StatusCode::OK, &user),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /users/{id}/role.
async fn update_role_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateRoleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, user_id = id, "Updating user role");

    match state.scheduler().update_user_role(id, request.role).await {
        Ok(user) => ok_response(StatusCode::OK, &user),
        Err(err) => error_response(correlation_id, err),
    }
}
