//! Integration tests for the roster engine API.
//!
//! This test suite covers the reconciliation scenarios end to end over HTTP:
//! - Shift lifecycle (create, edit, delete) and the balance adjustments
//! - Moving a shift between users
//! - Leave declaration on weekdays and weekends
//! - Leave cancellation and the correction reversal
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::{RosterConfig, SeedShift, SeedUser};
use roster_engine::models::Role;
use roster_engine::schedule::Scheduler;
use roster_engine::store::InMemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn seed_user(id: i64, name: &str, balance: &str) -> SeedUser {
    SeedUser {
        id,
        name: name.to_string(),
        email: format!("user{}@example.com", id),
        role: Role::Employee,
        avatar_url: String::new(),
        overtime_balance: decimal(balance),
    }
}

fn seed_shift(id: i64, user_id: i64, start: &str, end: &str, overtime: &str) -> SeedShift {
    SeedShift {
        id,
        user_id,
        start_time: datetime(start),
        end_time: datetime(end),
        position: "Customer service".to_string(),
        overtime_hours: decimal(overtime),
    }
}

fn router_for(config: RosterConfig) -> Router {
    let store = Arc::new(InMemoryStore::from_config(&config));
    create_router(AppState::new(Scheduler::new(store)))
}

/// Two users with clean balances and no shifts.
fn empty_roster() -> Router {
    router_for(RosterConfig {
        users: vec![seed_user(1, "Jan Kowalski", "0"), seed_user(2, "Anna Nowak", "0")],
        shifts: Vec::new(),
        leaves: Vec::new(),
    })
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn balance_of(json: &Value) -> Decimal {
    decimal(json["overtime_balance"].as_str().unwrap())
}

fn user_balance(roster: &Value, user_id: i64) -> Decimal {
    let user = roster["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == user_id)
        .unwrap();
    balance_of(user)
}

// =============================================================================
// Roster snapshot
// =============================================================================

#[tokio::test]
async fn test_roster_from_config_file() {
    let config = RosterConfig::load("./config/roster.yaml").expect("Failed to load config");
    let router = router_for(config);

    let (status, json) = send(router, "GET", "/roster", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["users"].as_array().unwrap().len(), 5);
    assert_eq!(json["shifts"].as_array().unwrap().len(), 14);
    assert_eq!(json["leaves"].as_array().unwrap().len(), 0);
}

// =============================================================================
// Shift lifecycle
// =============================================================================

#[tokio::test]
async fn test_shift_lifecycle_adjusts_balance() {
    let router = empty_roster();

    // Create with 3 overtime hours
    let (status, created) = send(
        router.clone(),
        "POST",
        "/shifts",
        Some(json!({
            "user_id": 1,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T19:00:00",
            "position": "Cashier",
            "overtime_hours": "3"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(balance_of(&created["user"]), decimal("3"));
    let shift_id = created["shift"]["id"].as_i64().unwrap();

    // Edit down to 1 overtime hour, same owner
    let (status, updated) = send(
        router.clone(),
        "PUT",
        &format!("/shifts/{}", shift_id),
        Some(json!({
            "user_id": 1,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T17:00:00",
            "position": "Cashier",
            "overtime_hours": "1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users = updated["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(balance_of(&users[0]), decimal("1"));

    // Delete brings the balance back to zero
    let (status, deleted) = send(
        router.clone(),
        "DELETE",
        &format!("/shifts/{}", shift_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], true);
    assert_eq!(balance_of(&deleted["user"]), decimal("0"));

    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(roster["shifts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_moving_shift_between_users_conserves_overtime() {
    let router = empty_roster();

    let (_, created) = send(
        router.clone(),
        "POST",
        "/shifts",
        Some(json!({
            "user_id": 1,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T20:00:00",
            "position": "Warehouse",
            "overtime_hours": "4"
        })),
    )
    .await;
    let shift_id = created["shift"]["id"].as_i64().unwrap();

    let (status, updated) = send(
        router.clone(),
        "PUT",
        &format!("/shifts/{}", shift_id),
        Some(json!({
            "user_id": 2,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T20:00:00",
            "position": "Warehouse",
            "overtime_hours": "4"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Moving an owner returns the full refreshed user set
    let users = updated["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(user_balance(&roster, 1), decimal("0"));
    assert_eq!(user_balance(&roster, 2), decimal("4"));
}

#[tokio::test]
async fn test_moving_shift_to_unknown_user_leaves_balances_untouched() {
    let router = empty_roster();

    let (_, created) = send(
        router.clone(),
        "POST",
        "/shifts",
        Some(json!({
            "user_id": 1,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T18:00:00",
            "position": "Cashier",
            "overtime_hours": "2"
        })),
    )
    .await;
    let shift_id = created["shift"]["id"].as_i64().unwrap();

    let (status, error) = send(
        router.clone(),
        "PUT",
        &format!("/shifts/{}", shift_id),
        Some(json!({
            "user_id": 99,
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T18:00:00",
            "position": "Cashier",
            "overtime_hours": "2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "USER_NOT_FOUND");

    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(user_balance(&roster, 1), decimal("2"));
}

// =============================================================================
// Leave declaration
// =============================================================================

/// 2026-01-13 is a Tuesday. A 10-hour shift with 2 overtime hours has
/// 8 normal hours, so the annual-leave correction is only the overtime
/// reversal.
#[tokio::test]
async fn test_annual_leave_on_weekday_removes_shifts_and_corrects_balance() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Anna Nowak", "2")],
        shifts: vec![seed_shift(
            1,
            1,
            "2026-01-13 08:00:00",
            "2026-01-13 18:00:00",
            "2",
        )],
        leaves: Vec::new(),
    });

    let (status, declared) = send(
        router.clone(),
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "annual"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        decimal(declared["leave"]["overtime_correction"].as_str().unwrap()),
        decimal("-2")
    );
    assert_eq!(declared["removed_shifts"].as_array().unwrap().len(), 1);
    assert_eq!(balance_of(&declared["user"]), decimal("0"));

    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(roster["shifts"].as_array().unwrap().len(), 0);
    assert_eq!(roster["leaves"].as_array().unwrap().len(), 1);
}

/// A 10-hour weekday shift with no overtime leaves 10 normal hours, 2 more
/// than the 8 credited for a weekday of annual leave.
#[tokio::test]
async fn test_annual_leave_credits_excess_normal_hours() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Ewa Wisniewska", "12")],
        shifts: vec![seed_shift(
            1,
            1,
            "2026-01-13 08:00:00",
            "2026-01-13 18:00:00",
            "0",
        )],
        leaves: Vec::new(),
    });

    let (status, declared) = send(
        router,
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "annual"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        decimal(declared["leave"]["overtime_correction"].as_str().unwrap()),
        decimal("2")
    );
    assert_eq!(balance_of(&declared["user"]), decimal("14"));
}

/// 2026-01-17 is a Saturday; no weekday credit applies there, the
/// correction is only the overtime reversal.
#[tokio::test]
async fn test_annual_leave_on_weekend_reverses_overtime_only() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Piotr Zielinski", "1")],
        shifts: vec![seed_shift(
            1,
            1,
            "2026-01-17 08:00:00",
            "2026-01-17 17:00:00",
            "1",
        )],
        leaves: Vec::new(),
    });

    let (status, declared) = send(
        router,
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-17",
            "leave_type": "annual"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        decimal(declared["leave"]["overtime_correction"].as_str().unwrap()),
        decimal("-1")
    );
    assert_eq!(balance_of(&declared["user"]), decimal("0"));
}

#[tokio::test]
async fn test_sick_leave_reverses_overtime_only() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Marek Jankowski", "3")],
        shifts: vec![seed_shift(
            1,
            1,
            "2026-01-13 08:00:00",
            "2026-01-13 19:00:00",
            "3",
        )],
        leaves: Vec::new(),
    });

    let (status, declared) = send(
        router,
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "sick_leave"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        decimal(declared["leave"]["overtime_correction"].as_str().unwrap()),
        decimal("-3")
    );
    assert_eq!(balance_of(&declared["user"]), decimal("0"));
}

#[tokio::test]
async fn test_leave_with_no_shifts_applies_zero_correction() {
    let router = empty_roster();

    let (status, declared) = send(
        router,
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "on_demand"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        decimal(declared["leave"]["overtime_correction"].as_str().unwrap()),
        Decimal::ZERO
    );
    assert_eq!(balance_of(&declared["user"]), decimal("0"));
}

#[tokio::test]
async fn test_leave_removes_only_shifts_starting_that_day() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Anna Nowak", "0")],
        shifts: vec![
            seed_shift(1, 1, "2026-01-13 08:00:00", "2026-01-13 16:00:00", "0"),
            seed_shift(2, 1, "2026-01-14 08:00:00", "2026-01-14 16:00:00", "0"),
        ],
        leaves: Vec::new(),
    });

    let (_, declared) = send(
        router.clone(),
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "annual"
        })),
    )
    .await;
    assert_eq!(declared["removed_shifts"].as_array().unwrap().len(), 1);

    let (_, roster) = send(router, "GET", "/roster", None).await;
    let shifts = roster["shifts"].as_array().unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0]["id"], 2);
}

// =============================================================================
// Leave cancellation
// =============================================================================

#[tokio::test]
async fn test_cancelling_leave_restores_balance_but_not_shifts() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Anna Nowak", "2")],
        shifts: vec![seed_shift(
            1,
            1,
            "2026-01-13 08:00:00",
            "2026-01-13 18:00:00",
            "2",
        )],
        leaves: Vec::new(),
    });

    let (_, declared) = send(
        router.clone(),
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 1,
            "date": "2026-01-13",
            "leave_type": "annual"
        })),
    )
    .await;
    let leave_id = declared["leave"]["id"].as_i64().unwrap();
    assert_eq!(balance_of(&declared["user"]), decimal("0"));

    let (status, cancelled) = send(
        router.clone(),
        "DELETE",
        &format!("/leaves/{}", leave_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["deleted"], true);
    assert_eq!(balance_of(&cancelled["user"]), decimal("2"));

    // Shifts removed when the leave was declared stay removed
    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(roster["shifts"].as_array().unwrap().len(), 0);
    assert_eq!(roster["leaves"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_deleting_missing_ids_is_a_no_op() {
    let router = empty_roster();

    let (status, body) = send(router.clone(), "DELETE", "/shifts/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);

    let (status, body) = send(router, "DELETE", "/leaves/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);
}

// =============================================================================
// User updates
// =============================================================================

#[tokio::test]
async fn test_profile_update_preserves_balance() {
    let router = router_for(RosterConfig {
        users: vec![seed_user(1, "Anna Nowak", "8")],
        shifts: Vec::new(),
        leaves: Vec::new(),
    });

    let (status, user) = send(
        router,
        "PUT",
        "/users/1",
        Some(json!({"name": "Anna Kowalska", "email": "anna.k@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Anna Kowalska");
    assert_eq!(user["email"], "anna.k@example.com");
    assert_eq!(balance_of(&user), decimal("8"));
}

#[tokio::test]
async fn test_role_update() {
    let router = empty_roster();

    let (status, user) = send(
        router,
        "PUT",
        "/users/2/role",
        Some(json!({"role": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], "admin");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_shift_with_inverted_times_is_rejected() {
    let router = empty_roster();

    let (status, error) = send(
        router.clone(),
        "POST",
        "/shifts",
        Some(json!({
            "user_id": 1,
            "start_time": "2026-01-13T16:00:00",
            "end_time": "2026-01-13T08:00:00",
            "position": "Cashier"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    // Nothing was written
    let (_, roster) = send(router, "GET", "/roster", None).await;
    assert_eq!(roster["shifts"].as_array().unwrap().len(), 0);
    assert_eq!(user_balance(&roster, 1), decimal("0"));
}

#[tokio::test]
async fn test_leave_for_unknown_user_returns_404() {
    let router = empty_roster();

    let (status, error) = send(
        router,
        "POST",
        "/leaves",
        Some(json!({
            "user_id": 99,
            "date": "2026-01-13",
            "leave_type": "annual"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = empty_roster();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shifts")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let router = empty_roster();

    let (status, error) = send(
        router,
        "POST",
        "/shifts",
        Some(json!({
            "start_time": "2026-01-13T08:00:00",
            "end_time": "2026-01-13T16:00:00",
            "position": "Cashier"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
