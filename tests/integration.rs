//! Integration tests for the hour engine API.
//!
//! This test suite drives the router end to end and covers:
//! - Closure configuration upsert and validation
//! - Hour entry CRUD, range listing, and paging
//! - Hour adjustments
//! - Closure period resolution (wraparound and day clamping)
//! - Period balance aggregation
//! - Dashboard projection with goal statuses
//! - Holiday flags and per-day overrides
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use hour_engine::api::{AppState, create_router};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_router() -> Router {
    create_router(AppState::in_memory())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = value.as_str().expect("expected a decimal string");
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "PUT", uri, Some(body)).await
}

async fn patch(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "PATCH", uri, Some(body)).await
}

async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "DELETE", uri, None).await
}

/// Saves a closure configuration, panicking if it is rejected.
async fn configure(router: &Router, start_day: u32, end_day: u32, weekly_hours: Option<&str>) {
    let mut body = json!({
        "closure_start_day": start_day,
        "closure_end_day": end_day,
    });
    if let Some(hours) = weekly_hours {
        body["expected_weekly_hours"] = json!(hours);
    }
    let (status, _) = put(router, "/api/v1/closure-config", body).await;
    assert_eq!(status, StatusCode::OK);
}

/// Seeds the reference scenario: a 21→20 period with a 40-hour weekly goal,
/// 22.5 worked hours, and +38 in adjustments (balance 60.5).
async fn seed_reference_scenario(router: &Router) {
    configure(router, 21, 20, Some("40")).await;

    for (date, hours) in [
        ("2025-01-22", "8"),
        ("2025-01-23", "6.5"),
        ("2025-02-03", "8"),
    ] {
        let (status, _) = post(
            router,
            "/api/v1/entries",
            json!({"entry_date": date, "hours": hours}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    for (date, delta) in [("2025-01-21", "40"), ("2025-01-25", "-2")] {
        let (status, _) = post(
            router,
            "/api/v1/adjustments",
            json!({"adjustment_date": date, "delta_hours": delta}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

/// Finds one day's flags in a dashboard projection by ISO date.
fn find_day<'a>(projection: &'a Value, date: &str) -> &'a Value {
    projection["weeks"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|week| week["days"].as_array().unwrap().iter())
        .find(|day| day["date"] == date)
        .unwrap_or_else(|| panic!("day {} not in projection", date))
}

// =============================================================================
// SECTION 1: Closure Configuration - 4 tests
// =============================================================================

#[tokio::test]
async fn test_config_absent_returns_204_without_body() {
    let router = create_test_router();

    let (status, body) = get(&router, "/api/v1/closure-config").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_config_upsert_preserves_identity() {
    let router = create_test_router();

    let (status, first) = put(
        &router,
        "/api/v1/closure-config",
        json!({"closure_start_day": 21, "closure_end_day": 20, "expected_weekly_hours": "40"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["closure_start_day"], 21);
    let first_id = first["id"].as_str().unwrap().to_string();

    // A second save replaces the values but keeps the same identity.
    let (status, second) = put(
        &router,
        "/api/v1/closure-config",
        json!({"closure_start_day": 1, "closure_end_day": 31}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["id"], first_id.as_str());
    assert_eq!(second["closure_start_day"], 1);
    assert!(second["expected_weekly_hours"].is_null());

    let (status, fetched) = get(&router, "/api/v1/closure-config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["closure_end_day"], 31);
}

#[tokio::test]
async fn test_config_rejects_out_of_range_days() {
    let router = create_test_router();

    let (status, error) = put(
        &router,
        "/api/v1/closure-config",
        json!({"closure_start_day": 0, "closure_end_day": 20}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");

    let (status, error) = put(
        &router,
        "/api/v1/closure-config",
        json!({"closure_start_day": 21, "closure_end_day": 32}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("closure_end_day"));
}

#[tokio::test]
async fn test_config_rejects_non_positive_weekly_hours() {
    let router = create_test_router();

    let (status, error) = put(
        &router,
        "/api/v1/closure-config",
        json!({"closure_start_day": 21, "closure_end_day": 20, "expected_weekly_hours": "0"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(
        error["message"]
            .as_str()
            .unwrap()
            .contains("expected_weekly_hours")
    );
}

// =============================================================================
// SECTION 2: Hour Entries - 5 tests
// =============================================================================

#[tokio::test]
async fn test_entry_create_and_fetch() {
    let router = create_test_router();

    let (status, created) = post(
        &router,
        "/api/v1/entries",
        json!({"entry_date": "2025-01-22", "hours": "8", "description": "support shift"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["entry_date"], "2025-01-22");
    assert_decimal_field(&created["hours"], "8");
    assert_eq!(created["description"], "support shift");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&router, &format!("/api/v1/entries/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_entry_delete_lifecycle() {
    let router = create_test_router();

    let (_, created) = post(
        &router,
        "/api/v1/entries",
        json!({"entry_date": "2025-01-22", "hours": "8"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = delete(&router, &format!("/api/v1/entries/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // Second delete and subsequent fetch both 404.
    let (status, error) = delete(&router, &format!("/api/v1/entries/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ENTRY_NOT_FOUND");

    let (status, _) = get(&router, &format!("/api/v1/entries/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_entry_rejects_hours_below_minimum() {
    let router = create_test_router();

    let (status, error) = post(
        &router,
        "/api/v1/entries",
        json!({"entry_date": "2025-01-22", "hours": "0"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("hours"));
}

#[tokio::test]
async fn test_entry_rejects_oversized_description() {
    let router = create_test_router();

    let (status, error) = post(
        &router,
        "/api/v1/entries",
        json!({"entry_date": "2025-01-22", "hours": "8", "description": "x".repeat(501)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn test_entry_listing_all_and_range() {
    let router = create_test_router();

    for date in ["2025-03-01", "2025-03-10", "2025-03-20"] {
        let (status, _) = post(
            &router,
            "/api/v1/entries",
            json!({"entry_date": date, "hours": "4"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Without filters: everything, oldest first.
    let (status, all) = get(&router, "/api/v1/entries").await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().unwrap().clone();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["entry_date"], "2025-03-01");
    assert_eq!(all[2]["entry_date"], "2025-03-20");

    // Inclusive range keeps only the middle entry.
    let (status, ranged) = get(&router, "/api/v1/entries?start=2025-03-05&end=2025-03-15").await;
    assert_eq!(status, StatusCode::OK);
    let ranged = ranged.as_array().unwrap().clone();
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0]["entry_date"], "2025-03-10");
}

// =============================================================================
// SECTION 3: Paged Entry Listing - 3 tests
// =============================================================================

async fn seed_march_entries(router: &Router, count: i64) {
    let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    for i in 0..count {
        let date = first + Duration::days(i);
        let (status, _) = post(
            router,
            "/api/v1/entries",
            json!({"entry_date": date.to_string(), "hours": "2"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_paged_listing_first_page_is_newest() {
    let router = create_test_router();
    seed_march_entries(&router, 25).await;

    let (status, page) = get(
        &router,
        "/api/v1/entries/paged?start=2025-03-01&end=2025-03-31&page=0&size=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_elements"], 25);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 10);
    let content = page["content"].as_array().unwrap();
    assert_eq!(content.len(), 10);
    assert_eq!(content[0]["entry_date"], "2025-03-25");
    assert_eq!(content[9]["entry_date"], "2025-03-16");
}

#[tokio::test]
async fn test_paged_listing_last_page_is_partial() {
    let router = create_test_router();
    seed_march_entries(&router, 25).await;

    let (status, page) = get(
        &router,
        "/api/v1/entries/paged?start=2025-03-01&end=2025-03-31&page=2&size=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let content = page["content"].as_array().unwrap();
    assert_eq!(content.len(), 5);
    assert_eq!(content[4]["entry_date"], "2025-03-01");
}

#[tokio::test]
async fn test_paged_listing_invalid_size_falls_back() {
    let router = create_test_router();
    seed_march_entries(&router, 25).await;

    let (status, page) = get(
        &router,
        "/api/v1/entries/paged?start=2025-03-01&end=2025-03-31&page=0&size=0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["size"], 20);
    assert_eq!(page["content"].as_array().unwrap().len(), 20);
    assert_eq!(page["total_pages"], 2);
}

// =============================================================================
// SECTION 4: Hour Adjustments - 3 tests
// =============================================================================

#[tokio::test]
async fn test_adjustment_create_and_fetch() {
    let router = create_test_router();

    let (status, created) = post(
        &router,
        "/api/v1/adjustments",
        json!({"adjustment_date": "2025-01-21", "delta_hours": "-2", "description": "early leave"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_decimal_field(&created["delta_hours"], "-2");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&router, &format!("/api/v1/adjustments/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, all) = get(&router, "/api/v1/adjustments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_adjustment_unknown_id_returns_404() {
    let router = create_test_router();

    let (status, error) = get(
        &router,
        "/api/v1/adjustments/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ADJUSTMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_adjustment_rejects_zero_delta() {
    let router = create_test_router();

    let (status, error) = post(
        &router,
        "/api/v1/adjustments",
        json!({"adjustment_date": "2025-01-21", "delta_hours": "0"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("delta_hours"));
}

// =============================================================================
// SECTION 5: Closure Period Resolution - 3 tests
// =============================================================================

#[tokio::test]
async fn test_period_current_wraparound() {
    let router = create_test_router();
    configure(&router, 21, 20, None).await;

    // Day 10 is before the start day, so the period began last month.
    let (status, period) = get(&router, "/api/v1/period/current?date=2025-02-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start"], "2025-01-21");
    assert_eq!(period["end"], "2025-02-20");

    // Day 25 is on or after the start day, so the period runs into next month.
    let (status, period) = get(&router, "/api/v1/period/current?date=2025-02-25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start"], "2025-02-21");
    assert_eq!(period["end"], "2025-03-20");
}

#[tokio::test]
async fn test_period_current_clamps_to_month_length() {
    let router = create_test_router();
    configure(&router, 31, 30, None).await;

    // Neither January 31 nor "February 30" exists as-is in February.
    let (status, period) = get(&router, "/api/v1/period/current?date=2025-02-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(period["start"], "2025-01-31");
    assert_eq!(period["end"], "2025-02-28");
}

#[tokio::test]
async fn test_period_current_without_config_returns_204() {
    let router = create_test_router();

    let (status, body) = get(&router, "/api/v1/period/current?date=2025-02-10").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

// =============================================================================
// SECTION 6: Period Balance - 2 tests
// =============================================================================

#[tokio::test]
async fn test_period_balance_reference_scenario() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    let (status, balance) = get(&router, "/api/v1/period/balance?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(balance["period_start"], "2025-01-21");
    assert_eq!(balance["period_end"], "2025-02-20");
    assert_decimal_field(&balance["total_worked"], "22.5");
    assert_decimal_field(&balance["total_adjusted"], "38");
    assert_decimal_field(&balance["balance"], "60.5");
}

#[tokio::test]
async fn test_period_balance_ignores_out_of_period_records() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    // Both fall outside [2025-01-21, 2025-02-20].
    post(
        &router,
        "/api/v1/entries",
        json!({"entry_date": "2025-01-20", "hours": "5"}),
    )
    .await;
    post(
        &router,
        "/api/v1/adjustments",
        json!({"adjustment_date": "2025-02-21", "delta_hours": "10"}),
    )
    .await;

    let (status, balance) = get(&router, "/api/v1/period/balance?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&balance["balance"], "60.5");
}

// =============================================================================
// SECTION 7: Dashboard Projection - 6 tests
// =============================================================================

#[tokio::test]
async fn test_dashboard_reference_scenario() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["period"]["start"], "2025-01-21");
    assert_eq!(dashboard["period"]["end"], "2025-02-20");
    assert_eq!(dashboard["period"]["total_days"], 31);

    assert_decimal_field(&dashboard["totals"]["total_worked"], "22.5");
    assert_decimal_field(&dashboard["totals"]["total_adjusted"], "38");
    assert_decimal_field(&dashboard["totals"]["balance"], "60.5");
    assert_decimal_field(&dashboard["totals"]["full_month_max_hours"], "171.43");
    assert_decimal_field(&dashboard["totals"]["available_hours_in_period"], "177.14");

    assert_eq!(dashboard["progress"]["days_elapsed"], 21);
    assert_eq!(dashboard["progress"]["total_days"], 31);
    let fraction = dashboard["progress"]["percentage_elapsed"].as_f64().unwrap();
    assert!((fraction - 21.0 / 31.0).abs() < 1e-9);

    // Five Sunday-to-Saturday segments covering the whole period.
    let weeks = dashboard["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 5);
    let day_counts: Vec<usize> = weeks
        .iter()
        .map(|w| w["days"].as_array().unwrap().len())
        .collect();
    assert_eq!(day_counts, vec![5, 7, 7, 7, 5]);

    assert_decimal_field(&weeks[0]["hours_available"], "28.57");
    assert_decimal_field(&weeks[1]["hours_available"], "40");
    assert_decimal_field(&weeks[0]["balance"], "52.5");
    assert_decimal_field(&weeks[1]["balance"], "0");
    assert_decimal_field(&weeks[2]["balance"], "8");

    // The first period day is a Tuesday and lies before the reference date.
    let first_day = &weeks[0]["days"][0];
    assert_eq!(first_day["date"], "2025-01-21");
    assert_eq!(first_day["weekday_label"], "Ter");
    assert_eq!(first_day["day_of_month"], 21);
    assert_eq!(first_day["past"], true);
    let last_day = &weeks[4]["days"][4];
    assert_eq!(last_day["date"], "2025-02-20");
    assert_eq!(last_day["past"], false);

    // 60.5 / 21 = 2.88; 2.88 * 31 = 89.28 against a 177.14 target.
    let goal = &dashboard["goal_projection"];
    assert_decimal_field(&goal["current_rate_per_day"], "2.88");
    assert_decimal_field(&goal["projected_balance_at_end"], "89.28");
    assert_decimal_field(&goal["target_hours"], "177.14");
    assert_eq!(goal["goal_status"], "IMPOSSIBLE");
}

#[tokio::test]
async fn test_dashboard_goal_at_risk() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    // Lifts the balance to 120: rate 5.71, projected 177.01, just short
    // of the 177.14 target.
    post(
        &router,
        "/api/v1/adjustments",
        json!({"adjustment_date": "2025-02-01", "delta_hours": "59.5"}),
    )
    .await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    let goal = &dashboard["goal_projection"];
    assert_decimal_field(&goal["current_rate_per_day"], "5.71");
    assert_decimal_field(&goal["projected_balance_at_end"], "177.01");
    assert_eq!(goal["goal_status"], "AT_RISK");
}

#[tokio::test]
async fn test_dashboard_goal_attainable() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    // Lifts the balance to 125: rate 5.95, projected 184.45.
    post(
        &router,
        "/api/v1/adjustments",
        json!({"adjustment_date": "2025-02-01", "delta_hours": "64.5"}),
    )
    .await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    let goal = &dashboard["goal_projection"];
    assert_decimal_field(&goal["projected_balance_at_end"], "184.45");
    assert_eq!(goal["goal_status"], "ATTAINABLE");
}

#[tokio::test]
async fn test_dashboard_without_goal_has_null_projection() {
    let router = create_test_router();
    configure(&router, 21, 20, None).await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection?date=2025-02-10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(dashboard["goal_projection"].is_null());
    assert_decimal_field(&dashboard["totals"]["available_hours_in_period"], "0");
}

#[tokio::test]
async fn test_dashboard_defaults_reference_to_today() {
    let router = create_test_router();
    configure(&router, 1, 31, None).await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection").await;

    assert_eq!(status, StatusCode::OK);
    // A 1→31 configuration always yields the calendar month containing today.
    let today = Local::now().date_naive();
    assert_eq!(
        dashboard["progress"]["days_elapsed"],
        i64::from(today.day())
    );
}

#[tokio::test]
async fn test_dashboard_without_config_returns_204() {
    let router = create_test_router();

    let (status, body) = get(&router, "/api/v1/dashboard/projection").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

// =============================================================================
// SECTION 8: Holidays & Overrides - 3 tests
// =============================================================================

#[tokio::test]
async fn test_dashboard_flags_national_holiday() {
    let router = create_test_router();
    configure(&router, 1, 31, None).await;

    let (status, dashboard) = get(&router, "/api/v1/dashboard/projection?date=2025-03-10").await;

    assert_eq!(status, StatusCode::OK);
    // Carnival 2025 falls on March 4.
    let carnival = find_day(&dashboard, "2025-03-04");
    assert_eq!(carnival["holiday"], true);
    assert_eq!(carnival["user_override"], false);
    let ordinary = find_day(&dashboard, "2025-03-05");
    assert_eq!(ordinary["holiday"], false);
}

#[tokio::test]
async fn test_holiday_override_add_and_remove() {
    let router = create_test_router();
    configure(&router, 1, 31, None).await;
    let today = Local::now().date_naive().to_string();

    // Mark today as a holiday; the refreshed projection reflects it.
    let (status, dashboard) = patch(
        &router,
        "/api/v1/dashboard/holiday-overrides",
        json!({"date": today, "holiday": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let day = find_day(&dashboard, &today);
    assert_eq!(day["holiday"], true);
    assert_eq!(day["user_override"], true);

    // Flipping it back strips the holiday but keeps the override flag.
    let (status, dashboard) = patch(
        &router,
        "/api/v1/dashboard/holiday-overrides",
        json!({"date": today, "holiday": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let day = find_day(&dashboard, &today);
    assert_eq!(day["holiday"], false);
    assert_eq!(day["user_override"], true);
}

#[tokio::test]
async fn test_holiday_override_can_strip_national_holiday() {
    let router = create_test_router();
    configure(&router, 1, 31, None).await;

    // The first of the month is sometimes a national holiday (New Year,
    // Labour Day); the override must win either way.
    let today = Local::now().date_naive();
    let target = today.with_day(1).unwrap();
    let target_str = target.to_string();

    let (status, dashboard) = patch(
        &router,
        "/api/v1/dashboard/holiday-overrides",
        json!({"date": target_str, "holiday": false}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let day = find_day(&dashboard, &target_str);
    // Whatever the national calendar said, the override forces non-holiday.
    assert_eq!(day["holiday"], false);
    assert_eq!(day["user_override"], true);
}

// =============================================================================
// SECTION 9: Error Cases & Wire Format - 3 tests
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/entries")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_entry_date() {
    let router = create_test_router();

    let (status, error) = post(&router, "/api/v1/entries", json!({"hours": "8"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_entry_balance_survives_decimal_round_trip() {
    let router = create_test_router();
    seed_reference_scenario(&router).await;

    let (_, balance) = get(&router, "/api/v1/period/balance?date=2025-02-10").await;

    // The wire format must parse back into the exact decimal.
    let wire: Decimal = balance["balance"].as_str().unwrap().parse().unwrap();
    assert_eq!(wire, decimal("60.5"));
}
