//! HTTP request handlers for the hour engine API.
//!
//! This module contains the handler functions for all API endpoints and
//! the router wiring them together under `/api/v1`.

use std::collections::BTreeSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_period_balance, resolve_closure_period};
use crate::error::EngineError;
use crate::holidays::{effective_holidays, national_holidays_between};
use crate::models::{ClosureConfig, HourAdjustment, HourEntry};
use crate::projection::{DashboardProjection, assemble_dashboard};

use super::request::{
    ClosureConfigRequest, DateQuery, HolidayOverrideRequest, HourAdjustmentRequest,
    HourEntryRequest, ListRangeQuery, PageQuery,
};
use super::response::{ApiError, ApiErrorResponse, PeriodBalanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/closure-config",
            get(get_closure_config).put(save_closure_config),
        )
        .route("/api/v1/entries", post(create_entry).get(list_entries))
        .route("/api/v1/entries/paged", get(list_entries_paged))
        .route("/api/v1/entries/:id", get(get_entry).delete(delete_entry))
        .route(
            "/api/v1/adjustments",
            post(create_adjustment).get(list_adjustments),
        )
        .route("/api/v1/adjustments/:id", get(get_adjustment))
        .route("/api/v1/period/current", get(get_current_period))
        .route("/api/v1/period/balance", get(get_period_balance))
        .route("/api/v1/dashboard/projection", get(get_dashboard_projection))
        .route(
            "/api/v1/dashboard/holiday-overrides",
            patch(patch_holiday_override),
        )
        .with_state(state)
}

/// Today's date in the server's local timezone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Serializes a payload as a 200 response.
fn json_ok<T: Serialize>(payload: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(payload),
    )
        .into_response()
}

/// Serializes a payload as a 201 response.
fn json_created<T: Serialize>(payload: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(payload),
    )
        .into_response()
}

/// Unwraps a JSON request body, mapping parse failures to 400 responses.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
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
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// The date window a listing query selects.
enum ListWindow {
    /// No filter; every record.
    All,
    /// Records dated inside the inclusive range.
    Between(NaiveDate, NaiveDate),
    /// The current period was requested but no configuration exists.
    Empty,
}

/// Resolves the window for `GET /entries` and `GET /adjustments`.
///
/// `period_current=true` wins over an explicit range; without a saved
/// configuration it selects nothing rather than failing.
fn resolve_list_window(state: &AppState, query: &ListRangeQuery) -> ListWindow {
    if query.period_current {
        match state.config().current() {
            Some(config) => {
                let bounds = resolve_closure_period(
                    today(),
                    config.closure_start_day,
                    config.closure_end_day,
                );
                ListWindow::Between(bounds.start, bounds.end)
            }
            None => ListWindow::Empty,
        }
    } else if let (Some(start), Some(end)) = (query.start, query.end) {
        ListWindow::Between(start, end)
    } else {
        ListWindow::All
    }
}

/// Builds the dashboard projection for the period containing the date.
///
/// Fetches the period's entries, adjustments, and holiday overrides,
/// merges the overrides into the national holiday set, and hands the
/// lot to the projection assembly.
fn build_projection(
    state: &AppState,
    reference_date: NaiveDate,
) -> Result<DashboardProjection, EngineError> {
    let config = state.config().current().ok_or(EngineError::ConfigAbsent)?;
    let bounds = resolve_closure_period(
        reference_date,
        config.closure_start_day,
        config.closure_end_day,
    );
    let entries = state.entries().find_between(bounds.start, bounds.end);
    let adjustments = state.adjustments().find_between(bounds.start, bounds.end);
    let overrides = state
        .holiday_overrides()
        .overrides_between(bounds.start, bounds.end);
    let override_dates: BTreeSet<NaiveDate> = overrides.keys().copied().collect();
    let holidays = effective_holidays(
        national_holidays_between(bounds.start, bounds.end),
        &overrides,
    );
    Ok(assemble_dashboard(
        &bounds,
        reference_date,
        config.expected_weekly_hours,
        &entries,
        &adjustments,
        &holidays,
        &override_dates,
    ))
}

/// Handler for GET /closure-config.
async fn get_closure_config(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let config = state.config().current().ok_or(EngineError::ConfigAbsent)?;
    Ok(json_ok(config))
}

/// Handler for PUT /closure-config.
///
/// Validates and saves the closure configuration, preserving the identity
/// of an existing one, and returns the stored value.
async fn save_closure_config(
    State(state): State<AppState>,
    payload: Result<Json<ClosureConfigRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;
    request.validate()?;

    let saved = state.config().save(ClosureConfig::new(
        request.closure_start_day,
        request.closure_end_day,
        request.expected_weekly_hours,
    ));
    info!(
        correlation_id = %correlation_id,
        closure_start_day = saved.closure_start_day,
        closure_end_day = saved.closure_end_day,
        "Closure configuration saved"
    );
    Ok(json_ok(saved))
}

/// Handler for POST /entries.
async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<HourEntryRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;
    request.validate()?;

    let entry = state.entries().insert(HourEntry::new(
        request.entry_date,
        request.hours,
        request.description,
    ));
    info!(
        correlation_id = %correlation_id,
        entry_id = %entry.id,
        entry_date = %entry.entry_date,
        "Hour entry recorded"
    );
    Ok(json_created(entry))
}

/// Handler for GET /entries.
async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListRangeQuery>,
) -> Result<Response, ApiErrorResponse> {
    let entries = match resolve_list_window(&state, &query) {
        ListWindow::All => state.entries().find_all(),
        ListWindow::Between(start, end) => state.entries().find_between(start, end),
        ListWindow::Empty => Vec::new(),
    };
    Ok(json_ok(entries))
}

/// Handler for GET /entries/paged.
async fn list_entries_paged(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiErrorResponse> {
    let page = state.entries().find_page_between(
        query.start,
        query.end,
        query.page,
        query.effective_size(),
    );
    Ok(json_ok(page))
}

/// Handler for GET /entries/{id}.
async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiErrorResponse> {
    let entry = state
        .entries()
        .find_by_id(id)
        .ok_or(EngineError::EntryNotFound { id })?;
    Ok(json_ok(entry))
}

/// Handler for DELETE /entries/{id}.
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiErrorResponse> {
    if state.entries().delete_by_id(id) {
        info!(entry_id = %id, "Hour entry deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(EngineError::EntryNotFound { id }.into())
    }
}

/// Handler for POST /adjustments.
async fn create_adjustment(
    State(state): State<AppState>,
    payload: Result<Json<HourAdjustmentRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;
    request.validate()?;

    let adjustment = state.adjustments().insert(HourAdjustment::new(
        request.adjustment_date,
        request.delta_hours,
        request.description,
    ));
    info!(
        correlation_id = %correlation_id,
        adjustment_id = %adjustment.id,
        adjustment_date = %adjustment.adjustment_date,
        "Hour adjustment recorded"
    );
    Ok(json_created(adjustment))
}

/// Handler for GET /adjustments.
async fn list_adjustments(
    State(state): State<AppState>,
    Query(query): Query<ListRangeQuery>,
) -> Result<Response, ApiErrorResponse> {
    let adjustments = match resolve_list_window(&state, &query) {
        ListWindow::All => state.adjustments().find_all(),
        ListWindow::Between(start, end) => state.adjustments().find_between(start, end),
        ListWindow::Empty => Vec::new(),
    };
    Ok(json_ok(adjustments))
}

/// Handler for GET /adjustments/{id}.
async fn get_adjustment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiErrorResponse> {
    let adjustment = state
        .adjustments()
        .find_by_id(id)
        .ok_or(EngineError::AdjustmentNotFound { id })?;
    Ok(json_ok(adjustment))
}

/// Handler for GET /period/current.
async fn get_current_period(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Response, ApiErrorResponse> {
    let config = state.config().current().ok_or(EngineError::ConfigAbsent)?;
    let reference_date = query.date.unwrap_or_else(today);
    let bounds = resolve_closure_period(
        reference_date,
        config.closure_start_day,
        config.closure_end_day,
    );
    Ok(json_ok(bounds))
}

/// Handler for GET /period/balance.
async fn get_period_balance(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Response, ApiErrorResponse> {
    let config = state.config().current().ok_or(EngineError::ConfigAbsent)?;
    let reference_date = query.date.unwrap_or_else(today);
    let bounds = resolve_closure_period(
        reference_date,
        config.closure_start_day,
        config.closure_end_day,
    );
    let entries = state.entries().find_between(bounds.start, bounds.end);
    let adjustments = state.adjustments().find_between(bounds.start, bounds.end);
    let balance = compute_period_balance(&bounds, &entries, &adjustments);
    Ok(json_ok(PeriodBalanceResponse::new(&bounds, &balance)))
}

/// Handler for GET /dashboard/projection.
///
/// Assembles the full dashboard for the period containing the reference
/// date (today when absent) and returns it with goal projection, week
/// rows, and per-day flags.
async fn get_dashboard_projection(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let reference_date = query.date.unwrap_or_else(today);

    let start_time = Instant::now();
    let projection = build_projection(&state, reference_date)?;
    info!(
        correlation_id = %correlation_id,
        reference_date = %reference_date,
        weeks = projection.weeks.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Dashboard projection assembled"
    );
    Ok(json_ok(projection))
}

/// Handler for PATCH /dashboard/holiday-overrides.
///
/// Persists the override and returns the projection recomputed for the
/// period containing today.
async fn patch_holiday_override(
    State(state): State<AppState>,
    payload: Result<Json<HolidayOverrideRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(correlation_id, payload)?;

    state
        .holiday_overrides()
        .set_override(request.date, request.holiday);
    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        holiday = request.holiday,
        "Holiday override saved"
    );
    let projection = build_projection(&state, today())?;
    Ok(json_ok(projection))
}
