//! HTTP request handlers for the report engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::metrics::{achievement_band, compute_item_metrics, compute_section_totals};
use crate::models::{ItemReport, ProductionItem, ReportSnapshot, Section, SectionReport};
use crate::targets::{
    load_overrides, parse_override_input, resolve_from_table, resolve_monthly_target,
    save_monthly_target, Month, TargetStore,
};

use super::request::{EntryRequest, ReportRequest, SaveTargetRequest};
use super::response::{
    ApiError, ApiErrorResponse, DepartmentResponse, DepartmentsResponse, SaveTargetResponse,
    TargetsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/departments", get(departments_handler))
        .route("/report/metrics", post(metrics_handler))
        .route("/targets/:year", get(targets_handler))
        .route(
            "/targets/:year/:department_id/:month",
            put(save_target_handler),
        )
        .with_state(state)
}

/// Maps a JSON extraction rejection onto the API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
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
    }
}

/// Handler for GET /departments endpoint.
///
/// Returns the configured roster with default targets and the report
/// metadata, in report order.
async fn departments_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Serving department roster");

    let config = state.config();
    let response = DepartmentsResponse {
        report: config.report().into(),
        departments: config
            .departments()
            .iter()
            .map(DepartmentResponse::from)
            .collect(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /report/metrics endpoint.
///
/// Accepts a day's entries and returns the computed report snapshot.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report metrics request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Reject reports dated in the future
    let today = Utc::now().date_naive();
    if request.report_date > today {
        warn!(
            correlation_id = %correlation_id,
            report_date = %request.report_date,
            "Report date is in the future"
        );
        let api_error: ApiErrorResponse = EngineError::InvalidDate {
            message: format!("Report date {} is in the future", request.report_date),
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Build the snapshot under a read lock so a concurrent save cannot
    // split the override table mid-report.
    let start_time = Instant::now();
    let result = {
        let store = state.store().read().await;
        build_report_snapshot(
            state.config(),
            store.as_ref(),
            request.report_date,
            &request.entries,
        )
    };

    match result {
        Ok(snapshot) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                snapshot_id = %snapshot.snapshot_id,
                report_date = %snapshot.report_date,
                items_count = snapshot.items.len(),
                duration_us = duration.as_micros(),
                "Report snapshot built successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(snapshot),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report snapshot failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /targets/:year endpoint.
///
/// Returns the stored override table for the year. Missing and damaged
/// payloads read as an empty table rather than failing.
async fn targets_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, year, "Serving override table");

    let store = state.store().read().await;
    let overrides = load_overrides(store.as_ref(), year);
    drop(store);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TargetsResponse { year, overrides }),
    )
        .into_response()
}

/// Handler for PUT /targets/:year/:department_id/:month endpoint.
///
/// Saves or clears one department-month override and returns the target
/// that now resolves for it.
async fn save_target_handler(
    State(state): State<AppState>,
    Path((year, department_id, month_raw)): Path<(i32, String, String)>,
    payload: Result<Json<SaveTargetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        year,
        department_id = %department_id,
        month = %month_raw,
        "Processing target save request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The month arrives as a raw path segment so out-of-range values can
    // get a typed error instead of a generic path rejection.
    let month = match month_raw.parse::<u8>().ok().and_then(Month::new) {
        Some(month) => month,
        None => {
            warn!(
                correlation_id = %correlation_id,
                month = %month_raw,
                "Invalid month in path"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::invalid_month(&month_raw)),
            )
                .into_response();
        }
    };

    // Validate the department exists
    if let Err(err) = state.config().get_department(&department_id) {
        warn!(
            correlation_id = %correlation_id,
            department_id = %department_id,
            "Department not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let value = request.value.as_deref().and_then(parse_override_input);

    // The write lock makes the read-modify-write cycle atomic.
    let mut store = state.store().write().await;
    if let Err(err) = save_monthly_target(store.as_mut(), &department_id, year, month, value) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Target save failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    let defaults = state.config().default_targets();
    let effective_target =
        resolve_monthly_target(store.as_ref(), &defaults, &department_id, year, month);
    drop(store);

    info!(
        correlation_id = %correlation_id,
        department_id = %department_id,
        year,
        month = month.number(),
        override_active = value.is_some(),
        effective_target = %effective_target,
        "Target saved"
    );

    let response = SaveTargetResponse {
        department_id,
        year,
        month,
        override_value: value,
        effective_target,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Builds the full report snapshot for a day's entries.
///
/// Entries are joined to the configured roster, targets are resolved for
/// the report date's year and month, and per-item metrics plus section
/// totals are derived. Items appear in roster order regardless of
/// submission order.
fn build_report_snapshot(
    config: &ConfigLoader,
    store: &dyn TargetStore,
    report_date: NaiveDate,
    entries: &[EntryRequest],
) -> EngineResult<ReportSnapshot> {
    let month = Month::from_date(report_date);
    let overrides = load_overrides(store, report_date.year());
    let defaults = config.default_targets();

    // Every entry must name a known department, at most once.
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    for entry in entries {
        config.get_department(&entry.id)?;
        if !seen.insert(entry.id.as_str()) {
            return Err(EngineError::InvalidItem {
                id: entry.id.clone(),
                message: "department appears more than once in the report".to_string(),
            });
        }
    }

    // Assemble items in roster order
    let mut items: Vec<ProductionItem> = Vec::with_capacity(entries.len());
    for department in config.departments() {
        if let Some(entry) = entries.iter().find(|e| e.id == department.id) {
            let monthly_target = resolve_from_table(&overrides, &defaults, &department.id, month);
            let item = ProductionItem {
                id: department.id.clone(),
                name: department.name.clone(),
                section: department.section,
                ftd: entry.ftd.as_str().into(),
                remarks: entry.remarks.clone(),
                monthly_target,
                previous_mtd: entry.previous_mtd,
            };
            item.validate()?;
            items.push(item);
        }
    }

    // Per-item metrics and bands
    let item_reports: Vec<ItemReport> = items
        .iter()
        .map(|item| {
            let metrics = compute_item_metrics(item, report_date);
            ItemReport {
                id: item.id.clone(),
                name: item.name.clone(),
                section: item.section,
                ftd: item.ftd.clone(),
                remarks: item.remarks.clone(),
                monthly_target: item.monthly_target,
                previous_mtd: item.previous_mtd,
                metrics,
                band: achievement_band(metrics.achievement_percent),
            }
        })
        .collect();

    // Section totals for each section present among the items
    let sections: Vec<SectionReport> = Section::ALL
        .into_iter()
        .filter(|section| items.iter().any(|item| item.section == *section))
        .map(|section| {
            let totals = compute_section_totals(&items, section, report_date);
            let band = achievement_band(totals.metrics.achievement_percent);
            SectionReport { totals, band }
        })
        .collect();

    Ok(ReportSnapshot {
        snapshot_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        report_date,
        unit: config.report().unit.clone(),
        items: item_reports,
        sections,
    })
}
