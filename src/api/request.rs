//! Request types for the report engine API.
//!
//! This module defines the JSON request structures for the report and
//! target endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/report/metrics` endpoint.
///
/// Contains the report date and one entry per department being reported.
/// Entries may arrive in any order; the response lists items in roster
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The date the report covers.
    pub report_date: NaiveDate,
    /// The submitted entries, at most one per department.
    pub entries: Vec<EntryRequest>,
}

/// One department's submitted figures in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// The department id (e.g., "input-print").
    pub id: String,
    /// The day's production figure as entered. May be empty or
    /// unparsable; both read as zero in the calculations.
    #[serde(default)]
    pub ftd: String,
    /// Free-text remarks for the day.
    #[serde(default)]
    pub remarks: String,
    /// Month-to-date total through the previous day.
    pub previous_mtd: Decimal,
}

/// Request body for the `PUT /targets/:year/:department_id/:month`
/// endpoint.
///
/// The value is carried as entered. Anything that does not parse as a
/// positive number (missing, null, empty, zero, negative, garbage)
/// clears the override instead of saving one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTargetRequest {
    /// The override value as entered, if any.
    #[serde(default)]
    pub value: Option<String>,
}
