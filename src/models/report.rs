//! Report snapshot models for the production report engine.
//!
//! This module contains the [`ReportSnapshot`] type and its associated
//! structures that capture one fully computed daily report: per-item results,
//! per-section totals, and the context they were computed in.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AchievementBand, DerivedMetrics, FtdEntry, Section, SectionTotals};

/// One department's computed row in a report snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    /// The department id.
    pub id: String,
    /// The department's display name from the roster.
    pub name: String,
    /// The section the department reports under.
    pub section: Section,
    /// The raw figure entry as submitted.
    pub ftd: FtdEntry,
    /// Free-text remarks as submitted.
    pub remarks: String,
    /// The monthly target effective for the report month (override or
    /// built-in default).
    pub monthly_target: Decimal,
    /// Cumulative figure through yesterday, as submitted.
    pub previous_mtd: Decimal,
    /// The derived progress metrics.
    pub metrics: DerivedMetrics,
    /// Banding of the item's achievement percentage.
    pub band: AchievementBand,
}

/// One section's totals row in a report snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    /// The aggregate totals and their recomputed metrics.
    pub totals: SectionTotals,
    /// Banding of the aggregate achievement percentage.
    pub band: AchievementBand,
}

/// The complete result of computing a daily report.
///
/// This struct captures all outputs of the metrics engine for one report
/// date: every department row with its derived metrics and band, and the
/// totals row for every section present.
///
/// # Example
///
/// ```
/// use report_engine::models::ReportSnapshot;
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let snapshot = ReportSnapshot {
///     snapshot_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     report_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
///     unit: "Meter".to_string(),
///     items: vec![],
///     sections: vec![],
/// };
/// assert!(snapshot.items.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Unique identifier for this snapshot.
    pub snapshot_id: Uuid,
    /// When the snapshot was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the snapshot.
    pub engine_version: String,
    /// The report date the metrics were derived for.
    pub report_date: NaiveDate,
    /// Unit of measure for all quantities.
    pub unit: String,
    /// Per-department rows in roster order.
    pub items: Vec<ItemReport>,
    /// Per-section totals in section order.
    pub sections: Vec<SectionReport>,
}
