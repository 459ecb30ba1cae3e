//! Metrics derivation logic for the production report engine.
//!
//! This module contains the calculation functions that turn raw daily
//! entries into progress metrics: per-item derivation of month-to-date
//! totals, per-day targets, running averages, projections, and achievement
//! percentages; section-level aggregation of the same; the shared
//! round-half-up policy; calendar helpers for month lengths; and the
//! achievement banding thresholds.

mod achievement;
mod calendar;
mod item;
mod rounding;
mod section;

pub use achievement::{AT_RISK_THRESHOLD, ON_TARGET_THRESHOLD, achievement_band};
pub use calendar::days_in_month;
pub use item::compute_item_metrics;
pub use rounding::round_half_up;
pub use section::compute_section_totals;
