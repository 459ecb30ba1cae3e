//! Per-item metrics derivation.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{DerivedMetrics, ProductionItem};

use super::calendar::days_in_month;
use super::rounding::round_half_up;

/// Computes the progress metrics for one production item on a report date.
///
/// # Arguments
///
/// * `item` - The item's daily record; `ftd` is parsed with empty and
///   invalid entries degrading to zero
/// * `report_date` - The date the report covers
///
/// # Returns
///
/// The five derived figures, each rounded half-up from its own unrounded
/// value. With `monthly_target = 0` the achievement percentage is 0 rather
/// than a division error.
///
/// # Behavior
///
/// - `target_per_day` = monthly target / days in the report month
/// - `mtd` = previous MTD + today's figure
/// - `running_avg_per_day` = MTD / day of month (day of month is 1-based;
///   a zero divisor is treated as 1)
/// - `projected_monthly` = running average * days in the report month
/// - `achievement_percent` = today's figure / target-per-day * 100, or 0
///   when no target is configured
/// - values that leave the representable numeric range saturate at the
///   bounds instead of failing
///
/// Pure function of the item and the date; no side effects.
///
/// # Example
///
/// ```
/// use report_engine::metrics::compute_item_metrics;
/// use report_engine::models::{FtdEntry, ProductionItem, Section};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let item = ProductionItem {
///     id: "input-solid-cont".to_string(),
///     name: "Input-Solid Cont Dyeing".to_string(),
///     section: Section::Input,
///     ftd: FtdEntry::new("40000"),
///     remarks: String::new(),
///     monthly_target: Decimal::from(2000000),
///     previous_mtd: Decimal::from(1050000),
/// };
///
/// // Day 15 of a 30-day month.
/// let metrics = compute_item_metrics(&item, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
/// assert_eq!(metrics.target_per_day, 66667);
/// assert_eq!(metrics.mtd, 1090000);
/// assert_eq!(metrics.running_avg_per_day, 72667);
/// assert_eq!(metrics.projected_monthly, 2180000);
/// assert_eq!(metrics.achievement_percent, 60);
/// ```
pub fn compute_item_metrics(item: &ProductionItem, report_date: NaiveDate) -> DerivedMetrics {
    derive_metrics(
        item.ftd.value(),
        item.previous_mtd,
        item.monthly_target,
        report_date,
    )
}

/// Derives the five metrics from already-parsed quantities.
///
/// Shared by the per-item and per-section paths so both apply identical
/// formulas and rounding.
pub(super) fn derive_metrics(
    ftd_value: Decimal,
    previous_mtd: Decimal,
    monthly_target: Decimal,
    report_date: NaiveDate,
) -> DerivedMetrics {
    let month_days = Decimal::from(days_in_month(report_date));
    let day = Decimal::from(report_date.day().max(1));

    // Sums and products saturate at the numeric bounds; both divisors are at
    // least 1, so the plain quotients cannot overflow. The achievement ratio
    // divides by a value that can be arbitrarily small, so it gets the same
    // cap.
    let target_per_day = monthly_target / month_days;
    let mtd = previous_mtd.saturating_add(ftd_value);
    let running_avg_per_day = mtd / day;
    let projected_monthly = running_avg_per_day.saturating_mul(month_days);
    let achievement_percent = if target_per_day > Decimal::ZERO {
        ftd_value
            .checked_div(target_per_day)
            .map_or(Decimal::MAX, |ratio| {
                ratio.saturating_mul(Decimal::ONE_HUNDRED)
            })
    } else {
        Decimal::ZERO
    };

    DerivedMetrics {
        mtd: round_half_up(mtd),
        target_per_day: round_half_up(target_per_day),
        running_avg_per_day: round_half_up(running_avg_per_day),
        projected_monthly: round_half_up(projected_monthly),
        achievement_percent: round_half_up(achievement_percent),
    }
}
