//! Section-level aggregation of daily entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ProductionItem, Section, SectionTotals};

use super::item::derive_metrics;
use super::rounding::round_half_up;

/// Computes the totals row for one section of a report.
///
/// Items are filtered by their `section` tag, their raw quantities are
/// summed, and the metrics are derived from the sums with the same formulas
/// and rounding as the per-item path. The section's achievement is therefore
/// the achievement of the aggregate, not the average of the member items'
/// achievements.
///
/// # Arguments
///
/// * `items` - The full item set; non-members are ignored
/// * `section` - The section to total
/// * `report_date` - The date the report covers
///
/// # Returns
///
/// The summed figures and the metrics recomputed from them. A section whose
/// aggregate target is zero reports an achievement of 0.
///
/// # Example
///
/// ```
/// use report_engine::metrics::compute_section_totals;
/// use report_engine::models::{FtdEntry, ProductionItem, Section};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let items = vec![ProductionItem {
///     id: "bsr-solid".to_string(),
///     name: "BSR production- Solid".to_string(),
///     section: Section::Bsr,
///     ftd: FtdEntry::new("850"),
///     remarks: String::new(),
///     monthly_target: Decimal::ZERO,
///     previous_mtd: Decimal::ZERO,
/// }];
///
/// let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
/// let totals = compute_section_totals(&items, Section::Bsr, date);
/// assert_eq!(totals.ftd_sum, 850);
/// assert_eq!(totals.metrics.achievement_percent, 0);
/// ```
pub fn compute_section_totals(
    items: &[ProductionItem],
    section: Section,
    report_date: NaiveDate,
) -> SectionTotals {
    let mut ftd_sum = Decimal::ZERO;
    let mut monthly_target_sum = Decimal::ZERO;
    let mut previous_mtd_sum = Decimal::ZERO;

    // Member sums saturate at the numeric bounds, like the derivation itself.
    for item in items.iter().filter(|item| item.section == section) {
        ftd_sum = ftd_sum.saturating_add(item.ftd.value());
        monthly_target_sum = monthly_target_sum.saturating_add(item.monthly_target);
        previous_mtd_sum = previous_mtd_sum.saturating_add(item.previous_mtd);
    }

    let metrics = derive_metrics(ftd_sum, previous_mtd_sum, monthly_target_sum, report_date);

    SectionTotals {
        section,
        ftd_sum: round_half_up(ftd_sum),
        monthly_target_sum: round_half_up(monthly_target_sum),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_item_metrics;
    use crate::models::FtdEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_item(
        id: &str,
        section: Section,
        ftd: &str,
        monthly_target: &str,
        previous_mtd: &str,
    ) -> ProductionItem {
        ProductionItem {
            id: id.to_string(),
            name: id.to_string(),
            section,
            ftd: FtdEntry::new(ftd),
            remarks: String::new(),
            monthly_target: dec(monthly_target),
            previous_mtd: dec(previous_mtd),
        }
    }

    // ==========================================================================
    // ST-001: all-zero targets yield zero achievement
    // ==========================================================================
    #[test]
    fn test_st_001_zero_target_section_has_zero_achievement() {
        let items = vec![
            make_item("bsr-solid", Section::Bsr, "850", "0", "0"),
            make_item("bsr-print", Section::Bsr, "1200", "0", "0"),
        ];

        let totals = compute_section_totals(&items, Section::Bsr, make_date("2025-09-15"));
        assert_eq!(totals.ftd_sum, 2050);
        assert_eq!(totals.monthly_target_sum, 0);
        assert_eq!(totals.metrics.target_per_day, 0);
        assert_eq!(totals.metrics.achievement_percent, 0);
    }

    // ==========================================================================
    // ST-002: achievement of the aggregate, not the average of achievements
    // ==========================================================================
    #[test]
    fn test_st_002_aggregate_then_compute() {
        let date = make_date("2025-09-15");
        let on_target = make_item("input-a", Section::Input, "10", "300", "0");
        let idle = make_item("input-b", Section::Input, "", "3000", "0");

        assert_eq!(compute_item_metrics(&on_target, date).achievement_percent, 100);
        assert_eq!(compute_item_metrics(&idle, date).achievement_percent, 0);

        // Averaging the item percentages would give 50; the aggregate gives
        // 10 / (3300 / 30) * 100 = 9.09.
        let totals = compute_section_totals(&[on_target, idle], Section::Input, date);
        assert_eq!(totals.metrics.achievement_percent, 9);
    }

    // ==========================================================================
    // ST-003: sums are per-field sums of the member items
    // ==========================================================================
    #[test]
    fn test_st_003_sums_members_per_field() {
        let items = vec![
            make_item("input-solid-cont", Section::Input, "40000", "2000000", "1050000"),
            make_item("input-solid-conv", Section::Input, "9000", "289000", "156000"),
            make_item("input-print", Section::Input, "not yet", "1303000", "687000"),
        ];

        let totals = compute_section_totals(&items, Section::Input, make_date("2025-09-15"));
        assert_eq!(totals.ftd_sum, 49000); // invalid entry sums as zero
        assert_eq!(totals.monthly_target_sum, 3592000);
        assert_eq!(totals.metrics.mtd, 1942000); // 1893000 + 49000
    }

    // ==========================================================================
    // ST-004: membership follows the section tag, not id naming
    // ==========================================================================
    #[test]
    fn test_st_004_membership_follows_tag_not_id() {
        let items = vec![
            make_item("input-solid-cont", Section::Input, "100", "3000", "0"),
            // id says "input" but the tag says BSR; it must not be counted.
            make_item("input-reclassified", Section::Bsr, "999", "9000", "0"),
        ];

        let totals = compute_section_totals(&items, Section::Input, make_date("2025-09-15"));
        assert_eq!(totals.ftd_sum, 100);
        assert_eq!(totals.monthly_target_sum, 3000);
    }

    #[test]
    fn test_empty_section_is_all_zeros() {
        let items = vec![make_item("input-print", Section::Input, "500", "1303000", "687000")];

        let totals = compute_section_totals(&items, Section::Bsr, make_date("2025-09-15"));
        assert_eq!(totals.section, Section::Bsr);
        assert_eq!(totals.ftd_sum, 0);
        assert_eq!(totals.monthly_target_sum, 0);
        assert_eq!(totals.metrics.mtd, 0);
        assert_eq!(totals.metrics.achievement_percent, 0);
    }

    #[test]
    fn test_fractional_sums_round_half_up() {
        let items = vec![
            make_item("input-a", Section::Input, "10.25", "0", "0"),
            make_item("input-b", Section::Input, "10.35", "0", "0"),
        ];

        let totals = compute_section_totals(&items, Section::Input, make_date("2025-09-15"));
        assert_eq!(totals.ftd_sum, 21); // 20.6 rounds up
    }

    #[test]
    fn test_section_metrics_match_single_equivalent_item() {
        // Two members behave exactly like one item carrying their sums.
        let date = make_date("2025-09-15");
        let items = vec![
            make_item("input-a", Section::Input, "40000", "2000000", "1050000"),
            make_item("input-b", Section::Input, "9000", "289000", "156000"),
        ];
        let combined = make_item("input-combined", Section::Input, "49000", "2289000", "1206000");

        let totals = compute_section_totals(&items, Section::Input, date);
        assert_eq!(totals.metrics, compute_item_metrics(&combined, date));
    }

    #[test]
    fn test_member_sums_saturate_at_numeric_bounds() {
        let max = Decimal::MAX.to_string();
        let items = vec![
            make_item("input-a", Section::Input, &max, &max, &max),
            make_item("input-b", Section::Input, &max, &max, &max),
        ];

        let totals = compute_section_totals(&items, Section::Input, make_date("2025-09-15"));
        assert_eq!(totals.ftd_sum, i64::MAX);
        assert_eq!(totals.monthly_target_sum, i64::MAX);
        assert_eq!(totals.metrics.mtd, i64::MAX);
    }
}
