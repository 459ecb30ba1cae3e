//! Derived metric models for the production report engine.
//!
//! This module contains the [`DerivedMetrics`] and [`SectionTotals`] shapes
//! produced by the metrics engine, and the [`AchievementBand`] classification
//! consumed by presentation. All values here are purely computed and never
//! stored; they are re-derived on every relevant input change.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Section;

/// Progress metrics derived for one item or one section aggregate.
///
/// Every field is rounded half-up to a whole unit independently of the
/// others, so `mtd` is not required to equal `previous_mtd + ftd` once those
/// inputs are rounded elsewhere.
///
/// # Example
///
/// ```
/// use report_engine::models::DerivedMetrics;
///
/// let metrics = DerivedMetrics {
///     mtd: 1090000,
///     target_per_day: 66667,
///     running_avg_per_day: 72667,
///     projected_monthly: 2180000,
///     achievement_percent: 60,
/// };
/// assert_eq!(metrics.mtd, 1090000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Month-to-date figure: previous MTD plus today's entry.
    pub mtd: i64,
    /// Monthly target spread evenly over the days of the report month.
    pub target_per_day: i64,
    /// MTD divided by the elapsed days of the month.
    pub running_avg_per_day: i64,
    /// Running average extrapolated across the full month.
    pub projected_monthly: i64,
    /// Today's figure as a percentage of the per-day target; 0 when no
    /// target is configured.
    pub achievement_percent: i64,
}

/// Aggregate result for one section: the summed inputs plus metrics
/// recomputed from those sums.
///
/// The metrics are the achievement of the aggregate, not an average of the
/// member items' metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTotals {
    /// The section the totals cover.
    pub section: Section,
    /// Sum of the member items' entered figures.
    pub ftd_sum: i64,
    /// Sum of the member items' monthly targets.
    pub monthly_target_sum: i64,
    /// Metrics recomputed from the summed quantities.
    pub metrics: DerivedMetrics,
}

/// Classification of an achievement percentage against the day's target.
///
/// Band boundaries are inclusive on the lower bound: 100 and above is on
/// target, 80 up to but excluding 100 is at risk, everything below 80 is
/// behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementBand {
    /// At or above the day's target (>= 100%).
    OnTarget,
    /// Below target but within reach (80% to 99%).
    AtRisk,
    /// Well below target (< 80%).
    Behind,
}

impl fmt::Display for AchievementBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AchievementBand::OnTarget => write!(f, "on target"),
            AchievementBand::AtRisk => write!(f, "at risk"),
            AchievementBand::Behind => write!(f, "behind"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> DerivedMetrics {
        DerivedMetrics {
            mtd: 1090000,
            target_per_day: 66667,
            running_avg_per_day: 72667,
            projected_monthly: 2180000,
            achievement_percent: 60,
        }
    }

    #[test]
    fn test_derived_metrics_serialization() {
        let json = serde_json::to_string(&sample_metrics()).unwrap();
        assert!(json.contains("\"mtd\":1090000"));
        assert!(json.contains("\"target_per_day\":66667"));
        assert!(json.contains("\"running_avg_per_day\":72667"));
        assert!(json.contains("\"projected_monthly\":2180000"));
        assert!(json.contains("\"achievement_percent\":60"));
    }

    #[test]
    fn test_derived_metrics_deserialization() {
        let json = r#"{
            "mtd": 156000,
            "target_per_day": 9633,
            "running_avg_per_day": 10400,
            "projected_monthly": 312000,
            "achievement_percent": 0
        }"#;

        let metrics: DerivedMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.mtd, 156000);
        assert_eq!(metrics.achievement_percent, 0);
    }

    #[test]
    fn test_section_totals_serialization() {
        let totals = SectionTotals {
            section: Section::Input,
            ftd_sum: 40000,
            monthly_target_sum: 4000000,
            metrics: sample_metrics(),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"section\":\"input\""));
        assert!(json.contains("\"ftd_sum\":40000"));
        assert!(json.contains("\"monthly_target_sum\":4000000"));
        assert!(json.contains("\"metrics\":{"));
    }

    #[test]
    fn test_achievement_band_serialization() {
        assert_eq!(
            serde_json::to_string(&AchievementBand::OnTarget).unwrap(),
            "\"on_target\""
        );
        assert_eq!(
            serde_json::to_string(&AchievementBand::AtRisk).unwrap(),
            "\"at_risk\""
        );
        assert_eq!(
            serde_json::to_string(&AchievementBand::Behind).unwrap(),
            "\"behind\""
        );
    }

    #[test]
    fn test_achievement_band_display() {
        assert_eq!(AchievementBand::OnTarget.to_string(), "on target");
        assert_eq!(AchievementBand::AtRisk.to_string(), "at risk");
        assert_eq!(AchievementBand::Behind.to_string(), "behind");
    }
}
