//! Achievement banding thresholds and classification.
//!
//! The bands drive how the presentation layer colours a row; the thresholds
//! themselves are part of the engine's contract.

use crate::models::AchievementBand;

/// Lower bound (inclusive) of the at-risk band, in percent.
pub const AT_RISK_THRESHOLD: i64 = 80;

/// Lower bound (inclusive) of the on-target band, in percent.
pub const ON_TARGET_THRESHOLD: i64 = 100;

/// Classifies an achievement percentage into its band.
///
/// Boundaries are inclusive on the lower bound of each band: 100 is on
/// target and 80 is at risk.
///
/// # Example
///
/// ```
/// use report_engine::metrics::achievement_band;
/// use report_engine::models::AchievementBand;
///
/// assert_eq!(achievement_band(112), AchievementBand::OnTarget);
/// assert_eq!(achievement_band(80), AchievementBand::AtRisk);
/// assert_eq!(achievement_band(60), AchievementBand::Behind);
/// ```
pub fn achievement_band(achievement_percent: i64) -> AchievementBand {
    if achievement_percent >= ON_TARGET_THRESHOLD {
        AchievementBand::OnTarget
    } else if achievement_percent >= AT_RISK_THRESHOLD {
        AchievementBand::AtRisk
    } else {
        AchievementBand::Behind
    }
}
