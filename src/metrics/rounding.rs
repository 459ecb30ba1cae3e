//! Shared rounding policy for derived metrics.
//!
//! Every derived figure in a report is rounded to a whole unit with the same
//! rule, implemented once here so the per-item and per-section paths cannot
//! drift apart.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a derived value half-up to the nearest whole unit.
///
/// Midpoints round away from zero, which for the non-negative quantities in
/// this domain is exactly round-half-up. Each derived field is rounded from
/// its own unrounded real value; callers must not feed already-rounded
/// intermediates back in. Values outside the `i64` range saturate.
///
/// # Example
///
/// ```
/// use report_engine::metrics::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("66666.6666").unwrap()), 66667);
/// assert_eq!(round_half_up(Decimal::from_str("2.5").unwrap()), 3);
/// assert_eq!(round_half_up(Decimal::from_str("2.4").unwrap()), 2);
/// ```
pub fn round_half_up(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
