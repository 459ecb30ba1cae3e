//! Calendar helpers for report-month arithmetic.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in the month containing `date`.
///
/// Computed from the last day of the month (the day before the first day of
/// the following month), so variable month lengths and leap years come out
/// correctly. Defined for every representable `NaiveDate`.
///
/// # Example
///
/// ```
/// use report_engine::metrics::days_in_month;
/// use chrono::NaiveDate;
///
/// let september = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
/// assert_eq!(days_in_month(september), 30);
///
/// let leap_february = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// assert_eq!(days_in_month(leap_february), 29);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    // December of the last representable year has no successor month to
    // step back from; every December is 31 days long.
    match first_of_next_month.and_then(|first| first.pred_opt()) {
        Some(last_of_month) => last_of_month.day(),
        None => 31,
    }
}
