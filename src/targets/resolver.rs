//! Monthly target resolution against stored overrides.
//!
//! The effective monthly target for a department is resolved in order:
//! 1. A stored override for the requested year and month, when present.
//! 2. The department's built-in default target.
//! 3. Zero, when the department carries no default.
//!
//! All overrides for one year live in a single payload under the key
//! `monthly-targets:{year}`. Saves are read-modify-write against that
//! payload, so sibling departments and months are always preserved.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::DefaultTargets;
use crate::error::EngineResult;

use super::{Month, TargetOverrideTable, TargetStore};

/// Builds the storage key holding all overrides for a year.
///
/// # Example
///
/// ```
/// use report_engine::targets::year_key;
///
/// assert_eq!(year_key(2025), "monthly-targets:2025");
/// ```
pub fn year_key(year: i32) -> String {
    format!("monthly-targets:{}", year)
}

/// Loads the override table for a year from the store.
///
/// A missing payload, an unreadable store, and a damaged payload all read
/// as an empty table, so resolution degrades to the built-in defaults
/// instead of failing the report.
pub fn load_overrides(store: &dyn TargetStore, year: i32) -> TargetOverrideTable {
    match store.get(&year_key(year)) {
        Ok(Some(raw)) => TargetOverrideTable::decode(&raw),
        Ok(None) => TargetOverrideTable::default(),
        Err(e) => {
            warn!(year, error = %e, "failed to read override table, using defaults");
            TargetOverrideTable::default()
        }
    }
}

/// Resolves the effective monthly target from an already-loaded table.
///
/// The table only ever holds positive values, so any hit is usable as-is.
///
/// # Arguments
///
/// * `overrides` - The override table for the year being reported
/// * `defaults` - The built-in default targets from the roster
/// * `department_id` - The department to resolve
/// * `month` - The month being reported
pub fn resolve_from_table(
    overrides: &TargetOverrideTable,
    defaults: &DefaultTargets,
    department_id: &str,
    month: Month,
) -> Decimal {
    overrides
        .get(department_id, month)
        .or_else(|| defaults.get(department_id))
        .unwrap_or(Decimal::ZERO)
}

/// Resolves the effective monthly target for a department.
///
/// Convenience wrapper that loads the year's override table and resolves
/// against it. When resolving many departments for the same year, load the
/// table once with [`load_overrides`] and use [`resolve_from_table`].
///
/// # Example
///
/// ```
/// use report_engine::config::DefaultTargets;
/// use report_engine::targets::{
///     resolve_monthly_target, save_monthly_target, InMemoryTargetStore, Month,
/// };
/// use rust_decimal::Decimal;
///
/// let mut store = InMemoryTargetStore::new();
/// let defaults: DefaultTargets =
///     [("input-print".to_string(), Decimal::from(1303000))].into_iter().collect();
///
/// let september = Month::new(9).unwrap();
/// save_monthly_target(&mut store, "input-print", 2025, september, Some(Decimal::from(500000)))
///     .unwrap();
///
/// // The saved override wins for its month.
/// assert_eq!(
///     resolve_monthly_target(&store, &defaults, "input-print", 2025, september),
///     Decimal::from(500000)
/// );
///
/// // Other months still resolve to the built-in default.
/// let october = Month::new(10).unwrap();
/// assert_eq!(
///     resolve_monthly_target(&store, &defaults, "input-print", 2025, october),
///     Decimal::from(1303000)
/// );
/// ```
pub fn resolve_monthly_target(
    store: &dyn TargetStore,
    defaults: &DefaultTargets,
    department_id: &str,
    year: i32,
    month: Month,
) -> Decimal {
    let overrides = load_overrides(store, year);
    resolve_from_table(&overrides, defaults, department_id, month)
}

/// Saves or clears one department-month override.
///
/// A positive `value` is stored. `None`, zero, and negative values clear
/// the cell, returning that month to the built-in default. The year's
/// payload is rewritten in full, preserving every other cell.
///
/// # Errors
///
/// Returns an error only when the store rejects the write. An unreadable
/// existing payload is not an error; the save starts from an empty table
/// and replaces it.
pub fn save_monthly_target(
    store: &mut dyn TargetStore,
    department_id: &str,
    year: i32,
    month: Month,
    value: Option<Decimal>,
) -> EngineResult<()> {
    let mut overrides = load_overrides(store, year);

    match value {
        Some(v) if v > Decimal::ZERO => overrides.set(department_id, month, v),
        _ => overrides.clear(department_id, month),
    }

    store.put(&year_key(year), overrides.encode())
}

/// Parses raw override input into a storable value.
///
/// Returns `Some` only for inputs that parse as a positive number. Empty,
/// unparsable, zero, and negative inputs all read as "clear the override".
///
/// # Example
///
/// ```
/// use report_engine::targets::parse_override_input;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_override_input("500000"), Some(Decimal::from(500000)));
/// assert_eq!(parse_override_input(""), None);
/// assert_eq!(parse_override_input("0"), None);
/// assert_eq!(parse_override_input("n/a"), None);
/// ```
pub fn parse_override_input(raw: &str) -> Option<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|v| *v > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::super::InMemoryTargetStore;
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn month(number: u8) -> Month {
        Month::new(number).unwrap()
    }

    fn defaults() -> DefaultTargets {
        [
            ("input-print".to_string(), dec("1303000")),
            ("input-solid-cont".to_string(), dec("2000000")),
            ("bsr-solid".to_string(), Decimal::ZERO),
        ]
        .into_iter()
        .collect()
    }

    /// A store whose backend is unreachable.
    struct FailingStore;

    impl TargetStore for FailingStore {
        fn get(&self, _key: &str) -> EngineResult<Option<String>> {
            Err(EngineError::StoreError {
                message: "backend offline".to_string(),
            })
        }

        fn put(&mut self, _key: &str, _value: String) -> EngineResult<()> {
            Err(EngineError::StoreError {
                message: "backend offline".to_string(),
            })
        }
    }

    // ==========================================================================
    // RSV-001: a saved positive override resolves for its month
    // ==========================================================================
    #[test]
    fn test_rsv_001_saved_override_resolves() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("500000"));
    }

    // ==========================================================================
    // RSV-002: months without an override resolve to the built-in default
    // ==========================================================================
    #[test]
    fn test_rsv_002_other_months_use_default() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(10));
        assert_eq!(resolved, dec("1303000"));
    }

    // ==========================================================================
    // RSV-003: zero, negative, and missing saves clear the override
    // ==========================================================================
    #[test]
    fn test_rsv_003_save_zero_clears() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();
        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(Decimal::ZERO))
            .unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    #[test]
    fn test_rsv_003_save_none_clears() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();
        save_monthly_target(&mut store, "input-print", 2025, month(9), None).unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    #[test]
    fn test_rsv_003_save_negative_clears() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();
        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("-1")))
            .unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    // ==========================================================================
    // RSV-004: a damaged payload degrades to the built-in defaults
    // ==========================================================================
    #[test]
    fn test_rsv_004_corrupt_payload_uses_defaults() {
        let mut store = InMemoryTargetStore::new();
        store.put(&year_key(2025), "{not json".to_string()).unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    #[test]
    fn test_rsv_004_unreadable_store_uses_defaults() {
        let store = FailingStore;

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2025, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    // ==========================================================================
    // RSV-005: saves preserve sibling cells in the year payload
    // ==========================================================================
    #[test]
    fn test_rsv_005_saves_preserve_siblings() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();
        save_monthly_target(&mut store, "input-print", 2025, month(10), Some(dec("600000")))
            .unwrap();
        save_monthly_target(&mut store, "bsr-solid", 2025, month(9), Some(dec("40000")))
            .unwrap();

        let d = defaults();
        assert_eq!(
            resolve_monthly_target(&store, &d, "input-print", 2025, month(9)),
            dec("500000")
        );
        assert_eq!(
            resolve_monthly_target(&store, &d, "input-print", 2025, month(10)),
            dec("600000")
        );
        assert_eq!(
            resolve_monthly_target(&store, &d, "bsr-solid", 2025, month(9)),
            dec("40000")
        );
    }

    #[test]
    fn test_rsv_005_clear_preserves_siblings() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();
        save_monthly_target(&mut store, "bsr-solid", 2025, month(9), Some(dec("40000")))
            .unwrap();
        save_monthly_target(&mut store, "input-print", 2025, month(9), None).unwrap();

        let d = defaults();
        assert_eq!(
            resolve_monthly_target(&store, &d, "input-print", 2025, month(9)),
            dec("1303000")
        );
        assert_eq!(
            resolve_monthly_target(&store, &d, "bsr-solid", 2025, month(9)),
            dec("40000")
        );
    }

    // ==========================================================================
    // RSV-006: override tables are scoped per year
    // ==========================================================================
    #[test]
    fn test_rsv_006_years_are_independent() {
        let mut store = InMemoryTargetStore::new();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();

        let resolved = resolve_monthly_target(&store, &defaults(), "input-print", 2026, month(9));
        assert_eq!(resolved, dec("1303000"));
    }

    #[test]
    fn test_save_over_corrupt_payload_starts_fresh() {
        let mut store = InMemoryTargetStore::new();
        store.put(&year_key(2025), "[1,2,3]".to_string()).unwrap();

        save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")))
            .unwrap();

        let raw = store.get(&year_key(2025)).unwrap().unwrap();
        let table = TargetOverrideTable::decode(&raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("input-print", month(9)), Some(dec("500000")));
    }

    #[test]
    fn test_save_propagates_write_failure() {
        let mut store = FailingStore;

        let result =
            save_monthly_target(&mut store, "input-print", 2025, month(9), Some(dec("500000")));
        assert!(matches!(result, Err(EngineError::StoreError { .. })));
    }

    #[test]
    fn test_resolve_unknown_department_is_zero() {
        let store = InMemoryTargetStore::new();

        let resolved = resolve_monthly_target(&store, &defaults(), "weaving", 2025, month(9));
        assert_eq!(resolved, Decimal::ZERO);
    }

    #[test]
    fn test_resolve_department_with_zero_default() {
        let store = InMemoryTargetStore::new();

        let resolved = resolve_monthly_target(&store, &defaults(), "bsr-solid", 2025, month(9));
        assert_eq!(resolved, Decimal::ZERO);
    }

    #[test]
    fn test_parse_override_input() {
        assert_eq!(parse_override_input("500000"), Some(dec("500000")));
        assert_eq!(parse_override_input(" 250000.5 "), Some(dec("250000.5")));
        assert_eq!(parse_override_input(""), None);
        assert_eq!(parse_override_input("   "), None);
        assert_eq!(parse_override_input("abc"), None);
        assert_eq!(parse_override_input("0"), None);
        assert_eq!(parse_override_input("-500000"), None);
    }
}
