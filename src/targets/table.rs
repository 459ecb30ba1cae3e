//! The year-scoped monthly target override table and its storage codec.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::Month;

/// Overrides of the built-in monthly targets for one year.
///
/// Maps department id to a map of [`Month`] to a positive target value. A
/// cell is either "overridden" (a positive value is stored) or "default"
/// (absent); zero and negative values are never stored.
///
/// The table is persisted as JSON text. Decoding is deliberately tolerant:
/// whatever does not match the expected structure is dropped rather than
/// surfaced as an error, so a damaged payload degrades to the built-in
/// defaults instead of failing a report.
///
/// # Example
///
/// ```
/// use report_engine::targets::{Month, TargetOverrideTable};
/// use rust_decimal::Decimal;
///
/// let mut table = TargetOverrideTable::default();
/// let september = Month::new(9).unwrap();
/// table.set("input-print", september, Decimal::from(500000));
///
/// assert_eq!(table.get("input-print", september), Some(Decimal::from(500000)));
/// assert_eq!(TargetOverrideTable::decode(&table.encode()), table);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetOverrideTable {
    overrides: BTreeMap<String, BTreeMap<Month, Decimal>>,
}

impl TargetOverrideTable {
    /// Decodes a stored payload, never failing.
    ///
    /// Structural mismatches collapse to an empty table; entry-level
    /// problems (a month key outside 1-12, a non-numeric or non-positive
    /// value, a department mapped to a non-object) drop only the offending
    /// entries. Values are accepted as JSON numbers or numeric strings.
    pub fn decode(raw: &str) -> TargetOverrideTable {
        let root = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!("stored override payload is not an object; treating as empty");
                return TargetOverrideTable::default();
            }
            Err(_) => {
                warn!("stored override payload is not valid JSON; treating as empty");
                return TargetOverrideTable::default();
            }
        };

        let mut table = TargetOverrideTable::default();
        for (department_id, months) in root {
            let Value::Object(months) = months else {
                continue;
            };
            for (month_key, value) in months {
                let Some(month) = month_key.parse::<u8>().ok().and_then(Month::new) else {
                    continue;
                };
                let Some(value) = decode_value(&value) else {
                    continue;
                };
                if value > Decimal::ZERO {
                    table.set(&department_id, month, value);
                }
            }
        }
        table
    }

    /// Encodes the table to its canonical JSON form.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("override table serializes to JSON")
    }

    /// The override stored for a department and month, if any.
    pub fn get(&self, department_id: &str, month: Month) -> Option<Decimal> {
        self.overrides
            .get(department_id)
            .and_then(|months| months.get(&month))
            .copied()
    }

    /// Stores an override for a department and month.
    pub fn set(&mut self, department_id: &str, month: Month, value: Decimal) {
        self.overrides
            .entry(department_id.to_string())
            .or_default()
            .insert(month, value);
    }

    /// Removes any override for a department and month.
    ///
    /// Clearing is an explicit delete; a cleared cell reads as "default",
    /// never as a stored zero.
    pub fn clear(&mut self, department_id: &str, month: Month) {
        if let Some(months) = self.overrides.get_mut(department_id) {
            months.remove(&month);
            if months.is_empty() {
                self.overrides.remove(department_id);
            }
        }
    }

    /// The number of stored override cells across all departments.
    pub fn len(&self) -> usize {
        self.overrides.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no overrides are stored.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Reads a stored cell value as a decimal, accepting numbers and numeric
/// strings.
fn decode_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Some(Decimal::from(integer))
            } else if let Some(integer) = number.as_u64() {
                Some(Decimal::from(integer))
            } else {
                number.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(text) => text.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}
