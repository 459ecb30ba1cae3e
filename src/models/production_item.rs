//! Production item model and related types.
//!
//! This module defines the [`ProductionItem`] struct together with the
//! [`Section`] tag and the [`FtdEntry`] wrapper for the raw daily figure.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Named production section a department reports under.
///
/// Section membership is an explicit tag carried by every item; grouping is
/// never inferred from id naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Fabric input lines (dyeing, printing, yarn dyed, RFD/WHT).
    Input,
    /// BSR production lines.
    Bsr,
}

impl Section {
    /// All sections in report order.
    pub const ALL: [Section; 2] = [Section::Input, Section::Bsr];

    /// The label used for the section's totals row.
    ///
    /// # Examples
    ///
    /// ```
    /// use report_engine::models::Section;
    ///
    /// assert_eq!(Section::Input.totals_label(), "Input- Total");
    /// assert_eq!(Section::Bsr.totals_label(), "BSR production- Total");
    /// ```
    pub fn totals_label(&self) -> &'static str {
        match self {
            Section::Input => "Input- Total",
            Section::Bsr => "BSR production- Total",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Input => write!(f, "input"),
            Section::Bsr => write!(f, "bsr"),
        }
    }
}

/// Raw figure-to-date entry for one day.
///
/// The figure is kept as free-form text so that an empty/unset entry stays
/// distinguishable from an explicit "0". Arithmetic always goes through
/// [`FtdEntry::value`], which parses the text and degrades anything invalid,
/// empty, or negative to zero.
///
/// # Example
///
/// ```
/// use report_engine::models::FtdEntry;
/// use rust_decimal::Decimal;
///
/// let entered = FtdEntry::new("40000");
/// assert!(entered.is_entered());
/// assert_eq!(entered.value(), Decimal::from(40000));
///
/// let blank = FtdEntry::default();
/// assert!(!blank.is_entered());
/// assert_eq!(blank.value(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtdEntry(String);

impl FtdEntry {
    /// Wraps a raw figure entry.
    pub fn new(raw: impl Into<String>) -> Self {
        FtdEntry(raw.into())
    }

    /// The raw entered text, unmodified.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Returns true if the operator entered anything (including "0").
    pub fn is_entered(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// The numeric value used for computation.
    ///
    /// Empty, unparsable, and negative entries all evaluate to zero; a parse
    /// failure never propagates.
    pub fn value(&self) -> Decimal {
        self.0
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|v| !v.is_sign_negative())
            .unwrap_or(Decimal::ZERO)
    }
}

impl From<&str> for FtdEntry {
    fn from(raw: &str) -> Self {
        FtdEntry::new(raw)
    }
}

impl From<String> for FtdEntry {
    fn from(raw: String) -> Self {
        FtdEntry::new(raw)
    }
}

impl fmt::Display for FtdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One department/line's daily record.
///
/// # Example
///
/// ```
/// use report_engine::models::{FtdEntry, ProductionItem, Section};
/// use rust_decimal::Decimal;
///
/// let item = ProductionItem {
///     id: "input-print".to_string(),
///     name: "Input-Print".to_string(),
///     section: Section::Input,
///     ftd: FtdEntry::new("40000"),
///     remarks: String::new(),
///     monthly_target: Decimal::from(1303000),
///     previous_mtd: Decimal::from(687000),
/// };
/// assert!(item.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionItem {
    /// Stable department id, unique within the item set; joins the item to
    /// target overrides and to the configured roster.
    pub id: String,
    /// Display label (not used in computation).
    pub name: String,
    /// The section this item reports under.
    pub section: Section,
    /// Today's entered figure, raw.
    #[serde(default)]
    pub ftd: FtdEntry,
    /// Free-text remarks, no computational role.
    #[serde(default)]
    pub remarks: String,
    /// Monthly target effective for the report's month.
    pub monthly_target: Decimal,
    /// Cumulative figure for the month through yesterday.
    pub previous_mtd: Decimal,
}

impl ProductionItem {
    /// Validates that `previous_mtd` and `monthly_target` are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.previous_mtd.is_sign_negative() {
            return Err(EngineError::InvalidItem {
                id: self.id.clone(),
                message: "previous_mtd cannot be negative".to_string(),
            });
        }
        if self.monthly_target.is_sign_negative() {
            return Err(EngineError::InvalidItem {
                id: self.id.clone(),
                message: "monthly_target cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
