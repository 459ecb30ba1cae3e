//! Configuration types for the production report engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the derived views
//! handed to the rest of the engine.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Section;

/// Metadata about the report.
///
/// Contains identifying information about the report this roster feeds,
/// including its code, display name, version, and unit of measure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportMetadata {
    /// The report code (e.g., "WPD-HSS-MIS").
    pub code: String,
    /// The human-readable name of the report.
    pub name: String,
    /// The version or effective date of this configuration.
    pub version: String,
    /// Unit of measure for all quantities (e.g., "Meter").
    pub unit: String,
}

/// One department in the configured roster.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentConfig {
    /// The stable department id used in entries and override tables.
    pub id: String,
    /// The human-readable department name.
    pub name: String,
    /// The section the department reports under.
    pub section: Section,
    /// The built-in default monthly target.
    pub monthly_target: Decimal,
}

/// Departments configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// The roster in report order.
    pub departments: Vec<DepartmentConfig>,
}

/// The built-in default monthly target per department.
///
/// This is the fallback the target resolver uses when no override is
/// stored for a month.
///
/// # Example
///
/// ```
/// use report_engine::config::DefaultTargets;
/// use rust_decimal::Decimal;
///
/// let defaults: DefaultTargets =
///     [("input-print".to_string(), Decimal::from(1303000))].into_iter().collect();
/// assert_eq!(defaults.get("input-print"), Some(Decimal::from(1303000)));
/// assert_eq!(defaults.get("unknown"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTargets {
    targets: HashMap<String, Decimal>,
}

impl DefaultTargets {
    /// The default target for a department, if the department is known.
    pub fn get(&self, department_id: &str) -> Option<Decimal> {
        self.targets.get(department_id).copied()
    }
}

impl FromIterator<(String, Decimal)> for DefaultTargets {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        DefaultTargets {
            targets: iter.into_iter().collect(),
        }
    }
}

/// The complete report configuration loaded from YAML files.
///
/// This struct aggregates the metadata and the department roster loaded
/// from a report configuration directory.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Report metadata.
    metadata: ReportMetadata,
    /// The department roster in report order.
    departments: Vec<DepartmentConfig>,
}

impl ReportConfig {
    /// Creates a new ReportConfig from its component parts.
    pub fn new(metadata: ReportMetadata, departments: Vec<DepartmentConfig>) -> Self {
        Self {
            metadata,
            departments,
        }
    }

    /// Returns the report metadata.
    pub fn report(&self) -> &ReportMetadata {
        &self.metadata
    }

    /// Returns the roster in report order.
    pub fn departments(&self) -> &[DepartmentConfig] {
        &self.departments
    }

    /// Looks up a department by id.
    pub fn department(&self, id: &str) -> Option<&DepartmentConfig> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Builds the resolver's default-target view of the roster.
    pub fn default_targets(&self) -> DefaultTargets {
        self.departments
            .iter()
            .map(|d| (d.id.clone(), d.monthly_target))
            .collect()
    }
}
