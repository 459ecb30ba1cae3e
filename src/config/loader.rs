//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    DefaultTargets, DepartmentConfig, DepartmentsConfig, ReportConfig, ReportMetadata,
};

/// Loads and provides access to report configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the report metadata and the department
/// roster.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/wpd-hss/
/// ├── report.yaml       # Report metadata
/// └── departments.yaml  # Department roster with default targets
/// ```
///
/// # Example
///
/// ```no_run
/// use report_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/wpd-hss").unwrap();
///
/// // Get a department
/// let department = loader.get_department("input-print").unwrap();
/// println!("Department: {}", department.name);
///
/// // Walk the roster in report order
/// for department in loader.departments() {
///     println!("{} ({})", department.name, department.section);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/wpd-hss")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The roster contains duplicate ids or negative default targets
    ///
    /// # Example
    ///
    /// ```no_run
    /// use report_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/wpd-hss")?;
    /// # Ok::<(), report_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load report.yaml
        let report_path = path.join("report.yaml");
        let metadata = Self::load_yaml::<ReportMetadata>(&report_path)?;

        // Load departments.yaml
        let departments_path = path.join("departments.yaml");
        let departments_config = Self::load_yaml::<DepartmentsConfig>(&departments_path)?;

        Self::validate_roster(&departments_path, &departments_config.departments)?;

        let config = ReportConfig::new(metadata, departments_config.departments);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the loaded roster.
    ///
    /// Department ids must be unique across the roster, and default
    /// monthly targets must not be negative.
    fn validate_roster(path: &Path, departments: &[DepartmentConfig]) -> EngineResult<()> {
        let path_str = path.display().to_string();

        let mut seen: Vec<&str> = Vec::with_capacity(departments.len());
        for department in departments {
            if seen.contains(&department.id.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: format!("duplicate department id: {}", department.id),
                });
            }
            if department.monthly_target.is_sign_negative() {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: format!(
                        "negative default target for department: {}",
                        department.id
                    ),
                });
            }
            seen.push(&department.id);
        }

        Ok(())
    }

    /// Returns the underlying report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the report metadata.
    pub fn report(&self) -> &ReportMetadata {
        self.config.report()
    }

    /// Returns the department roster in report order.
    pub fn departments(&self) -> &[DepartmentConfig] {
        self.config.departments()
    }

    /// Gets a department by its id.
    ///
    /// # Arguments
    ///
    /// * `id` - The department id (e.g., "input-print")
    ///
    /// # Returns
    ///
    /// Returns the department if found, or `DepartmentNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use report_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/wpd-hss")?;
    /// let department = loader.get_department("input-print")?;
    /// println!("Department: {}", department.name);
    /// # Ok::<(), report_engine::error::EngineError>(())
    /// ```
    pub fn get_department(&self, id: &str) -> EngineResult<&DepartmentConfig> {
        self.config
            .department(id)
            .ok_or_else(|| EngineError::DepartmentNotFound { id: id.to_string() })
    }

    /// Builds the default-target view of the roster used by the target
    /// resolver.
    pub fn default_targets(&self) -> DefaultTargets {
        self.config.default_targets()
    }
}
