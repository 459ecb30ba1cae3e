//! Configuration loading and management for the report engine.
//!
//! This module provides functionality to load report configurations from
//! YAML files, including report metadata and the department roster with
//! built-in default targets.
//!
//! # Example
//!
//! ```no_run
//! use report_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/wpd-hss").unwrap();
//! println!("Loaded report: {}", config.report().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultTargets, DepartmentConfig, DepartmentsConfig, ReportConfig, ReportMetadata};
