//! Core data models for the production report engine.
//!
//! This module contains all the domain models used throughout the engine.

mod metrics;
mod production_item;
mod report;

pub use metrics::{AchievementBand, DerivedMetrics, SectionTotals};
pub use production_item::{FtdEntry, ProductionItem, Section};
pub use report::{ItemReport, ReportSnapshot, SectionReport};
