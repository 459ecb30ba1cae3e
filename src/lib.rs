//! Production report engine for daily mill MIS reports
//!
//! This crate derives daily production progress metrics (month-to-date totals,
//! per-day targets, running averages, projections, and achievement bands) and
//! resolves monthly target overrides against built-in department defaults.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod targets;
