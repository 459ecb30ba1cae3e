//! HTTP API module for the report engine.
//!
//! This module provides the REST API endpoints for building daily
//! production report snapshots and managing monthly target overrides.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntryRequest, ReportRequest, SaveTargetRequest};
pub use response::{
    ApiError, DepartmentResponse, DepartmentsResponse, ReportMetadataResponse, SaveTargetResponse,
    TargetsResponse,
};
pub use state::AppState;
