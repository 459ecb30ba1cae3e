//! Response types for the report engine API.
//!
//! This module defines the success response structures for the roster
//! and target endpoints, plus the error response structures and error
//! handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DepartmentConfig, ReportMetadata};
use crate::error::EngineError;
use crate::models::Section;
use crate::targets::{Month, TargetOverrideTable};

/// Response body for the `GET /departments` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    /// Report metadata for display.
    pub report: ReportMetadataResponse,
    /// The roster in report order.
    pub departments: Vec<DepartmentResponse>,
}

/// Report metadata in a roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadataResponse {
    /// The report code.
    pub code: String,
    /// The human-readable report name.
    pub name: String,
    /// The version of the loaded configuration.
    pub version: String,
    /// Unit of measure for all quantities.
    pub unit: String,
}

/// One department in a roster response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentResponse {
    /// The stable department id.
    pub id: String,
    /// The human-readable department name.
    pub name: String,
    /// The section the department reports under.
    pub section: Section,
    /// The built-in default monthly target.
    pub monthly_target: Decimal,
}

impl From<&ReportMetadata> for ReportMetadataResponse {
    fn from(metadata: &ReportMetadata) -> Self {
        Self {
            code: metadata.code.clone(),
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            unit: metadata.unit.clone(),
        }
    }
}

impl From<&DepartmentConfig> for DepartmentResponse {
    fn from(department: &DepartmentConfig) -> Self {
        Self {
            id: department.id.clone(),
            name: department.name.clone(),
            section: department.section,
            monthly_target: department.monthly_target,
        }
    }
}

/// Response body for the `GET /targets/:year` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TargetsResponse {
    /// The year the table covers.
    pub year: i32,
    /// The stored overrides, tolerantly decoded.
    pub overrides: TargetOverrideTable,
}

/// Response body for the `PUT /targets/:year/:department_id/:month`
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTargetResponse {
    /// The department the write applied to.
    pub department_id: String,
    /// The year the write applied to.
    pub year: i32,
    /// The month the write applied to.
    pub month: Month,
    /// The override now stored, or `None` when the write cleared it.
    pub override_value: Option<Decimal>,
    /// The target that now resolves for this department and month.
    pub effective_target: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a department not found error response.
    pub fn department_not_found(id: &str) -> Self {
        Self::with_details(
            "DEPARTMENT_NOT_FOUND",
            format!("Department not found: {}", id),
            format!("The department id '{}' is not in the configured roster", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an out-of-range month error response.
    pub fn invalid_month(raw: &str) -> Self {
        Self::with_details(
            "INVALID_MONTH",
            format!("Invalid month: {}", raw),
            "The month must be a number between 1 and 12",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::DepartmentNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::department_not_found(&id),
            },
            EngineError::InvalidItem { id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ITEM",
                    format!("Invalid item '{}': {}", id, message),
                    "The entry data contains invalid information",
                ),
            },
            EngineError::InvalidDate { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE", message),
            },
            EngineError::StoreError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Target store operation failed",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_department_not_found_error() {
        let error = ApiError::department_not_found("weaving");
        assert_eq!(error.code, "DEPARTMENT_NOT_FOUND");
        assert!(error.message.contains("weaving"));
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let engine_error = EngineError::DepartmentNotFound {
            id: "weaving".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "DEPARTMENT_NOT_FOUND");
    }

    #[test]
    fn test_store_error_maps_to_500() {
        let engine_error = EngineError::StoreError {
            message: "backend offline".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_ERROR");
    }

    #[test]
    fn test_department_response_from_config() {
        let department = DepartmentConfig {
            id: "input-print".to_string(),
            name: "Input-Print".to_string(),
            section: Section::Input,
            monthly_target: Decimal::from(1303000),
        };

        let response: DepartmentResponse = (&department).into();
        assert_eq!(response.id, "input-print");
        assert_eq!(response.section, Section::Input);
        assert_eq!(response.monthly_target, Decimal::from(1303000));
    }
}
