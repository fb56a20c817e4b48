//! OpenAPI schema wrappers for error payloads.
//!
//! These mirror the JSON envelopes produced by the `ResponseError`
//! implementation without coupling the domain error type to utoipa.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic error envelope: `{"error": message}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorSchema {
    /// Human-readable description of the failure.
    #[schema(example = "Event not found")]
    pub error: String,
}

/// Validation error envelope: `{"errors": [...]}` listing every violation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorSchema {
    /// One entry per violated rule.
    #[schema(example = json!(["title is required", "capacity must be an integer between 1 and 1000"]))]
    pub errors: Vec<String>,
}
