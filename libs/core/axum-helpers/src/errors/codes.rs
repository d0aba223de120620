//! Integer error codes attached to log events for monitoring.
//!
//! Error codes never appear in response bodies (those carry a `message`
//! only); they exist so log aggregation can group failures without parsing
//! message strings.

/// Standardized error codes for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Malformed or missing request payload
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,
}

impl ErrorCode {
    /// Integer code for logging and monitoring
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::BadRequest => 1001,
            ErrorCode::NotFound => 1002,
            ErrorCode::Conflict => 1003,
            ErrorCode::JsonExtraction => 1004,
            ErrorCode::DatabaseError => 2001,
            ErrorCode::InternalError => 5001,
            ErrorCode::ServiceUnavailable => 5002,
        }
    }

    /// Machine-readable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Default human-readable message
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "Invalid request",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::Conflict => "Request conflicts with current resource state",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}
