use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use std::fmt;

/// Custom error types for business logic validation and application errors
#[derive(Debug, Clone)]
pub enum BusinessError {
    /// Validation errors for user input (400 Bad Request)
    ValidationError { field: String, message: String },
    /// Resource not found (404 Not Found)
    NotFound { resource: String, id: String },
    /// Duplicate resource (409 Conflict)
    Duplicate { resource: String, field: String },
    /// External service errors (502 Bad Gateway)
    ExternalServiceError { service: String, message: String },
    /// Feature disabled by configuration (503 Service Unavailable)
    NotConfigured { service: String },
    /// Generic application error (500 Internal Server Error)
    InternalError { message: String },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::ValidationError { field, message } => {
                write!(f, "Validation error in field '{field}': {message}")
            }
            BusinessError::NotFound { resource, id } => {
                write!(f, "{resource} with id '{id}' not found")
            }
            BusinessError::Duplicate { resource, field } => {
                write!(f, "{resource} with this {field} already exists")
            }
            BusinessError::ExternalServiceError { service, message } => {
                write!(f, "External service '{service}' error: {message}")
            }
            BusinessError::NotConfigured { service } => {
                write!(f, "Service '{service}' is not configured")
            }
            BusinessError::InternalError { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for BusinessError {}

/// Convert BusinessError to HTTP responses
impl IntoResponse for BusinessError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            BusinessError::ValidationError { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed for field '{field}': {message}"),
            ),
            BusinessError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "RESOURCE_NOT_FOUND",
                format!("{resource} with id '{id}' not found"),
            ),
            BusinessError::Duplicate { resource, field } => (
                StatusCode::CONFLICT,
                "DUPLICATE_RESOURCE",
                format!("{resource} with this {field} already exists"),
            ),
            BusinessError::ExternalServiceError { service, message } => (
                StatusCode::BAD_GATEWAY,
                "EXTERNAL_SERVICE_ERROR",
                format!("External service '{service}' error: {message}"),
            ),
            BusinessError::NotConfigured { service } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_NOT_CONFIGURED",
                format!("Service '{service}' is not configured"),
            ),
            BusinessError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                format!("Internal error: {message}"),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
                "type": format!("{:?}", self).split('{').next().unwrap_or("Unknown").trim()
            }
        }));

        (status, body).into_response()
    }
}

/// Map DbErr to appropriate HTTP responses with resource context
pub struct ErrorMapper;

impl ErrorMapper {
    pub fn map_db_error(err: DbErr, context: &str) -> BusinessError {
        match err {
            DbErr::RecordNotFound(msg) => {
                let resource = context.replace('_', " ");
                let id = Self::extract_id_from_message(&msg);
                BusinessError::NotFound { resource, id }
            }
            DbErr::Conn(conn_err) => BusinessError::ExternalServiceError {
                service: "database".to_string(),
                message: conn_err.to_string(),
            },
            DbErr::Exec(exec_err) => {
                // Check if it's a constraint violation
                let err_msg = exec_err.to_string();
                if err_msg.contains("UNIQUE constraint") || err_msg.contains("duplicate key") {
                    BusinessError::Duplicate {
                        resource: context.replace('_', " "),
                        field: Self::extract_field_from_constraint(&err_msg),
                    }
                } else {
                    BusinessError::InternalError { message: err_msg }
                }
            }
            _ => BusinessError::InternalError {
                message: err.to_string(),
            },
        }
    }

    /// Helper to extract ID from error messages
    fn extract_id_from_message(msg: &str) -> String {
        if let Some(start_pos) = msg.find(" id '") {
            let after_id = &msg[start_pos + 5..];
            if let Some(end_pos) = after_id.find('\'') {
                return after_id[..end_pos].to_string();
            }
        }

        // Fallback: look for a UUID-shaped word, handling quotes
        msg.split_whitespace()
            .find_map(|word| {
                let cleaned = word.trim_matches('\'').trim_matches('"');
                if cleaned.len() == 36 && cleaned.matches('-').count() == 4 {
                    Some(cleaned.to_string())
                } else {
                    None
                }
            })
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Helper to extract field from constraint violation
    fn extract_field_from_constraint(msg: &str) -> String {
        if msg.contains("title") {
            "title".to_string()
        } else if msg.contains("type_key") {
            "type_key".to_string()
        } else if msg.contains("email") {
            "email".to_string()
        } else {
            "field".to_string()
        }
    }
}

/// Convenience macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($field:expr, $message:expr) => {
        $crate::common::errors::BusinessError::ValidationError {
            field: $field.to_string(),
            message: $message.to_string(),
        }
    };
}

/// Extension trait to add business error conversion to DbErr
pub trait DbErrorExt {
    fn to_business_error(self, context: &str) -> BusinessError;
}

impl DbErrorExt for DbErr {
    fn to_business_error(self, context: &str) -> BusinessError {
        ErrorMapper::map_db_error(self, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let err = validation_error!("type_key", "must be provided");
        assert!(matches!(err, BusinessError::ValidationError { .. }));
        assert!(err.to_string().contains("type_key"));
    }

    #[test]
    fn test_error_mapper_not_found() {
        let db_err = DbErr::RecordNotFound(
            "Project with id 'a3bb189e-8bf9-3888-9912-ace4e6543002' not found".to_string(),
        );
        let business_err = ErrorMapper::map_db_error(db_err, "project");

        match business_err {
            BusinessError::NotFound { resource, id } => {
                assert_eq!(resource, "project");
                assert_eq!(id, "a3bb189e-8bf9-3888-9912-ace4e6543002");
            }
            _ => panic!("Expected not found error"),
        }
    }

    #[test]
    fn test_not_configured_display() {
        let err = BusinessError::NotConfigured {
            service: "smtp".to_string(),
        };
        assert_eq!(err.to_string(), "Service 'smtp' is not configured");
    }
}
