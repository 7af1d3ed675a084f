/// Argument errors raised by the model types and the service errors the
/// control plane reports back.

use std::fmt;
use thiserror::Error;

/// Invalid-argument failures raised synchronously by value objects and enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Duplicated keys ({key}) are provided.")]
    DuplicateKey { key: String },

    #[error("Value cannot be null or empty")]
    EmptyValue,

    #[error("Cannot create enum from {value} value")]
    UnknownValue { value: String },
}

/// The resource referenced by the request does not exist.
///
/// The resource type is not known where the error is raised; the error
/// unmarshaller fills it in from the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundException {
    message: String,
    resource_type: Option<String>,
    request_id: Option<String>,
}

impl NotFoundException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource_type: None,
            request_id: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn set_resource_type(&mut self, resource_type: Option<String>) {
        self.resource_type = resource_type;
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id;
    }
}

/// The client sent more requests per unit of time than allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooManyRequestsException {
    message: String,
    limit_type: Option<String>,
    request_id: Option<String>,
}

impl TooManyRequestsException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            limit_type: None,
            request_id: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn limit_type(&self) -> Option<&str> {
        self.limit_type.as_deref()
    }

    pub fn set_limit_type(&mut self, limit_type: Option<String>) {
        self.limit_type = limit_type;
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn set_request_id(&mut self, request_id: Option<String>) {
        self.request_id = request_id;
    }
}

impl fmt::Display for NotFoundException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource_type {
            Some(resource_type) => write!(f, "{} (resource type: {})", self.message, resource_type),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for NotFoundException {}

impl fmt::Display for TooManyRequestsException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TooManyRequestsException {}

macro_rules! message_exception {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            message: String,
            request_id: Option<String>,
        }

        impl $name {
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                    request_id: None,
                }
            }

            pub fn message(&self) -> &str {
                &self.message
            }

            pub fn request_id(&self) -> Option<&str> {
                self.request_id.as_deref()
            }

            pub fn set_request_id(&mut self, request_id: Option<String>) {
                self.request_id = request_id;
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.message)
            }
        }

        impl std::error::Error for $name {}
    };
}

message_exception!(
    /// The caller lacks permission for the operation.
    AccessDeniedException
);
message_exception!(
    /// One of the request parameters is invalid.
    BadRequestException
);
message_exception!(
    /// The resource already exists or is being modified concurrently.
    ConflictException
);

/// A failure reported by the service in a non-2xx response.
///
/// Terminal for the operation that produced it; nothing at this layer retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("AccessDeniedException: {}", .0.message())]
    AccessDenied(AccessDeniedException),

    #[error("BadRequestException: {}", .0.message())]
    BadRequest(BadRequestException),

    #[error("ConflictException: {}", .0.message())]
    Conflict(ConflictException),

    #[error("NotFoundException: {}", .0.message())]
    NotFound(NotFoundException),

    #[error("TooManyRequestsException: {}", .0.message())]
    TooManyRequests(TooManyRequestsException),

    #[error("{error_code} (HTTP {status_code}): {message}")]
    Unhandled {
        error_code: String,
        status_code: u16,
        message: String,
        request_id: Option<String>,
    },
}

impl ServiceError {
    /// The service error code, e.g. `NotFoundException`.
    pub fn error_code(&self) -> &str {
        match self {
            ServiceError::AccessDenied(_) => "AccessDeniedException",
            ServiceError::BadRequest(_) => "BadRequestException",
            ServiceError::Conflict(_) => "ConflictException",
            ServiceError::NotFound(_) => "NotFoundException",
            ServiceError::TooManyRequests(_) => "TooManyRequestsException",
            ServiceError::Unhandled { error_code, .. } => error_code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::AccessDenied(e) => e.message(),
            ServiceError::BadRequest(e) => e.message(),
            ServiceError::Conflict(e) => e.message(),
            ServiceError::NotFound(e) => e.message(),
            ServiceError::TooManyRequests(e) => e.message(),
            ServiceError::Unhandled { message, .. } => message,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        match self {
            ServiceError::AccessDenied(e) => e.request_id(),
            ServiceError::BadRequest(e) => e.request_id(),
            ServiceError::Conflict(e) => e.request_id(),
            ServiceError::NotFound(e) => e.request_id(),
            ServiceError::TooManyRequests(e) => e.request_id(),
            ServiceError::Unhandled { request_id, .. } => request_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_starts_without_resource_type() {
        let mut error = NotFoundException::new("Invalid API identifier specified");
        assert_eq!(error.message(), "Invalid API identifier specified");
        assert!(error.resource_type().is_none());

        error.set_resource_type(Some("Api".to_string()));
        assert_eq!(error.resource_type(), Some("Api"));
        assert_eq!(error.to_string(), "Invalid API identifier specified (resource type: Api)");
    }

    #[test]
    fn test_service_error_display_names_the_code() {
        let error = ServiceError::NotFound(NotFoundException::new("no such stage"));
        assert_eq!(error.to_string(), "NotFoundException: no such stage");
        assert_eq!(error.error_code(), "NotFoundException");
    }

    #[test]
    fn test_unhandled_error_keeps_code_and_status() {
        let error = ServiceError::Unhandled {
            error_code: "InternalFailure".to_string(),
            status_code: 500,
            message: "boom".to_string(),
            request_id: Some("req-1".to_string()),
        };
        assert_eq!(error.error_code(), "InternalFailure");
        assert_eq!(error.request_id(), Some("req-1"));
        assert_eq!(error.to_string(), "InternalFailure (HTTP 500): boom");
    }

    #[test]
    fn test_model_error_messages() {
        assert_eq!(ModelError::EmptyValue.to_string(), "Value cannot be null or empty");
        assert_eq!(
            ModelError::UnknownValue { value: "BASIC".to_string() }.to_string(),
            "Cannot create enum from BASIC value"
        );
        assert_eq!(
            ModelError::DuplicateKey { key: "env".to_string() }.to_string(),
            "Duplicated keys (env) are provided."
        );
    }
}
