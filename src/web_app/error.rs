// web_app/error.rs - Error types shared by the gateway, forms and config
//
// Two failures reach the user: a fetch failure (banner naming the service)
// and a submit failure (message inside the open form). Both are built from
// ApiError; form-level problems live in FormError.

use thiserror::Error;

/// Failure of a single request to one of the resource services
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (service down, CORS, DNS...)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-2xx status
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    /// The body could not be decoded as the expected JSON
    #[error("invalid response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// HTTP status when the service did answer
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error shown in the single error slot of an add-record form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    /// The submission callback reported a failure; `noun` is "client" or "car"
    #[error("Failed to add {noun}")]
    SubmitFailed { noun: &'static str },
}

/// Invalid service configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL for {service}: {value} ({reason})")]
    InvalidUrl {
        service: &'static str,
        value: String,
        reason: String,
    },
}
