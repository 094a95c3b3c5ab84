use ag_core::{FieldError, ValidationErrors};

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the client side of the auth flow
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from the server
    #[error("API error {status}: {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        fields: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// Form input rejected before any request was sent
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    Token {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey { key: String, location: ErrorLocation },

    /// Gate evaluation did not settle on an allowed route
    #[error("Navigation to {path} did not settle {location}")]
    Navigation {
        path: String,
        location: ErrorLocation,
    },

    #[error("Failed to locate data directory: {message} {location}")]
    DataDir {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn token(message: impl Into<String>) -> Self {
        ClientError::Token {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::Storage {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn data_dir(message: impl Into<String>) -> Self {
        ClientError::DataDir {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message suitable for showing to the user.
    ///
    /// Field-keyed errors come from local validation or a server
    /// `VALIDATION_ERROR`; everything else is a one-line notification.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Validation { errors, .. } => errors.to_string(),
            ClientError::Api { fields, .. } if !fields.is_empty() => fields
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http { .. } => "Could not reach the server".to_string(),
            _ => "Something went wrong".to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ValidationErrors> for ClientError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ClientError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
