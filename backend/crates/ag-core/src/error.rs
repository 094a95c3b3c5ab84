use crate::ValidationErrors;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },
}

impl From<ValidationErrors> for CoreError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
