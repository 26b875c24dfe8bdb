//! Typed errors surfaced to the central error handler

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single invalid field in a config record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the field as it appears in the JSON file (e.g. `tailwind.css`)
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Config failed validation; carries every offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid configuration ({} field error(s))", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

/// Errors raised by the init workflow itself
#[derive(Debug, Error)]
pub enum InitError {
    #[error("The path {} does not exist. Please try again.", .0.display())]
    MissingDirectory(PathBuf),

    #[error("The path {} is not a directory. Please try again.", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to install dependencies with {manager}: {message}")]
    Install { manager: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_message() {
        let err = InitError::MissingDirectory(PathBuf::from("/no/such/dir"));
        assert_eq!(
            err.to_string(),
            "The path /no/such/dir does not exist. Please try again."
        );
    }

    #[test]
    fn test_not_a_directory_message() {
        let err = InitError::NotADirectory(PathBuf::from("/srv/app/package.json"));
        assert_eq!(
            err.to_string(),
            "The path /srv/app/package.json is not a directory. Please try again."
        );
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = ValidationError {
            errors: vec![
                FieldError {
                    field: "tailwind.css",
                    message: "must not be empty".to_string(),
                },
                FieldError {
                    field: "aliases.utils",
                    message: "must not be empty".to_string(),
                },
            ],
        };
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["tailwind.css", "aliases.utils"]
        );
        assert!(err.to_string().contains("2 field error(s)"));
        assert_eq!(err.errors[0].to_string(), "tailwind.css: must not be empty");
    }
}
