use std::path::PathBuf;
use thiserror::Error;

use crate::models::{ConfigError, UserId};

/// Main error type for usersvc
#[derive(Error, Debug)]
pub enum UserServiceError {
    #[error("User capacity exceeded (max: {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("No user ids left to assign")]
    IdsExhausted,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by load/save hooks
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to create data directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to read user data {0}: {1}")]
    Read(PathBuf, std::io::Error),
}

impl UserServiceError {
    /// Whether the service state is untouched after this error
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            UserServiceError::CapacityExceeded { .. }
                | UserServiceError::InvalidEmail(_)
                | UserServiceError::NotFound(_)
                | UserServiceError::IdsExhausted
        )
    }
}

pub type Result<T> = std::result::Result<T, UserServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UserServiceError::CapacityExceeded { capacity: 100 };
        assert_eq!(err.to_string(), "User capacity exceeded (max: 100)");

        let err = UserServiceError::InvalidEmail("bob.example.com".to_string());
        assert_eq!(err.to_string(), "Invalid email address: bob.example.com");

        let err = UserServiceError::NotFound(42);
        assert_eq!(err.to_string(), "User not found: 42");
    }

    #[test]
    fn test_is_rejection() {
        assert!(UserServiceError::NotFound(1).is_rejection());
        assert!(UserServiceError::InvalidEmail(String::new()).is_rejection());
        assert!(UserServiceError::IdsExhausted.is_rejection());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!UserServiceError::from(io).is_rejection());
    }

    #[test]
    fn test_json_error_conversion() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UserServiceError = inner.into();
        assert!(matches!(err, UserServiceError::Json(_)));
        assert!(!err.is_rejection());
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_persistence_error_conversion() {
        let inner = PersistenceError::CreateDir(
            PathBuf::from("/etc/app"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let err: UserServiceError = inner.into();
        assert!(err.to_string().starts_with("Persistence error: Failed to create data directory /etc/app"));
    }
}
