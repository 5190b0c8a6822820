//! Error types for the cadence library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all cadence operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A resource is absent, or not owned by the caller
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Identity could not be established for the caller
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`CadenceError`], mirroring HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Unauthorized,
    Internal,
}

impl ErrorKind {
    /// HTTP-style status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::InvalidInput => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CadenceError {
        CadenceError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for the given resource name and id.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Classifies this error into the four-way taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CadenceError::InvalidInput { .. } => ErrorKind::InvalidInput,
            CadenceError::NotFound { .. } => ErrorKind::NotFound,
            CadenceError::Unauthorized { .. } => ErrorKind::Unauthorized,
            CadenceError::Database { .. }
            | CadenceError::FileSystem { .. }
            | CadenceError::XdgDirectory(_)
            | CadenceError::Serialization { .. }
            | CadenceError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// HTTP-style status code carried by this error.
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::database(message).with_source(e))
    }
}

/// Result type alias for cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_follow_kind() {
        let invalid = CadenceError::invalid_input("deadline").with_reason("Invalid date format");
        assert_eq!(invalid.kind(), ErrorKind::InvalidInput);
        assert_eq!(invalid.status_code(), 400);

        let missing = CadenceError::not_found("Plan", "abc");
        assert_eq!(missing.status_code(), 404);
        assert_eq!(missing.to_string(), "Plan not found: abc");

        let unauthorized = CadenceError::Unauthorized {
            reason: "unknown user".into(),
        };
        assert_eq!(unauthorized.status_code(), 401);

        let db = CadenceError::database("Failed to insert plan")
            .with_source(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(db.kind(), ErrorKind::Internal);
        assert_eq!(db.status_code(), 500);
    }
}
