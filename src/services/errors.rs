use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request payload was missing a field, had a wrong type, or broke a
    /// store constraint.
    #[error("{0}")]
    Validation(String),
    /// Requested resource was not found.
    #[error("Product not found")]
    NotFound,
    /// The store failed while executing a statement.
    #[error("{0}")]
    Database(String),
    /// No database connection could be obtained.
    #[error("Database driver not found: {0}")]
    DriverUnavailable(String),
    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
