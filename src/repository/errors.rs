use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The statement matched no row where one was required.
    #[error("record not found")]
    NotFound,
    /// No connection could be obtained from the pool.
    #[error("connection unavailable: {0}")]
    ConnectionError(String),
    /// The store rejected the statement because of a constraint.
    #[error("{0}")]
    ConstraintViolation(String),
    /// A stored value could not be mapped into the domain model.
    #[error("invalid stored value: {0}")]
    ValidationError(String),
    /// Any other store failure.
    #[error("{0}")]
    DatabaseError(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => Self::ConstraintViolation(info.message().to_string()),
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        Self::ConnectionError(err.to_string())
    }
}
