//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to either enum.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::products::ProductFormError;
    use crate::repository::RepositoryError;
    use crate::services::ServiceError;

    impl From<RepositoryError> for ServiceError {
        fn from(val: RepositoryError) -> Self {
            match val {
                RepositoryError::NotFound => ServiceError::NotFound,
                RepositoryError::ConnectionError(message) => {
                    ServiceError::DriverUnavailable(message)
                }
                RepositoryError::ConstraintViolation(message) => ServiceError::Validation(message),
                RepositoryError::ValidationError(message)
                | RepositoryError::DatabaseError(message) => ServiceError::Database(message),
            }
        }
    }

    impl From<ProductFormError> for ServiceError {
        fn from(val: ProductFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }
}
