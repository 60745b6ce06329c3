use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record of the given kind has the requested id.
    #[error("not found: {0}")]
    NotFound(String),
    /// Unique or referential constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{} with id {} not found", entity, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::NotFound("record not found".into()),
            StorageError::ConstraintViolation(msg) => Self::ConstraintViolation(msg),
            StorageError::Backend(msg) => Self::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = ServiceError::not_found("user", "u-1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: user with id u-1 not found");
    }

    #[test]
    fn storage_errors_keep_their_category() {
        let err: ServiceError = StorageError::ConstraintViolation("users.email".into()).into();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        let err: ServiceError = StorageError::Backend("io".into()).into();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(!err.is_not_found());
    }
}
