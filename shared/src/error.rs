use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    ValidationFailure(String),

    #[error("authorization failed: {0}")]
    AuthorizationFailure(String),

    #[error("conflicting state: {0}")]
    ConflictState(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("solver timed out, returning best incumbent: {0}")]
    SolverTimeout(String),

    #[error("index race, refetch required: {0}")]
    IndexRace(String),

    #[error("notification failed: {0}")]
    NotificationFailure(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
