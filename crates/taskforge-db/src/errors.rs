use thiserror::Error;

/// Errors emitted by the persistence sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The schema definition is missing or failed to apply.
    #[error("schema bootstrap failed: {0}")]
    SchemaBootstrap(String),
    /// An insert referenced an identifier that does not exist.
    #[error("referential integrity violation inserting into '{table}'")]
    ReferentialIntegrity { table: &'static str },
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for sink results.
pub type SinkResult<T> = std::result::Result<T, SinkError>;
