use thiserror::Error;

/// Core error type shared across Taskforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is missing or outside its valid range.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Convenience alias for results returned by Taskforge crates.
pub type Result<T> = std::result::Result<T, Error>;
