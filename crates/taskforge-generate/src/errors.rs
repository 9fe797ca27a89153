use thiserror::Error;

/// Errors emitted by the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A required configuration value is missing or invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A sampling request exceeded the available population.
    #[error("pool '{pool}' exhausted: requested {requested} of {available}")]
    PoolExhausted {
        pool: &'static str,
        requested: usize,
        available: usize,
    },
    /// A weighted draw was set up with unusable weights.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

impl From<taskforge_core::Error> for GenerationError {
    fn from(err: taskforge_core::Error) -> Self {
        match err {
            taskforge_core::Error::Configuration(message) => {
                GenerationError::Configuration(message)
            }
        }
    }
}
