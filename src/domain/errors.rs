// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The entity store was never initialised. Fatal at startup.
    #[error("entity store is not configured: {0}")]
    Configuration(String),
    /// A failure reported by the entity store during an operation. Carries
    /// the underlying cause; nothing above the repository interprets it.
    #[error("entity store failure: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn storage(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            message: cause.to_string(),
            source: Some(Box::new(cause)),
        }
    }
}
