use std::error::Error as StdError;

/// Crate-wide result type for messaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the messaging core.
///
/// The core performs no retry and no fallback: a failed repository read or
/// write aborts the use case and the error reaches the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A repository read or write failed.
    #[error("storage operation failed: {context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn storage(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
