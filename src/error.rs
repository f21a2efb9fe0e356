//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`CatalogueError`]) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! Heuristic outcomes such as misattributed or duplicate recordings are
//! filtering decisions and never show up here.
//!
//! [`CatalogueError`]: crate::catalogue::CatalogueError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File or console I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata or lyrics service error
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] crate::catalogue::CatalogueError),

    /// A pipeline stage had nothing to work with
    #[error("No data: {0}")]
    NoData(String),

    /// User input that can't be acted on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a no-data error.
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::NoData(message.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// True when the error only means "nothing to report".
    pub fn is_no_data(&self) -> bool {
        match self {
            Self::NoData(_) => true,
            Self::WithContext { source, .. } => source.is_no_data(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::catalogue::CatalogueError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Catalogue(e).context(ctx))
    }
}
