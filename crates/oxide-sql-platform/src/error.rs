//! Error types for the quoting platform.

/// Errors that can occur while configuring a platform or quoting identifiers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An identifier to quote was empty.
    #[error("Identifier cannot be empty")]
    EmptyIdentifier,

    /// An identifier chain had no segments at all.
    #[error("Identifier chain cannot be empty")]
    EmptyChain,

    /// An identifier chain contained an empty segment (e.g. `schema..table`).
    #[error("Identifier chain '{chain}' contains an empty segment")]
    EmptyChainSegment {
        /// The chain as given, segments joined with the separator.
        chain: String,
    },

    /// A quoting symbol given to a custom platform is unusable.
    #[error("Invalid quote symbol '{symbol}': {reason}")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A platform name could not be resolved to a known dialect.
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Platform configuration could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error (reading a configuration file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by an invalid argument to a quoting call.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyIdentifier | Self::EmptyChain | Self::EmptyChainSegment { .. }
        )
    }
}

/// Result type for platform operations.
pub type Result<T> = std::result::Result<T, Error>;
