//! Core error types and definitions

use thiserror::Error;

/// Errors surfaced by providers to the host
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request's config payload could not be decoded into the provider's request config
    #[error("Failed to decode request config: {0}")]
    ConfigDecode(#[from] serde_json::Error),

    /// Construction-time configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Expiration timestamp does not fit in the representable range
    #[error("Expiration out of range: rotation interval of {interval_secs}s overflows the timestamp range")]
    ExpirationOutOfRange {
        /// Rotation interval in seconds that caused the overflow
        interval_secs: u64,
    },

    /// Provider type tag not recognised
    #[error("Unknown provider type: {0}")]
    UnknownProviderType(String),
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
