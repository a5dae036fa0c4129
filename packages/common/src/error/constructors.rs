//! Error constructors and classification helpers

use super::types::ProviderError;

impl ProviderError {
    /// Create an `InvalidConfiguration` error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create an `UnknownProviderType` error
    pub fn unknown_provider_type(tag: impl Into<String>) -> Self {
        Self::UnknownProviderType(tag.into())
    }

    /// Whether the error was caused by the incoming request rather than the provider itself
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::ConfigDecode(_))
    }
}
