//! Incoming credential requests

use super::ProviderType;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for credentials, routed to a provider by the host
///
/// Example payload:
///
/// ```json
/// { "type": "random", "name": "example-random-credential", "config": { "length": 10 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRequest {
    /// Provider kind the request is addressed to
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    /// Name given to the issued credential
    pub name: String,
    /// Provider-specific configuration, opaque to the host
    #[serde(default)]
    pub config: Value,
}

impl CredentialRequest {
    /// Create a request with the given provider-specific config payload
    pub fn new(provider_type: ProviderType, name: impl Into<String>, config: Value) -> Self {
        Self {
            provider_type,
            name: name.into(),
            config,
        }
    }

    /// Decode the opaque config payload into a provider's typed request config
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigDecode` if the payload does not match `T`.
    pub fn unmarshal_config<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.config)?)
    }
}
