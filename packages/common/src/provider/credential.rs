//! Credentials issued to the host and the bookkeeping that comes back on destroy

use super::ProviderType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret value issued by a provider
///
/// The value is wiped from memory when the credential is dropped and is
/// redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    /// Name copied from the request
    #[zeroize(skip)]
    pub name: String,
    /// The secret itself
    pub value: String,
    /// Human-readable annotation
    #[zeroize(skip)]
    pub description: String,
    /// When the credential is due for rotation (UTC)
    #[zeroize(skip)]
    pub expiration: DateTime<Utc>,
}

impl Credential {
    /// Whether the credential has expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiration
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("description", &self.description)
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Provider-specific bookkeeping the host retains to destroy a resource later
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Create empty metadata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether no entries are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Host-side record of something a provider created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Provider kind that created the resource
    #[serde(rename = "type")]
    pub provider_type: ProviderType,
    /// Host-assigned identifier
    pub id: String,
    /// Expiration of the credentials backed by this resource
    pub expiration: DateTime<Utc>,
    /// Whether the resource has been replaced and awaits cleanup
    #[serde(default)]
    pub deposed: bool,
    /// Request config the resource was created from
    #[serde(default)]
    pub config: Value,
    /// Metadata returned by the provider at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Resource {
    /// Create a resource record with no metadata
    pub fn new(
        provider_type: ProviderType,
        id: impl Into<String>,
        expiration: DateTime<Utc>,
        config: Value,
    ) -> Self {
        Self {
            provider_type,
            id: id.into(),
            expiration,
            deposed: false,
            config,
            metadata: None,
        }
    }
}
