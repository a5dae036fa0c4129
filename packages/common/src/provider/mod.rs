//! Host-facing provider capability
//!
//! Every secret source the host can route requests to implements [`Provider`].
//! The host keeps providers as trait objects and dispatches on
//! [`Provider::provider_type`], so heterogeneous sources are handled uniformly.

pub mod credential;
pub mod request;

pub use credential::{Credential, Metadata, Resource};
pub use request::CredentialRequest;

use crate::{ProviderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag identifying a provider kind in the host's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ProviderType {
    /// Randomly generated strings
    Random,
}

impl ProviderType {
    /// Tag as it appears in request payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Self::Random),
            other => Err(ProviderError::unknown_provider_type(other)),
        }
    }
}

/// Capability contract shared by all provider kinds
///
/// Implementations must be safe to share between threads: the host may call
/// [`create`](Provider::create) concurrently on one instance.
pub trait Provider: Send + Sync {
    /// Kind of secret source this provider serves
    fn provider_type(&self) -> ProviderType;

    /// Issue credentials for a request
    ///
    /// Returns the credentials and optional metadata the host must retain to
    /// call [`destroy`](Provider::destroy) later.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be served. No credentials are
    /// issued and no side effect may be assumed when an error is returned.
    fn create(&self, request: &CredentialRequest) -> Result<(Vec<Credential>, Option<Metadata>)>;

    /// Release whatever external resource backs a previously issued credential
    ///
    /// # Errors
    ///
    /// Returns an error if the resource could not be released.
    fn destroy(&self, resource: &Resource) -> Result<()>;
}
