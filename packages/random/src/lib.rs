//! # Sidecred Random Provider
//!
//! Provider issuing randomly generated strings with a fixed rotation interval.
//!
//! ## Features
//!
//! - **Deterministic**: Seeded random source, reproducible for a fixed sequence of requests
//! - **Configurable**: Alphabet and rotation interval set once at construction
//! - **Thread Safe**: One instance can serve concurrent `create` calls
//!
//! The random source is not cryptographically secure.
//!
//! ## Quick Start
//!
//! ```rust
//! use sidecred_common::{CredentialRequest, Provider, ProviderType};
//! use sidecred_random::RandomProvider;
//! use std::time::Duration;
//!
//! # fn main() -> sidecred_common::Result<()> {
//! let provider = RandomProvider::builder(1)
//!     .rotation_interval(Duration::from_secs(24 * 60 * 60))
//!     .build();
//!
//! let request = CredentialRequest::new(
//!     ProviderType::Random,
//!     "example-random-credential",
//!     serde_json::json!({ "length": 10 }),
//! );
//! let (credentials, metadata) = provider.create(&request)?;
//! assert_eq!(credentials[0].value.chars().count(), 10);
//! assert!(metadata.is_none());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod generator;
pub mod provider;

pub use config::{Alphabet, ProviderConfig, RequestConfig};
pub use generator::Generator;
pub use provider::{RandomProvider, RandomProviderBuilder};

/// Description attached to every credential this provider issues
pub const CREDENTIAL_DESCRIPTION: &str = "Random generated secret managed by Sidecred.";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Alphabet, ProviderConfig, RandomProvider, RequestConfig};
    pub use sidecred_common::{Credential, CredentialRequest, Provider, ProviderType, Result};
}
