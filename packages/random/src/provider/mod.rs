//! Provider implementation for random strings

mod builder;

pub use builder::RandomProviderBuilder;

use crate::config::{Alphabet, ProviderConfig, RequestConfig};
use crate::generator::Generator;
use crate::CREDENTIAL_DESCRIPTION;
use chrono::{DateTime, TimeDelta, Utc};
use sidecred_common::{
    Credential, CredentialRequest, LoggingTransformer, Metadata, Provider, ProviderError,
    ProviderType, Resource, Result,
};
use std::time::Duration;

/// Issues randomly generated strings that expire after a fixed rotation interval
///
/// The random source, alphabet and rotation interval are fixed for the
/// lifetime of the provider.
#[derive(Debug)]
pub struct RandomProvider {
    generator: Generator,
    rotation_interval: Duration,
}

impl RandomProvider {
    /// Create a provider with the default alphabet and a 7 day rotation interval
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::builder(seed).build()
    }

    /// Start building a provider seeded with `seed`
    #[must_use]
    pub fn builder(seed: u64) -> RandomProviderBuilder {
        RandomProviderBuilder::new(seed)
    }

    /// Create a provider from deserialized settings
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidConfiguration` if the configured alphabet
    /// is empty or repeats a character.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::builder(config.seed)
            .alphabet(config.alphabet()?)
            .rotation_interval(config.rotation_interval())
            .build())
    }

    /// Interval after which issued values are due for rotation
    #[must_use]
    pub fn rotation_interval(&self) -> Duration {
        self.rotation_interval
    }

    /// Characters values are drawn from
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.generator.alphabet()
    }

    /// Expiration of a value issued at `issued_at`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ExpirationOutOfRange` if the result does not fit
    /// in the timestamp range.
    pub fn expiration_at(&self, issued_at: DateTime<Utc>) -> Result<DateTime<Utc>> {
        TimeDelta::from_std(self.rotation_interval)
            .ok()
            .and_then(|interval| issued_at.checked_add_signed(interval))
            .ok_or(ProviderError::ExpirationOutOfRange {
                interval_secs: self.rotation_interval.as_secs(),
            })
    }
}

impl Provider for RandomProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Random
    }

    fn create(&self, request: &CredentialRequest) -> Result<(Vec<Credential>, Option<Metadata>)> {
        let issue = || -> Result<Credential> {
            let config = RequestConfig::from_request(request)?;
            // Checked before drawing so a rejected request leaves the random source untouched.
            let expiration = self.expiration_at(Utc::now())?;
            let value = self.generator.generate(config.length);

            LoggingTransformer::log_credential_issued(
                self.provider_type(),
                &request.name,
                config.length,
                expiration,
            );
            Ok(Credential {
                name: request.name.clone(),
                value,
                description: CREDENTIAL_DESCRIPTION.to_string(),
                expiration,
            })
        };

        match issue() {
            Ok(credential) => Ok((vec![credential], None)),
            Err(e) => {
                LoggingTransformer::log_request_rejected(self.provider_type(), &request.name, &e);
                Err(e)
            }
        }
    }

    fn destroy(&self, resource: &Resource) -> Result<()> {
        LoggingTransformer::log_destroy(self.provider_type(), &resource.id);
        Ok(())
    }
}
