//! Builder for random providers
//!
//! Overrides are applied in call order on top of the defaults; the last call
//! for a setting wins. Building cannot fail: every input is already valid by
//! construction.

use super::RandomProvider;
use crate::config::{Alphabet, DEFAULT_ROTATION_INTERVAL};
use crate::generator::Generator;
use sidecred_common::{LoggingTransformer, Provider};
use std::time::Duration;

/// Collects construction-time overrides for a [`RandomProvider`]
#[derive(Debug, Clone)]
pub struct RandomProviderBuilder {
    seed: u64,
    alphabet: Alphabet,
    rotation_interval: Duration,
}

impl RandomProviderBuilder {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seed,
            alphabet: Alphabet::default(),
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
        }
    }

    /// Set the interval after which issued values are due for rotation
    #[must_use]
    pub fn rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }

    /// Set the characters values are drawn from
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Build the provider, seeding its random source
    #[must_use]
    pub fn build(self) -> RandomProvider {
        let provider = RandomProvider {
            generator: Generator::new(self.seed, self.alphabet),
            rotation_interval: self.rotation_interval,
        };

        LoggingTransformer::log_provider_ready(
            provider.provider_type(),
            provider.alphabet().len(),
            provider.rotation_interval,
        );
        provider
    }
}
