//! Structured logging for provider operations
//!
//! Provides env_logger-based logging with the standard log crate. Secret
//! values never pass through these helpers; only names, sizes and timestamps do.

use chrono::{DateTime, Utc};
use log::{debug, info, trace, warn};
use std::sync::Once;
use std::time::Duration;

use crate::ProviderType;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Install the `env_logger` backend for a sidecred host process
    ///
    /// Only the first call has an effect. Filtering follows `RUST_LOG`, e.g.
    /// `RUST_LOG=sidecred_random=debug` prints one line per issued credential
    /// while leaving other crates at their default level.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Route provider logs through the test harness's captured output
    ///
    /// Each test may call this; only the first call installs the logger.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log provider construction without exposing seed material
    pub fn log_provider_ready(
        provider_type: ProviderType,
        alphabet_len: usize,
        rotation_interval: Duration,
    ) {
        debug!(
            "Provider ready: {provider_type} (alphabet_len: {alphabet_len}, rotation_interval: {rotation_interval:?})"
        );
    }

    /// Log an issued credential by name and shape only
    pub fn log_credential_issued(
        provider_type: ProviderType,
        name: &str,
        length: usize,
        expiration: DateTime<Utc>,
    ) {
        debug!(
            "Credential issued: {provider_type} (name: {name}, length: {length}, expiration: {})",
            expiration.to_rfc3339()
        );
    }

    /// Log a rejected request
    pub fn log_request_rejected(
        provider_type: ProviderType,
        name: &str,
        error: &dyn std::error::Error,
    ) {
        warn!("Request rejected: {provider_type} (name: {name}, error: {error})");
    }

    /// Log a destroy call
    pub fn log_destroy(provider_type: ProviderType, resource_id: &str) {
        trace!("Destroy: {provider_type} (resource_id: {resource_id}) - nothing to release");
    }
}
