//! Tests for request decoding, alphabet validation and construction settings

use serde_json::json;
use sidecred_common::{CredentialRequest, Provider, ProviderError, ProviderType};
use sidecred_random::config::{DEFAULT_ALPHABET, DEFAULT_ROTATION_INTERVAL, MAX_LENGTH};
use sidecred_random::{Alphabet, ProviderConfig, RandomProvider, RequestConfig};
use std::time::Duration;

#[test]
fn test_request_config_from_request() {
    let request = CredentialRequest::new(ProviderType::Random, "r", json!({ "length": 10 }));
    assert_eq!(
        RequestConfig::from_request(&request).unwrap(),
        RequestConfig { length: 10 }
    );
}

#[test]
fn test_request_config_rejects_negative_length() {
    let request = CredentialRequest::new(ProviderType::Random, "r", json!({ "length": -10 }));
    let err = RequestConfig::from_request(&request).unwrap_err();
    assert!(matches!(err, ProviderError::ConfigDecode(_)));
}

#[test]
fn test_request_config_rejects_length_above_maximum() {
    let request =
        CredentialRequest::new(ProviderType::Random, "r", json!({ "length": MAX_LENGTH + 1 }));
    let err = RequestConfig::from_request(&request).unwrap_err();
    assert!(matches!(err, ProviderError::ConfigDecode(_)));
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn test_default_alphabet() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    assert_eq!(alphabet.len(), 69);
    assert!(!alphabet.is_empty());
    assert_eq!(alphabet.get(0), Some('a'));
    assert_eq!(alphabet.get(68), Some('*'));
    assert_eq!(alphabet.get(69), None);
    assert!(alphabet.contains('Z'));
    assert!(!alphabet.contains('~'));
}

#[test]
fn test_alphabet_rejects_empty() {
    let err = Alphabet::new("").unwrap_err();
    assert!(matches!(err, ProviderError::InvalidConfiguration(_)));
}

#[test]
fn test_alphabet_rejects_duplicates() {
    let err = Alphabet::new("abca").unwrap_err();
    assert!(matches!(err, ProviderError::InvalidConfiguration(ref msg) if msg.contains("'a'")));
}

#[test]
fn test_alphabet_keeps_order_and_multibyte_characters() {
    let alphabet = Alphabet::new("zä€1").unwrap();
    assert_eq!(alphabet.as_chars(), &['z', 'ä', '€', '1']);
    assert_eq!(alphabet.len(), 4);
    assert_eq!(alphabet.to_string(), "zä€1");
}

#[test]
fn test_provider_config_defaults_when_fields_absent() {
    let config: ProviderConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, ProviderConfig::default());
    assert_eq!(config.seed, 0);
    assert_eq!(config.alphabet, DEFAULT_ALPHABET);
    assert_eq!(config.rotation_interval(), DEFAULT_ROTATION_INTERVAL);
    assert_eq!(config.rotation_interval_secs, 604_800);
    assert!(config.validate().is_ok());
}

#[test]
fn test_provider_from_config() {
    let config: ProviderConfig = serde_json::from_value(json!({
        "seed": 7,
        "alphabet": "0123456789",
        "rotation_interval_secs": 3600
    }))
    .unwrap();

    let provider = RandomProvider::from_config(&config).unwrap();
    assert_eq!(provider.rotation_interval(), Duration::from_secs(3600));
    assert_eq!(provider.alphabet().to_string(), "0123456789");

    let same = RandomProvider::builder(7)
        .alphabet(Alphabet::new("0123456789").unwrap())
        .rotation_interval(Duration::from_secs(3600))
        .build();

    let request = CredentialRequest::new(ProviderType::Random, "pin", json!({ "length": 6 }));
    let (from_config, _) = provider.create(&request).unwrap();
    let (from_builder, _) = same.create(&request).unwrap();
    assert_eq!(from_config[0].value, from_builder[0].value);
}

#[test]
fn test_provider_from_config_rejects_empty_alphabet() {
    let config = ProviderConfig {
        alphabet: String::new(),
        ..ProviderConfig::default()
    };

    assert!(config.validate().is_err());
    assert!(matches!(
        RandomProvider::from_config(&config),
        Err(ProviderError::InvalidConfiguration(_))
    ));
}
