//! Request and construction-time configuration for the random provider

use serde::{Deserialize, Deserializer, Serialize};
use sidecred_common::{CredentialRequest, ProviderError, Result};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

/// Characters drawn from when no alphabet is configured
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*";

/// Rotation interval applied when none is configured (7 days)
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Largest `length` a request may ask for
pub const MAX_LENGTH: usize = 65_536;

/// Configuration format for random credential requests
///
/// Example request:
///
/// ```yaml
/// - type: random
///   name: example-random-credential
///   config:
///     length: 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Number of characters to generate, at most [`MAX_LENGTH`]
    #[serde(deserialize_with = "bounded_length")]
    pub length: usize,
}

fn bounded_length<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let length = usize::deserialize(deserializer)?;
    if length > MAX_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "length {length} exceeds maximum of {MAX_LENGTH}"
        )));
    }
    Ok(length)
}

impl RequestConfig {
    /// Decode the config carried by a request
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigDecode` if `length` is missing, negative,
    /// not an integer or above [`MAX_LENGTH`], or if the payload is not an object.
    pub fn from_request(request: &CredentialRequest) -> Result<Self> {
        request.unmarshal_config()
    }
}

/// Ordered, non-empty set of distinct characters eligible for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of a string, in order
    ///
    /// Repeated characters are rejected: a duplicate would be drawn more often
    /// than the others.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidConfiguration` if the string is empty or
    /// repeats a character.
    pub fn new(chars: impl AsRef<str>) -> Result<Self> {
        let chars: Vec<char> = chars.as_ref().chars().collect();
        if chars.is_empty() {
            return Err(ProviderError::invalid_configuration("alphabet must not be empty"));
        }

        let mut seen = HashSet::with_capacity(chars.len());
        if let Some(dup) = chars.iter().find(|c| !seen.insert(**c)) {
            return Err(ProviderError::invalid_configuration(format!(
                "alphabet contains duplicate character {dup:?}"
            )));
        }

        Ok(Self { chars })
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an alphabet cannot be built empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Whether `c` belongs to the alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Characters in order
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Construction-time settings, deserializable from a host config block
///
/// Every field is optional in the serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Seed for the random source
    #[serde(default)]
    pub seed: u64,
    /// Characters eligible for generation
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Rotation interval in seconds
    #[serde(default = "default_rotation_interval_secs")]
    pub rotation_interval_secs: u64,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_rotation_interval_secs() -> u64 {
    DEFAULT_ROTATION_INTERVAL.as_secs()
}

impl ProviderConfig {
    /// Parsed alphabet
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidConfiguration` if the alphabet is empty or
    /// repeats a character.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.alphabet)
    }

    /// Rotation interval as a duration
    #[must_use]
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_secs(self.rotation_interval_secs)
    }

    /// Check the settings without building a provider
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidConfiguration` on an invalid alphabet.
    pub fn validate(&self) -> Result<()> {
        self.alphabet().map(|_| ())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            alphabet: default_alphabet(),
            rotation_interval_secs: default_rotation_interval_secs(),
        }
    }
}
