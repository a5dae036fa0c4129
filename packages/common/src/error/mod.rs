//! Error handling for provider operations
//!
//! Provides the error type shared by every provider:
//! - Structured error variants with thiserror
//! - Constructors for configuration and decode failures
//! - Logging helpers that never expose secret material

pub mod constructors;
pub mod logging;
pub mod types;

// Re-export all public types
pub use logging::LoggingTransformer;
pub use types::{ProviderError, Result};
