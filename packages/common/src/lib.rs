//! Common infrastructure shared by sidecred providers
//!
//! This crate provides the pieces every provider kind builds on:
//! - The host-facing [`Provider`] capability and the credential types it exchanges
//! - A single error type with constructors for the failure kinds providers report
//! - Logging bootstrap for hosts and test suites

pub mod error;
pub mod provider;

pub use error::{LoggingTransformer, ProviderError, Result};
pub use provider::{Credential, CredentialRequest, Metadata, Provider, ProviderType, Resource};
