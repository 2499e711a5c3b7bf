//! NLLB translation client
//!
//! An async client for a translation service exposing `/health`,
//! `/languages` and `/translate`, plus the CLI handlers used by the
//! `nllb-client` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::ClientConfig,
    errors::{Result, TranslationError},
    models::{HealthStatus, LanguageList, TranslationRequest, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
