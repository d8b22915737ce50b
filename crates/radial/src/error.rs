//! Error types for Radial operations.
//!
//! This module provides the main error type [`RadialError`] which wraps
//! the error conditions that can occur while loading and rendering diagrams.

use std::io;

use thiserror::Error;

use radial_core::draw;

/// The main error type for Radial operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the TOML error so that
/// callers can point at the offending span.
#[derive(Debug, Error)]
pub enum RadialError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", .err.message())]
    Parse { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] draw::Error),
}

impl RadialError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
