//! Error types for Madder operations.
//!
//! This module provides the main error type [`MadderError`] which wraps
//! the error conditions that can occur while recoloring and rasterizing
//! a batch of icon files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use madder_dom::ParseError;

/// The main error type for Madder operations.
///
/// Variants map onto the batch failure taxonomy: markup parse failures,
/// rasterization failures, and pattern-expansion failures each abort the
/// batch with their own exit code in the CLI; I/O and configuration
/// problems are generic failures.
#[derive(Debug, Error)]
pub enum MadderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse `{}` as XML: {err}", path.display())]
    Parse { path: PathBuf, err: ParseError },

    #[error("could not rasterize `{}`: {reason}", path.display())]
    Raster { path: PathBuf, reason: String },

    #[error("could not expand pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MadderError {
    /// Create a new `Parse` error for the given file.
    pub fn new_parse_error(path: impl AsRef<Path>, err: ParseError) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            err,
        }
    }

    /// Create a new `Raster` error for the given file.
    pub fn new_raster_error(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Raster {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new `Pattern` error for the given glob pattern.
    pub fn new_pattern_error(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
