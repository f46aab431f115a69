//! Error adapter for converting MadderError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! type and miette's rich diagnostic formatting used in the CLI. Madder
//! errors carry no source spans, so the adapter contributes a diagnostic
//! code per variant and defers everything else to miette's defaults.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use madder::MadderError;

/// Adapter wrapping a [`MadderError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a MadderError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            MadderError::Io(_) => "madder::io",
            MadderError::Parse { .. } => "madder::parse",
            MadderError::Raster { .. } => "madder::raster",
            MadderError::Pattern { .. } => "madder::pattern",
            MadderError::Config(_) => "madder::config",
        };
        Some(Box::new(code))
    }
}
