//! Command-line argument definitions for the Madder CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. The color and file arguments are optional at the
//! parser level so the binary can report the missing-color and
//! missing-files usage errors with their own exit codes instead of
//! clap's generic one.

use clap::Parser;

/// Command-line arguments for the Madder icon recoloring tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "madder <color> <file> [otherFiles...] [OPTIONS]")]
pub struct Args {
    /// Fill color to apply, as a hex string with or without the leading `#`
    pub color: Option<String>,

    /// SVG files or glob patterns to recolor
    pub files: Vec<String>,

    /// Scale the rasterized image by the specified multiplier
    #[arg(short, long)]
    pub scale: Option<f32>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
