//! CLI logic for the Madder icon recoloring tool.
//!
//! This module contains the batch driver: pattern expansion, color
//! normalization, and the per-file recolor → rasterize pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::{Path, PathBuf};

use glob::glob;
use log::{info, warn};

use madder::{IconPainter, MadderError};

/// Run the Madder CLI application
///
/// Expands every file pattern, then processes each matched file through
/// the recolor → serialize → rasterize pipeline. Files are handled
/// sequentially in expansion order, and the first hard failure aborts
/// the remaining batch; files already processed stay rewritten on disk.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MadderError` for:
/// - Configuration loading errors
/// - Pattern expansion errors
/// - File I/O errors
/// - Markup parsing errors
/// - Rasterization errors
pub fn run(args: &Args) -> Result<(), MadderError> {
    let Some(color) = args.color.as_deref() else {
        return Err(MadderError::Config("no color given".to_string()));
    };
    if args.files.is_empty() {
        return Err(MadderError::Config("no files given".to_string()));
    }

    let app_config = config::load_config(args.config.as_ref())?;
    let color = normalize_color(color);
    let scale = args.scale.or(app_config.raster().scale()).unwrap_or(1.0);

    info!(color = color.as_str(), scale = scale; "Recoloring icons");

    let painter = IconPainter::new(app_config);

    for pattern in &args.files {
        info!(pattern = pattern.as_str(); "Expanding file pattern");
        let paths = expand_pattern(pattern)?;
        if paths.is_empty() {
            warn!(pattern = pattern.as_str(); "pattern matched no files");
            continue;
        }

        for path in &paths {
            process_file(&painter, path, &color, scale)?;
        }
    }

    Ok(())
}

/// Recolor one file in place, then rasterize it to its sibling PNG.
fn process_file(
    painter: &IconPainter,
    path: &Path,
    color: &str,
    scale: f32,
) -> Result<(), MadderError> {
    let summary = painter.recolor_file(path, color)?;
    info!(
        path = path.display().to_string(),
        painted = summary.painted,
        overwritten = summary.overwritten;
        "fill attributes rewritten"
    );

    let destination = png_destination(path);
    painter.rasterize_file(path, &destination, scale)?;
    info!(destination = destination.display().to_string(); "Successfully saved as PNG");

    Ok(())
}

/// Expand one glob pattern into concrete paths.
///
/// A pattern matching nothing yields an empty list; only a pattern that
/// fails to compile or a match that fails to resolve is an error.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, MadderError> {
    let entries =
        glob(pattern).map_err(|err| MadderError::new_pattern_error(pattern, err.to_string()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| MadderError::new_pattern_error(pattern, err.to_string()))?;
        paths.push(path);
    }
    Ok(paths)
}

/// Normalize a user-supplied color: prefix `#` unless already present.
fn normalize_color(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// The raster output path for an input file: the full source filename
/// with `.png` appended (`icon.svg` becomes `icon.svg.png`).
fn png_destination(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Map an error to the process exit code documented for the CLI.
pub fn exit_code(err: &MadderError) -> i32 {
    match err {
        MadderError::Parse { .. } => 3,
        MadderError::Raster { .. } => 4,
        MadderError::Pattern { .. } => 5,
        MadderError::Io(_) | MadderError::Config(_) => 1,
    }
}
