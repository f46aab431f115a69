//! Madder - batch fill recoloring and rasterization for SVG icon sets.
//!
//! Madder overwrites the `fill` attribute on the fill-able shape elements
//! of SVG icon files and rasterizes the result to PNG. It includes:
//!
//! - **Recoloring**: The fill-rewrite pass over a parsed document
//!   ([`recolor`] module)
//! - **Rasterization**: PNG output via resvg ([`raster`] module)
//! - **Configuration**: Raster defaults loadable from TOML ([`config`] module)
//!
//! The [`IconPainter`] facade ties the stages together for one file at a
//! time; batch orchestration lives in the CLI crate.

pub mod config;
pub mod raster;
pub mod recolor;

mod error;

pub use error::MadderError;
pub use recolor::{FILLABLE_ELEMENTS, PaintSummary};

use std::fs;
use std::path::Path;

use log::{debug, info};

use madder_dom::Document;

use config::AppConfig;

/// Facade for recoloring and rasterizing icon files.
///
/// Holds the application configuration and processes one file per call;
/// no state is carried between files.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use madder::{IconPainter, config::AppConfig};
///
/// let painter = IconPainter::new(AppConfig::default());
///
/// let path = Path::new("icons/home.svg");
/// let summary = painter.recolor_file(path, "#ff8800")
///     .expect("Failed to recolor");
/// println!("painted {} elements", summary.painted);
///
/// painter.rasterize_file(path, Path::new("icons/home.svg.png"), 2.0)
///     .expect("Failed to rasterize");
/// ```
#[derive(Default)]
pub struct IconPainter {
    config: AppConfig,
}

impl IconPainter {
    /// Create a new painter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the painter's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Recolor one icon file in place.
    ///
    /// Reads the file, parses it, runs the fill-rewrite pass with
    /// `color` (already normalized by the caller), and writes the
    /// serialized markup back over the source file. Files whose markup
    /// parses but does not look like an icon are rewritten unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MadderError::Io`] when the file cannot be read or
    /// written and [`MadderError::Parse`] when the markup is ill-formed.
    pub fn recolor_file(&self, path: &Path, color: &str) -> Result<PaintSummary, MadderError> {
        info!(path = path.display().to_string(), color = color; "Processing file");

        let source = fs::read_to_string(path)?;

        debug!("parsing SVG as XML");
        let mut document =
            Document::parse(&source).map_err(|err| MadderError::new_parse_error(path, err))?;

        let summary = recolor::apply_fill(&mut document, color);

        debug!("rebuilding XML");
        let rebuilt = document.to_xml();

        debug!("saving output XML back to source SVG file");
        fs::write(path, rebuilt)?;

        Ok(summary)
    }

    /// Rasterize one (already recolored) icon file to a PNG.
    ///
    /// The background color, if configured, is painted behind the icon.
    ///
    /// # Errors
    ///
    /// Returns [`MadderError::Raster`] when the renderer rejects the file
    /// or the output cannot be produced, and [`MadderError::Config`] for
    /// an invalid configured background color.
    pub fn rasterize_file(&self, path: &Path, dest: &Path, scale: f32) -> Result<(), MadderError> {
        debug!(path = path.display().to_string(), scale = scale; "saving as PNG");
        raster::render_png(path, dest, scale, self.config.raster().background())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recolor_file_rewrites_the_source_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(
            &path,
            r##"<svg xmlns="http://www.w3.org/2000/svg"><g><path d="M0 0h4" fill="#000000"/></g></svg>"##,
        )
        .unwrap();

        let painter = IconPainter::default();
        let summary = painter.recolor_file(&path, "#ff8800").unwrap();
        assert_eq!(summary, PaintSummary { painted: 1, overwritten: 1 });

        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains(r##"fill="#ff8800""##));
        assert!(rewritten.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(rewritten.starts_with("<?xml"));
    }

    #[test]
    fn recolor_file_reports_parse_failures_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "<svg><g>").unwrap();

        let err = IconPainter::default()
            .recolor_file(&path, "#ff8800")
            .unwrap_err();
        match err {
            MadderError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected a parse error, got {other}"),
        }
    }
}
