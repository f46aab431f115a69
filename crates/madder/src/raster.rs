//! SVG rasterization to PNG via resvg.

use std::fs;
use std::path::Path;

use log::{debug, info};
use resvg::{tiny_skia, usvg};

use crate::MadderError;

/// Render the SVG file at `source` to a PNG at `dest`.
///
/// The output dimensions are the document size multiplied by `scale`,
/// rounded up, and the rendering is scaled uniformly to match. When
/// `background` is given (a hex color string, leading `#` optional) it
/// is painted behind the icon; otherwise the background stays
/// transparent.
///
/// # Errors
///
/// Returns [`MadderError::Raster`] when the scale is not a positive
/// finite number, the SVG cannot be parsed by the renderer, the pixel
/// buffer cannot be allocated, or PNG encoding fails;
/// [`MadderError::Config`] for an unparseable background color; and
/// [`MadderError::Io`] when the source file cannot be read.
pub fn render_png(
    source: &Path,
    dest: &Path,
    scale: f32,
    background: Option<&str>,
) -> Result<(), MadderError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MadderError::new_raster_error(
            source,
            format!("invalid scale factor {scale}"),
        ));
    }
    let background = background.map(parse_color).transpose()?;

    debug!(path = source.display().to_string(); "parsing SVG for rasterization");
    let text = fs::read_to_string(source)?;
    let tree = usvg::Tree::from_str(&text, &usvg::Options::default())
        .map_err(|err| MadderError::new_raster_error(source, err.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        MadderError::new_raster_error(source, format!("cannot allocate a {width}x{height} pixel buffer"))
    })?;

    if let Some(color) = background {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .save_png(dest)
        .map_err(|err| MadderError::new_raster_error(source, err.to_string()))?;

    info!(path = dest.display().to_string(), width = width, height = height; "PNG saved");
    Ok(())
}

/// Parse a 3- or 6-digit hex color string into an opaque color.
fn parse_color(value: &str) -> Result<tiny_skia::Color, MadderError> {
    fn channel(hex: &str) -> Option<u8> {
        u8::from_str_radix(hex, 16).ok()
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    let rgb = if !hex.is_ascii() {
        None
    } else {
        match hex.len() {
            3 => channel(&hex[0..1].repeat(2))
                .zip(channel(&hex[1..2].repeat(2)))
                .zip(channel(&hex[2..3].repeat(2)))
                .map(|((r, g), b)| (r, g, b)),
            6 => channel(&hex[0..2])
                .zip(channel(&hex[2..4]))
                .zip(channel(&hex[4..6]))
                .map(|((r, g), b)| (r, g, b)),
            _ => None,
        }
    };

    let (r, g, b) = rgb.ok_or_else(|| {
        MadderError::Config(format!("invalid background color `{value}`"))
    })?;
    Ok(tiny_skia::Color::from_rgba8(r, g, b, 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8" viewBox="0 0 8 8">"#,
        r##"<g><path d="M0 0h8v8H0z" fill="#ff0000"/></g></svg>"##,
    );

    fn write_icon(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("icon.svg");
        fs::write(&path, ICON).expect("write test icon");
        path
    }

    #[test]
    fn renders_a_png_at_scale_one() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_icon(&dir);
        let dest = dir.path().join("icon.svg.png");

        render_png(&source, &dest, 1.0, None).expect("rasterization succeeds");

        let pixmap = tiny_skia::Pixmap::load_png(&dest).expect("output decodes as PNG");
        assert_eq!((pixmap.width(), pixmap.height()), (8, 8));
    }

    #[test]
    fn scale_multiplies_output_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_icon(&dir);
        let dest = dir.path().join("icon.svg.png");

        render_png(&source, &dest, 2.5, None).expect("rasterization succeeds");

        let pixmap = tiny_skia::Pixmap::load_png(&dest).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (20, 20));
    }

    #[test]
    fn background_fills_transparent_pixels() {
        let dir = tempfile::tempdir().unwrap();
        // A 2x2 canvas with nothing drawn on it.
        let source = dir.path().join("empty.svg");
        fs::write(
            &source,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"><g/></svg>"#,
        )
        .unwrap();
        let dest = dir.path().join("empty.svg.png");

        render_png(&source, &dest, 1.0, Some("202428")).expect("rasterization succeeds");

        let pixmap = tiny_skia::Pixmap::load_png(&dest).unwrap();
        let pixel = pixmap.pixel(0, 0).unwrap();
        assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0x20, 0x24, 0x28));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_icon(&dir);
        let dest = dir.path().join("icon.svg.png");

        let err = render_png(&source, &dest, 0.0, None).unwrap_err();
        assert!(matches!(err, MadderError::Raster { .. }));
        let err = render_png(&source, &dest, f32::NAN, None).unwrap_err();
        assert!(matches!(err, MadderError::Raster { .. }));
    }

    #[test]
    fn rejects_markup_that_is_not_svg() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("not-an-icon.svg");
        fs::write(&source, "<notsvg/>").unwrap();
        let dest = dir.path().join("not-an-icon.svg.png");

        let err = render_png(&source, &dest, 1.0, None).unwrap_err();
        assert!(matches!(err, MadderError::Raster { .. }));
    }

    #[test]
    fn parses_short_and_long_hex_colors() {
        let color = parse_color("#fff").unwrap();
        assert_eq!(color, tiny_skia::Color::from_rgba8(255, 255, 255, 255));
        let color = parse_color("1a2b3c").unwrap();
        assert_eq!(color, tiny_skia::Color::from_rgba8(0x1a, 0x2b, 0x3c, 255));

        assert!(parse_color("#12345").is_err());
        assert!(parse_color("zzzzzz").is_err());
        assert!(parse_color("").is_err());
    }
}
