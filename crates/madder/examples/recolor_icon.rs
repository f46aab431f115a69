//! Example: Recoloring and rasterizing a single icon
//!
//! This example builds a small icon file on disk, applies a fill
//! override to it, and rasterizes the result at 4x scale.

use std::fs;
use std::path::Path;

use madder::{IconPainter, config::AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let icon = Path::new("example_icon.svg");
    fs::write(
        icon,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16">"#,
            r##"<g><path d="M2 2h12v12H2z"/><polygon points="4,4 12,4 8,12" fill="#000000"/></g>"##,
            r#"</svg>"#,
        ),
    )?;

    let painter = IconPainter::new(AppConfig::default());

    let summary = painter.recolor_file(icon, "#ff8800")?;
    println!(
        "painted {} elements ({} had an existing fill)",
        summary.painted, summary.overwritten
    );

    let destination = Path::new("example_icon.svg.png");
    painter.rasterize_file(icon, destination, 4.0)?;
    println!("wrote {}", destination.display());

    Ok(())
}
