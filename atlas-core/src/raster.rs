use std::path::Path;

use anyhow::{Context, Result};
use svg::Document;
use tiny_skia::Pixmap;

/// Writes `document` to `path`, replacing any existing file.
///
/// An `.svg` extension keeps the vector form; every other extension goes
/// through the rasterizer and comes out PNG-encoded.
pub(crate) fn save(document: &Document, path: &Path) -> Result<()> {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        svg::save(path, document)
            .with_context(|| format!("failed to save SVG to {}", path.display()))?;

        return Ok(());
    }

    let scene = document.to_string();

    let options = {
        let mut options = usvg::Options::default();

        // Label text falls back to whatever fonts the host has.
        options.fontdb_mut().load_system_fonts();

        options
    };

    let tree = usvg::Tree::from_str(&scene, &options)?;
    let size = tree.size().to_int_size();

    let mut pixmap = Pixmap::new(size.width(), size.height())
        .with_context(|| format!("invalid canvas size {}x{}", size.width(), size.height()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("failed to save PNG to {}", path.display()))?;

    Ok(())
}
