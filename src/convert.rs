// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The vector-to-raster pipeline: SVG sources in, fixed-size PNGs out.

use crate::IconSpec;

/// Rasterizes each icon in order, printing a confirmation per item.
///
/// The first failure aborts the remaining items; icons already written
/// stay on disk.
pub fn convert_all(specs: &[IconSpec], opt: &usvg::Options) -> Result<(), String> {
    for spec in specs {
        let source = spec
            .source
            .as_ref()
            .ok_or_else(|| "icon has no vector source".to_string())?;

        let svg_text = std::fs::read_to_string(source)
            .map_err(|_| format!("failed to read {}", source.display()))?;

        let pixmap = render_svg_icon(&svg_text, spec.size, opt)
            .map_err(|e| format!("{}: {}", source.display(), e))?;

        pixmap
            .save_png(&spec.output)
            .map_err(|e| format!("failed to write {}: {}", spec.output.display(), e))?;

        println!("Created {} ({}x{})", spec.output.display(), spec.size, spec.size);
    }

    Ok(())
}

/// Renders an SVG document onto a square pixmap of the given size.
///
/// Width and height are scaled independently, so a non-square source is
/// stretched to fill the canvas.
pub fn render_svg_icon(
    svg_text: &str,
    size: u32,
    opt: &usvg::Options,
) -> Result<tiny_skia::Pixmap, String> {
    let tree = usvg::Tree::from_str(svg_text, opt).map_err(|e| e.to_string())?;

    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or_else(|| "target size is zero".to_string())?;

    let ts = tiny_skia::Transform::from_scale(
        size as f32 / tree.size().width(),
        size as f32 / tree.size().height(),
    );
    resvg::render(&tree, ts, &mut pixmap.as_mut());

    Ok(pixmap)
}
