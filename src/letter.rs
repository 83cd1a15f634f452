// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The procedural pipeline: a single letter centered on a solid background.

use std::path::Path;

use tiny_skia::{FillRule, Paint, Pixmap, Transform};
use usvg::fontdb;

/// The character drawn on every icon.
pub const GLYPH: char = 'H';

/// Font size relative to the icon size.
const FONT_SCALE: f32 = 0.7;

/// Background `#4285f4`, foreground white.
const BACKGROUND: (u8, u8, u8) = (66, 133, 244);
const FOREGROUND: (u8, u8, u8) = (255, 255, 255);

/// Font candidates tried in order. Each failure is absorbed silently;
/// when all fail, a built-in glyph is used instead.
const FONT_CANDIDATES: &[FontCandidate] = &[
    FontCandidate::Family("Arial"),
    FontCandidate::Family("Liberation Sans"),
    FontCandidate::File("C:/Windows/Fonts/arial.ttf"),
    FontCandidate::File("/Library/Fonts/Arial.ttf"),
    FontCandidate::File("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
    FontCandidate::File("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

enum FontCandidate {
    /// A family lookup in the system font database.
    Family(&'static str),
    /// A font file loaded directly from disk.
    File(&'static str),
}

/// Draws the letter icon and writes it to `output_path` as PNG,
/// printing a confirmation.
pub fn create_icon(size: u32, output_path: &Path, fontdb: &fontdb::Database) -> Result<(), String> {
    let pixmap = render_letter_icon(size, fontdb)?;

    pixmap
        .save_png(output_path)
        .map_err(|e| format!("failed to write {}: {}", output_path.display(), e))?;

    println!("Created {} ({}x{})", output_path.display(), size, size);
    Ok(())
}

/// Renders the letter icon onto a square pixmap of the given size.
pub fn render_letter_icon(size: u32, fontdb: &fontdb::Database) -> Result<Pixmap, String> {
    render_with_candidates(size, fontdb, FONT_CANDIDATES)
}

fn render_with_candidates(
    size: u32,
    fontdb: &fontdb::Database,
    candidates: &[FontCandidate],
) -> Result<Pixmap, String> {
    let mut pixmap =
        Pixmap::new(size, size).ok_or_else(|| "target size is zero".to_string())?;

    let (r, g, b) = BACKGROUND;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    let font_size = size as f32 * FONT_SCALE;
    let glyph = resolve_glyph(fontdb, candidates, GLYPH);

    // Font outlines are y-up in em units; flip into pixmap coordinates
    // before measuring.
    let scale = font_size / glyph.units_per_em as f32;
    let path = glyph
        .path
        .transform(Transform::from_scale(scale, -scale))
        .ok_or_else(|| "glyph outline is not finite".to_string())?;

    // Center the ink bounding box, correcting for its offset from the origin.
    let bbox = path.bounds();
    let dx = (size as f32 - bbox.width()) / 2.0 - bbox.x();
    let dy = (size as f32 - bbox.height()) / 2.0 - bbox.y();
    let path = path
        .transform(Transform::from_translate(dx, dy))
        .ok_or_else(|| "glyph outline is not finite".to_string())?;

    let mut paint = Paint::default();
    let (r, g, b) = FOREGROUND;
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    Ok(pixmap)
}

/// A glyph outline in font units, y-up.
struct Glyph {
    path: tiny_skia::Path,
    units_per_em: u16,
}

fn resolve_glyph(fontdb: &fontdb::Database, candidates: &[FontCandidate], c: char) -> Glyph {
    for candidate in candidates {
        let glyph = match candidate {
            FontCandidate::Family(name) => outline_from_family(fontdb, name, c),
            FontCandidate::File(path) => {
                std::fs::read(path).ok().and_then(|data| outline_face(&data, 0, c))
            }
        };

        if let Some(glyph) = glyph {
            return glyph;
        }
    }

    fallback_glyph()
}

fn outline_from_family(fontdb: &fontdb::Database, family: &str, c: char) -> Option<Glyph> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = fontdb.query(&query)?;
    fontdb.with_face_data(id, |data, face_index| outline_face(data, face_index, c))?
}

fn outline_face(data: &[u8], face_index: u32, c: char) -> Option<Glyph> {
    let face = ttf_parser::Face::parse(data, face_index).ok()?;
    let glyph_id = face.glyph_index(c)?;

    let mut builder = PathBuilder {
        path: tiny_skia::PathBuilder::new(),
    };
    face.outline_glyph(glyph_id, &mut builder)?;

    let path = builder.path.finish()?;
    Some(Glyph {
        path,
        units_per_em: face.units_per_em(),
    })
}

/// The terminal fallback: a blocky capital H in a 1000-unit em square.
/// Always available, so font resolution alone can never fail.
fn fallback_glyph() -> Glyph {
    let mut pb = tiny_skia::PathBuilder::new();
    push_rect(&mut pb, 120.0, 0.0, 160.0, 700.0);
    push_rect(&mut pb, 720.0, 0.0, 160.0, 700.0);
    push_rect(&mut pb, 280.0, 290.0, 440.0, 120.0);

    // Unwrap is safe, because the path is never empty.
    Glyph {
        path: pb.finish().unwrap(),
        units_per_em: 1000,
    }
}

fn push_rect(pb: &mut tiny_skia::PathBuilder, x: f32, y: f32, w: f32, h: f32) {
    pb.move_to(x, y);
    pb.line_to(x + w, y);
    pb.line_to(x + w, y + h);
    pb.line_to(x, y + h);
    pb.close();
}

struct PathBuilder {
    path: tiny_skia::PathBuilder,
}

impl ttf_parser::OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path.close();
    }
}
