// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use icongen::{letter, ICON_SIZES};
use tiny_skia::Pixmap;
use usvg::fontdb;

const BACKGROUND: (u8, u8, u8) = (66, 133, 244);

fn is_background(pixmap: &Pixmap, x: u32, y: u32) -> bool {
    let px = pixmap.pixel(x, y).unwrap();
    (px.red(), px.green(), px.blue()) == BACKGROUND
}

/// Bounding box of every pixel that differs from the background.
fn ink_bbox(pixmap: &Pixmap) -> (u32, u32, u32, u32) {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0, 0);

    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            if !is_background(pixmap, x, y) {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    assert!(min_x <= max_x, "no ink drawn");
    (min_x, min_y, max_x, max_y)
}

#[test]
fn dimensions_match_each_size() {
    let fontdb = fontdb::Database::new();

    for &size in ICON_SIZES.iter() {
        let pixmap = letter::render_letter_icon(size, &fontdb).unwrap();
        assert_eq!(pixmap.width(), size);
        assert_eq!(pixmap.height(), size);
    }
}

#[test]
fn background_is_uniform_outside_glyph() {
    let fontdb = fontdb::Database::new();

    for &size in ICON_SIZES.iter() {
        let pixmap = letter::render_letter_icon(size, &fontdb).unwrap();

        // The corners must hold the exact background constant; a glyph
        // sized at 70% of the canvas can never reach them.
        for &(x, y) in &[(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
            let px = pixmap.pixel(x, y).unwrap();
            assert_eq!(
                (px.red(), px.green(), px.blue()),
                BACKGROUND,
                "wrong background at {},{}",
                x,
                y
            );
        }

        // The glyph must not swallow the whole canvas, so the border
        // rows and columns stay untouched.
        let (min_x, min_y, max_x, max_y) = ink_bbox(&pixmap);
        assert!(min_x > 0 && min_y > 0, "glyph touches the top-left border");
        assert!(
            max_x < size - 1 && max_y < size - 1,
            "glyph touches the bottom-right border"
        );

        for y in 0..size {
            for x in 0..size {
                let border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
                if border {
                    assert!(is_background(&pixmap, x, y), "stray ink at {},{}", x, y);
                }
            }
        }
    }
}

#[test]
fn glyph_is_centered_within_one_pixel() {
    let fontdb = fontdb::Database::new();

    for &size in ICON_SIZES.iter() {
        let pixmap = letter::render_letter_icon(size, &fontdb).unwrap();
        let (min_x, min_y, max_x, max_y) = ink_bbox(&pixmap);

        let left = min_x as i64;
        let right = size as i64 - 1 - max_x as i64;
        let top = min_y as i64;
        let bottom = size as i64 - 1 - max_y as i64;

        assert!((left - right).abs() <= 1, "off-center horizontally at {}", size);
        assert!((top - bottom).abs() <= 1, "off-center vertically at {}", size);
    }
}

#[test]
fn empty_font_database_still_renders() {
    // Font resolution alone must never fail; with nothing to resolve
    // the built-in glyph takes over.
    let fontdb = fontdb::Database::new();

    let pixmap = letter::render_letter_icon(128, &fontdb).unwrap();
    assert_eq!(pixmap.width(), 128);

    // The glyph core is pure foreground at this size.
    assert!(pixmap
        .pixels()
        .iter()
        .any(|px| (px.red(), px.green(), px.blue()) == (255, 255, 255)));
}

#[test]
fn create_icon_writes_png() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("icon48.png");

    let fontdb = fontdb::Database::new();
    letter::create_icon(48, &out, &fontdb).unwrap();

    let pixmap = Pixmap::load_png(&out).unwrap();
    assert_eq!(pixmap.width(), 48);
    assert_eq!(pixmap.height(), 48);
}

#[test]
fn system_fonts_are_accepted_when_present() {
    // Whichever tier resolves, the output contract is the same.
    let fontdb = icongen::load_system_fontdb();

    let pixmap = letter::render_letter_icon(48, &fontdb).unwrap();
    assert_eq!(pixmap.width(), 48);
    ink_bbox(&pixmap);
}
