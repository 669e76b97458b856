// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Monospace bitmap text rasterization.
//!
//! Text is drawn with the `font8x8` basic glyph set: 8x8 pixel bitmaps for
//! the ASCII range, compiled into the binary as constant data. No font file
//! is loaded from disk, so rendering is byte-identical on every platform.
//!
//! Each glyph row is one byte, least significant bit leftmost. Set bits are
//! painted in the ink color; unset bits leave the canvas untouched, so text
//! composes over whatever is already drawn. There is no anti-aliasing and
//! no kerning: every character advances exactly [`GLYPH_WIDTH`] pixels.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::canvas::{Canvas, Rgb};

/// Horizontal advance per character, in pixels.
pub const GLYPH_WIDTH: u32 = 8;
/// Glyph height, in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

/// Draws `text` with its top-left corner at `(x, y)`.
///
/// Characters without a glyph in the basic set advance the pen without
/// painting anything. Pixels falling outside the canvas are clipped.
pub fn draw_text(canvas: &mut Canvas, x: u32, y: u32, ink: Rgb, text: &str) {
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            draw_glyph(canvas, pen_x, y, ink, &glyph);
        }
        pen_x = pen_x.saturating_add(GLYPH_WIDTH);
    }
}

/// Width of `text` in pixels at the fixed monospace advance.
#[must_use]
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH
}

/// Blits a single 8x8 glyph bitmap, LSB-leftmost rows.
fn draw_glyph(canvas: &mut Canvas, x: u32, y: u32, ink: Rgb, rows: &[u8; 8]) {
    for (dy, row) in rows.iter().enumerate() {
        for dx in 0..8u32 {
            if row & (1 << dx) != 0 {
                canvas.put_pixel(x + dx, y + dy as u32, ink);
            }
        }
    }
}
