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

//! The OCR test-image fixture.
//!
//! A single deterministic 800x600 RGB image: six lines of black text on a
//! white background, at positions chosen so every line sits in its own
//! horizontal band. The downstream OCR suite asserts against this exact
//! content, so everything here is a compile-time constant and the rendered
//! pixels are identical on every platform (the PNG container may differ
//! between encoder versions; compare decoded pixels, not file bytes).

use std::path::Path;

use crate::canvas::{Canvas, Rgb};
use crate::text;

/// Canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Canvas height in pixels.
pub const HEIGHT: u32 = 600;
/// Background fill.
pub const BACKGROUND: Rgb = Rgb::WHITE;
/// Text ink.
pub const FOREGROUND: Rgb = Rgb::BLACK;
/// Output path, relative to the current working directory.
pub const OUTPUT_PATH: &str = "test_image.png";

/// The fixture's text content: `(text, x, y)` with `(x, y)` the top-left
/// anchor of the line. Drawn in order; the y-bands are disjoint, so order
/// never affects the output.
pub const TEXT_LINES: [(&str, u32, u32); 6] = [
    ("OCR Test Document", 50, 50),
    (
        "This is a sample text document to test OCR functionality.",
        50,
        100,
    ),
    ("It includes multiple lines of text", 50, 150),
    ("with different content.", 50, 200),
    ("Numbers: 123 456 789", 50, 300),
    ("Special characters: @ # $ %", 50, 350),
];

/// Renders the fixture canvas. Pure: no I/O, same pixels every run.
#[must_use]
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    for &(line, x, y) in &TEXT_LINES {
        text::draw_text(&mut canvas, x, y, FOREGROUND, line);
    }

    #[cfg(feature = "debug-logging")]
    log::info!(
        "rendered {}x{} fixture canvas, {} text lines",
        WIDTH,
        HEIGHT,
        TEXT_LINES.len()
    );

    canvas
}

/// Renders the fixture and writes it to [`OUTPUT_PATH`] in the current
/// working directory, replacing any existing file.
///
/// # Errors
///
/// Returns an error if PNG encoding fails or the working directory is not
/// writable. No partial file is left behind in either case.
pub fn generate() -> std::io::Result<()> {
    generate_to(OUTPUT_PATH)
}

/// Renders the fixture and writes it to `path`, replacing any existing
/// file. The binary uses the fixed [`OUTPUT_PATH`]; tests pass scratch
/// paths.
///
/// # Errors
///
/// Returns an error if PNG encoding fails or `path` cannot be written.
pub fn generate_to<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    render().write_png(path)?;

    #[cfg(feature = "debug-logging")]
    log::info!("wrote fixture to {}", path.display());

    Ok(())
}
