//! Test Fixture Generator
//!
//! Generates the deterministic test image consumed by the OCR test suite.
//! The pixel content is identical on every platform (constant text, constant
//! glyph set, no randomness); the PNG container bytes may vary between
//! encoder versions, so consumers compare decoded pixels, not file bytes.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixture
//! ```
//!
//! Takes no arguments and reads no environment variables.
//!
//! # Generated Files
//!
//! - `test_image.png` (800x600, 8-bit RGB)
//!   - White background with six lines of black text, anchored at x=50,
//!     y in {50, 100, 150, 200, 300, 350}: a title line, three sentence
//!     lines, a digits line, and a punctuation line, so the OCR suite can
//!     exercise letters, numbers, and special characters separately.
//!
//! Any prior file at the output path is replaced. On failure (unwritable
//! directory, encoder error) the process exits non-zero and the previous
//! file, if any, is left untouched.

use ocr_fixtures::fixture::{generate, HEIGHT, OUTPUT_PATH, WIDTH};

fn main() -> std::io::Result<()> {
    generate()?;
    println!("Generated {OUTPUT_PATH} ({WIDTH}x{HEIGHT} RGB)");
    Ok(())
}
