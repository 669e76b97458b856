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

//! Deterministic raster test-image generation for OCR test suites.
//!
//! This crate produces a single fixed fixture: an 800x600 RGB PNG with six
//! known lines of black text on a white background, written to
//! `test_image.png`. The downstream OCR suite feeds that file to a
//! recognizer and asserts on the extracted text, so the image must be
//! identical on every platform and every run.
//!
//! # Generation Process
//!
//! 1. Allocate an 800x600 RGB canvas filled with white.
//! 2. Blit each of the six text lines at its fixed anchor, using the
//!    compiled-in 8x8 bitmap glyph set (no font file on disk).
//! 3. Encode the canvas to PNG fully in memory, then write the file in a
//!    single operation so no partial output can exist.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixture
//! ```
//!
//! or from code:
//!
//! ```no_run
//! ocr_fixtures::generate().expect("fixture generation failed");
//! ```
//!
//! Errors (unwritable directory, encoder failure) surface as
//! [`std::io::Error`]; there is no retry or fallback. The tool is a
//! one-shot generator meant to be re-run manually.

pub mod canvas;
pub mod fixture;
pub mod text;

pub use canvas::{Canvas, Rgb};
pub use fixture::{generate, generate_to, render};
