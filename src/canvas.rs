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

//! In-memory RGB raster canvas with PNG serialization.
//!
//! The canvas is a tightly packed row-major buffer of 3-byte RGB pixels,
//! indexed as `(y * width + x) * 3`. Draw operations clip at the canvas
//! edges rather than erroring, so callers can blit without bounds checks.
//!
//! Serialization encodes the whole canvas to an in-memory PNG buffer first
//! and only then touches the filesystem with a single write. A run that
//! fails before or during encoding therefore never leaves a partial file
//! behind: either the previous file at the path survives untouched, or no
//! file exists.

use bytes::{BufMut, BytesMut};
use std::path::Path;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Uniform white, the fixture background.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Uniform black, the fixture ink color.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A fixed-size RGB raster buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocates a canvas filled entirely with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Canvas {
            width,
            height,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major RGB, `width * 3` bytes per row.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Writes one pixel. Coordinates outside the canvas are clipped (no-op).
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Reads one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the canvas. Intended for assertions in
    /// tests, where an out-of-bounds read is a bug in the test itself.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} canvas",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Encodes the canvas as an 8-bit RGB PNG into an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG encoder rejects the canvas (for example
    /// a zero-sized canvas) or fails while compressing the pixel data.
    pub fn encode_png(&self) -> std::io::Result<Vec<u8>> {
        let mut out = BytesMut::with_capacity(self.data.len() / 4).writer();
        let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(out.into_inner().to_vec())
    }

    /// Encodes the canvas and writes it to `path`, replacing any existing
    /// file. Encoding completes in memory before the filesystem is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails or if `path` cannot be
    /// written (missing directory, permissions, disk full).
    pub fn write_png(&self, path: &Path) -> std::io::Result<()> {
        let encoded = self.encode_png()?;
        std::fs::write(path, &encoded).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {e}", path.display()),
            )
        })
    }
}
