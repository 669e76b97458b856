// Integration tests for the OCR fixture generator.
// Run: cargo test --test fixture_tests
//
// NOTE: The PNG container bytes may differ between png-crate versions, so
// these tests always decode the written file and assert on pixel content,
// never on raw file bytes.

use std::fs::File;
use std::path::Path;

use ocr_fixtures::fixture::{self, BACKGROUND, FOREGROUND, HEIGHT, TEXT_LINES, WIDTH};
use ocr_fixtures::text;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decode a written fixture, returning the frame info and tightly packed
/// RGB pixel bytes.
fn decode(path: &Path) -> (png::OutputInfo, Vec<u8>) {
    let file = File::open(path).expect("open generated fixture");
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().expect("read PNG header");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("decode PNG frame");
    buf.truncate(info.buffer_size());
    (info, buf)
}

fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 3] {
    let i = (y as usize * WIDTH as usize + x as usize) * 3;
    [pixels[i], pixels[i + 1], pixels[i + 2]]
}

const WHITE: [u8; 3] = [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b];
const BLACK: [u8; 3] = [FOREGROUND.r, FOREGROUND.g, FOREGROUND.b];

// ============================================================================
// FILE FORMAT - dimensions, color mode, overwrite semantics
// ============================================================================

#[test]
fn generates_exactly_one_800x600_rgb_png() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_image.png");

    fixture::generate_to(&path).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "expected exactly one new file");

    let (info, _) = decode(&path);
    assert_eq!(info.width, WIDTH);
    assert_eq!(info.height, HEIGHT);
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
}

#[test]
fn second_run_overwrites_the_first() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_image.png");

    // Seed the path with garbage; a rerun must fully replace it.
    std::fs::write(&path, b"not a png").unwrap();
    fixture::generate_to(&path).unwrap();
    fixture::generate_to(&path).unwrap();

    let (info, pixels) = decode(&path);
    assert_eq!((info.width, info.height), (WIDTH, HEIGHT));
    assert_eq!(pixel(&pixels, 0, 0), WHITE);
}

#[test]
fn unwritable_destination_fails_and_leaves_nothing() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("test_image.png");

    let result = fixture::generate_to(&path);
    assert!(result.is_err(), "write into a missing directory must fail");
    assert!(!path.exists(), "no partial file may be left behind");
}

#[test]
fn default_output_path_is_stable() {
    assert_eq!(fixture::OUTPUT_PATH, "test_image.png");
}

// ============================================================================
// PIXEL CONTENT - background, text bands, determinism
// ============================================================================

#[test]
fn background_is_white_outside_the_text_bands() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_image.png");
    fixture::generate_to(&path).unwrap();
    let (_, pixels) = decode(&path);

    assert_eq!(pixel(&pixels, 0, 0), WHITE);

    // Rows between and beyond the bands carry no ink at all.
    for y in [0, 30, 49, 75, 260, 290, 400, HEIGHT - 1] {
        for x in 0..WIDTH {
            assert_eq!(pixel(&pixels, x, y), WHITE, "ink on blank row y={y}");
        }
    }

    // Nothing is drawn left of the x=50 anchor column.
    for y in 0..HEIGHT {
        for x in 0..50 {
            assert_eq!(pixel(&pixels, x, y), WHITE, "ink in left margin at y={y}");
        }
    }
}

#[test]
fn each_text_band_contains_dark_glyphs() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_image.png");
    fixture::generate_to(&path).unwrap();
    let (_, pixels) = decode(&path);

    for &(line, x, y) in &TEXT_LINES {
        let mut ink = 0usize;
        for by in y..y + text::GLYPH_HEIGHT {
            for bx in x..x + text::text_width(line) {
                if pixel(&pixels, bx, by) == BLACK {
                    ink += 1;
                }
            }
        }
        assert!(ink > 0, "band at y={y} has no dark text");
    }
}

#[test]
fn written_file_decodes_to_the_rendered_canvas() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_image.png");
    fixture::generate_to(&path).unwrap();
    let (_, pixels) = decode(&path);

    assert_eq!(pixels.as_slice(), fixture::render().data());
}

#[test]
fn repeated_runs_decode_to_identical_pixels() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    fixture::generate_to(&first).unwrap();
    fixture::generate_to(&second).unwrap();

    assert_eq!(decode(&first).1, decode(&second).1);
}
