//! Placeholder wraparound cover generator
//!
//! Generates print-ready wraparound cover images (front + spine + back with
//! bleed) so the viewer runs out of the box, plus the covers.txt list file.
//! Panels get distinct colors and a band crossing both fold lines, which makes
//! seam misalignment visible immediately in the viewer.
//!
//! Run with: `cargo run --bin generate_cover`

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::fs;

use folio::constants::*;

/// Output resolution in pixels per inch
const DPI: f32 = 150.0;

const COVERS_LIST: &str = "assets/covers.txt";

/// Candidate system fonts for panel labels; labels are skipped if none exists
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

/// One placeholder artwork: panel and accent colors
struct CoverPalette {
    name: &'static str,
    front: [u8; 4],
    spine: [u8; 4],
    back: [u8; 4],
    band: [u8; 4],
}

const PALETTES: &[CoverPalette] = &[
    CoverPalette {
        name: "forest",
        front: [46, 89, 52, 255],
        spine: [30, 58, 34, 255],
        back: [64, 110, 68, 255],
        band: [230, 197, 92, 255],
    },
    CoverPalette {
        name: "ocean",
        front: [38, 70, 119, 255],
        spine: [24, 46, 82, 255],
        back: [56, 96, 150, 255],
        band: [214, 234, 248, 255],
    },
    CoverPalette {
        name: "ember",
        front: [140, 58, 41, 255],
        spine: [96, 38, 28, 255],
        back: [176, 84, 56, 255],
        band: [240, 220, 180, 255],
    },
];

fn load_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                println!("Using label font: {}", path);
                return Some(font);
            }
        }
    }
    println!("No label font found, generating covers without text");
    None
}

fn px(inches: f32) -> u32 {
    (inches * DPI).round() as u32
}

fn generate_cover(palette: &CoverPalette, font: Option<&FontVec>) -> RgbaImage {
    let width = px(TOTAL_IMAGE_WIDTH);
    let height = px(IMAGE_HEIGHT);
    let mut img = RgbaImage::new(width, height);

    // Panel boundaries are the fold lines, measured from the left image edge
    let front_end = px(COVER_WIDTH);
    let spine_end = px(COVER_WIDTH + SPINE_DEPTH);

    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(front_end, height),
        Rgba(palette.front),
    );
    draw_filled_rect_mut(
        &mut img,
        Rect::at(front_end as i32, 0).of_size(spine_end - front_end, height),
        Rgba(palette.spine),
    );
    draw_filled_rect_mut(
        &mut img,
        Rect::at(spine_end as i32, 0).of_size(width - spine_end, height),
        Rgba(palette.back),
    );

    // Accent band across all three panels; any seam error shows as a break
    let band_height = height / 8;
    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, (height / 2 - band_height / 2) as i32).of_size(width, band_height),
        Rgba(palette.band),
    );

    // Trim frame: everything outside this rectangle is bleed
    let bleed = px(BLEED_MARGIN);
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(bleed as i32, bleed as i32).of_size(width - 2 * bleed, height - 2 * bleed),
        Rgba([255, 255, 255, 255]),
    );

    if let Some(font) = font {
        let scale = PxScale::from(DPI * 0.5);
        let label_y = (height / 4) as i32;
        let white = Rgba([255, 255, 255, 255]);
        draw_text_mut(&mut img, white, (front_end / 3) as i32, label_y, scale, font, "FRONT");
        draw_text_mut(
            &mut img,
            white,
            (spine_end + (width - spine_end) / 3) as i32,
            label_y,
            scale,
            font,
            "BACK",
        );
    }

    img
}

fn main() {
    fs::create_dir_all("assets").expect("Failed to create assets directory");

    let font = load_font();
    let mut list = String::from("# Folio cover artwork\n");
    list.push_str("# Format: cover: <path relative to assets/>\n");

    println!("\nGenerating wraparound covers...");
    println!(
        "  {}\" x {}\" at {} DPI ({} x {} px)",
        TOTAL_IMAGE_WIDTH,
        IMAGE_HEIGHT,
        DPI,
        px(TOTAL_IMAGE_WIDTH),
        px(IMAGE_HEIGHT)
    );

    for (index, palette) in PALETTES.iter().enumerate() {
        let filename = format!("assets/cover_{}.png", index);
        let img = generate_cover(palette, font.as_ref());
        img.save(&filename)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", filename, e));
        list.push_str(&format!("cover: cover_{}.png\n", index));
        println!("  Created: {} ({})", filename, palette.name);
    }

    fs::write(COVERS_LIST, list)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", COVERS_LIST, e));
    println!("  Created: {}", COVERS_LIST);
}
