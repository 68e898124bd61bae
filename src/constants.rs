//! Tunable constants for folio
//!
//! Physical book measurements and viewer values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// PHYSICAL BOOK MEASUREMENTS (inches, 8.25" square trim case-laminate template)
// =============================================================================

/// Trimmed book height
pub const BOOK_HEIGHT: f32 = 8.0;
/// Width of a single cover face (front or back)
pub const COVER_WIDTH: f32 = 5.0;
/// Thickness of the page block, i.e. the spine width on the wrap template
pub const SPINE_DEPTH: f32 = 0.593;
/// Board thickness of one cover
pub const COVER_THICKNESS: f32 = 0.12;
/// Full width of the wraparound print image (front + spine + back, with bleed)
pub const TOTAL_IMAGE_WIDTH: f32 = 10.593;
/// Full height of the wraparound print image (with bleed)
pub const IMAGE_HEIGHT: f32 = 8.25;
/// Print bleed trimmed off every outer edge
pub const BLEED_MARGIN: f32 = 0.125;

// =============================================================================
// HINGE ANIMATION
// =============================================================================

/// Total opening between the two covers when the book is open.
/// Each hinge swings half of this away from the closed pose.
pub const MAX_OPEN_ANGLE: f32 = std::f32::consts::PI * 0.75;
/// Smoothing time constant for the critically-damped hinge approach (seconds)
pub const HINGE_DAMPING: f32 = 0.08;

// =============================================================================
// SCENE COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.13, 0.12, 0.11);
pub const PAPER_COLOR: Color = Color::srgb(0.93, 0.91, 0.86);

// =============================================================================
// CAMERA / LIGHTING
// =============================================================================

/// Camera position relative to the book (book is centered near the origin)
pub const CAMERA_POSITION: Vec3 = Vec3::new(4.0, 6.5, 13.0);
/// Point the camera looks at (slightly up the spine)
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
pub const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 250.0;

// =============================================================================
// PAGE BLOCK
// =============================================================================

/// How far the page block is inset from the cover edges (trim allowance look)
pub const PAGE_INSET: f32 = 0.1;

// =============================================================================
// VIEWPORT PRESETS
// =============================================================================

/// Available window sizes: (width, height, label)
pub const VIEWPORT_PRESETS: &[(f32, f32, &str)] = &[
    (1280.0, 800.0, "1280x800 (compact)"),
    (1600.0, 900.0, "1600x900"),
    (1920.0, 1080.0, "1920x1080 (1080p)"),
    (2560.0, 1440.0, "2560x1440 (1440p)"),
];

/// Default viewport preset index
pub const DEFAULT_VIEWPORT_INDEX: usize = 1;
