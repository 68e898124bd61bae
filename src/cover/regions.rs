//! Cover region mapper - cuts one wraparound print image into per-face UV rectangles
//!
//! A case-laminate cover is printed as a single image laid out front, spine,
//! back from left to right, with a uniform bleed strip around the outside that
//! the printer trims off. Each book face must sample only its own sub-rectangle
//! of that image: horizontal bleed exists only at the two outer edges (the
//! front-spine and spine-back boundaries are fold lines, not trim lines), while
//! vertical bleed is trimmed from every face.

use bevy::math::{Affine2, Vec2};
use bevy::prelude::Resource;
use thiserror::Error;

use crate::constants::*;

/// Physical measurements of the book and its wraparound print image.
/// All values share one linear unit (inches in the bundled template).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalDims {
    pub book_height: f32,
    /// Width of a single cover face
    pub cover_width: f32,
    pub spine_depth: f32,
    pub cover_thickness: f32,
    /// Front + spine + back, including horizontal bleed
    pub total_image_width: f32,
    pub image_height: f32,
    pub bleed_margin: f32,
}

impl Default for PhysicalDims {
    fn default() -> Self {
        Self {
            book_height: BOOK_HEIGHT,
            cover_width: COVER_WIDTH,
            spine_depth: SPINE_DEPTH,
            cover_thickness: COVER_THICKNESS,
            total_image_width: TOTAL_IMAGE_WIDTH,
            image_height: IMAGE_HEIGHT,
            bleed_margin: BLEED_MARGIN,
        }
    }
}

/// An axis-aligned sub-rectangle of a normalized texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRegion {
    pub offset_u: f32,
    pub offset_v: f32,
    pub scale_u: f32,
    pub scale_v: f32,
}

impl UvRegion {
    /// UV transform mapping a mesh's [0,1]² coordinates into this region,
    /// suitable for `StandardMaterial::uv_transform`
    pub fn to_affine(self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            Vec2::new(self.scale_u, self.scale_v),
            0.0,
            Vec2::new(self.offset_u, self.offset_v),
        )
    }
}

/// One region per book face, in image order
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct CoverRegions {
    pub front: UvRegion,
    pub spine: UvRegion,
    pub back: UvRegion,
}

/// Configuration errors from degenerate measurements
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    #[error("bleed margin {bleed}\" leaves no printable width on a {width}\" cover face")]
    BleedExceedsCoverWidth { bleed: f32, width: f32 },
    #[error("bleed margin {bleed}\" leaves no printable height on a {height}\" image")]
    BleedExceedsImageHeight { bleed: f32, height: f32 },
}

/// Partition the wraparound image into front, spine, and back regions.
///
/// The three regions tile the horizontal extent exactly (no gap or overlap at
/// the fold lines) apart from the two bleed strips removed at the outer edges,
/// so printed art crossing a hinge stays unbroken. The back fraction is taken
/// as the remainder of the front and spine fractions rather than recomputed
/// from `cover_width`, which keeps the tiling exact even when the template's
/// measurements don't sum perfectly.
pub fn compute_cover_regions(dims: &PhysicalDims) -> Result<CoverRegions, RegionError> {
    if dims.bleed_margin >= dims.cover_width {
        return Err(RegionError::BleedExceedsCoverWidth {
            bleed: dims.bleed_margin,
            width: dims.cover_width,
        });
    }
    if dims.bleed_margin >= dims.image_height / 2.0 {
        return Err(RegionError::BleedExceedsImageHeight {
            bleed: dims.bleed_margin,
            height: dims.image_height,
        });
    }

    let front_frac = dims.cover_width / dims.total_image_width;
    let spine_frac = dims.spine_depth / dims.total_image_width;
    let back_frac = 1.0 - front_frac - spine_frac;

    let bleed_u = dims.bleed_margin / dims.total_image_width;
    let bleed_v = dims.bleed_margin / dims.image_height;

    // Every face is trimmed vertically; top and bottom are outer edges for all three.
    let offset_v = bleed_v;
    let scale_v = 1.0 - 2.0 * bleed_v;

    let regions = CoverRegions {
        // Outer edge of the front face is the image's left edge.
        front: UvRegion {
            offset_u: bleed_u,
            offset_v,
            scale_u: front_frac - bleed_u,
            scale_v,
        },
        // Both spine edges are fold lines shared with the covers; no horizontal trim.
        spine: UvRegion {
            offset_u: front_frac,
            offset_v,
            scale_u: spine_frac,
            scale_v,
        },
        // Outer edge of the back face is the image's right edge.
        back: UvRegion {
            offset_u: front_frac + spine_frac,
            offset_v,
            scale_u: back_frac - bleed_u,
            scale_v,
        },
    };

    // The remainder computation can still go degenerate when the template's
    // widths disagree badly with the image width.
    if regions.back.scale_u <= 0.0 || regions.spine.scale_u < 0.0 {
        return Err(RegionError::BleedExceedsCoverWidth {
            bleed: dims.bleed_margin,
            width: dims.cover_width,
        });
    }

    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn template() -> PhysicalDims {
        PhysicalDims::default()
    }

    #[test]
    fn test_regions_tile_contiguously() {
        let r = compute_cover_regions(&template()).unwrap();

        // Fold lines: no gap or overlap between adjacent faces
        assert!(((r.front.offset_u + r.front.scale_u) - r.spine.offset_u).abs() < EPS);
        assert!(((r.spine.offset_u + r.spine.scale_u) - r.back.offset_u).abs() < EPS);

        // Right bleed strip is all that remains after the back face
        let right_edge = r.back.offset_u + r.back.scale_u;
        let bleed_u = template().bleed_margin / template().total_image_width;
        assert!((right_edge - (1.0 - bleed_u)).abs() < EPS);
    }

    #[test]
    fn test_vertical_trim_identical_on_all_faces() {
        let dims = template();
        let r = compute_cover_regions(&dims).unwrap();
        let bleed_v = dims.bleed_margin / dims.image_height;

        for region in [r.front, r.spine, r.back] {
            assert!((region.offset_v - bleed_v).abs() < EPS);
            assert!((region.scale_v - (1.0 - 2.0 * bleed_v)).abs() < EPS);
            assert!(region.offset_u + region.scale_u <= 1.0 + EPS);
            assert!(region.offset_v + region.scale_v <= 1.0 + EPS);
        }
    }

    #[test]
    fn test_square_template_reference_values() {
        // 8.25" square trim, 0.593" spine, 0.125" bleed
        let dims = PhysicalDims {
            total_image_width: 10.593,
            cover_width: 5.0,
            spine_depth: 0.593,
            image_height: 8.25,
            bleed_margin: 0.125,
            ..template()
        };
        let r = compute_cover_regions(&dims).unwrap();

        let tol = 1e-3;
        assert!((r.front.offset_u - 0.0118).abs() < tol);
        assert!((r.front.scale_u - 0.4598).abs() < tol);
        assert!((r.front.offset_v - 0.01515).abs() < tol);
        assert!((r.front.scale_v - 0.9697).abs() < tol);
        assert!((r.spine.offset_u - 0.4719).abs() < tol);
        assert!((r.spine.scale_u - 0.05599).abs() < tol);
        assert!((r.back.offset_u - 0.5279).abs() < tol);
        assert!((r.back.scale_u - 0.4598).abs() < tol);
    }

    #[test]
    fn test_bleed_wider_than_cover_is_rejected() {
        let dims = PhysicalDims {
            bleed_margin: 5.0,
            ..template()
        };
        assert_eq!(
            compute_cover_regions(&dims),
            Err(RegionError::BleedExceedsCoverWidth { bleed: 5.0, width: 5.0 })
        );
    }

    #[test]
    fn test_bleed_taller_than_half_image_is_rejected() {
        let dims = PhysicalDims {
            bleed_margin: 4.2,
            ..template()
        };
        assert_eq!(
            compute_cover_regions(&dims),
            Err(RegionError::BleedExceedsImageHeight { bleed: 4.2, height: 8.25 })
        );
    }

    #[test]
    fn test_zero_bleed_tiles_the_whole_image() {
        let dims = PhysicalDims {
            bleed_margin: 0.0,
            ..template()
        };
        let r = compute_cover_regions(&dims).unwrap();
        assert!((r.front.offset_u).abs() < EPS);
        assert!((r.back.offset_u + r.back.scale_u - 1.0).abs() < EPS);
        assert!((r.front.scale_v - 1.0).abs() < EPS);
    }

    #[test]
    fn test_affine_maps_corners_into_region() {
        let r = compute_cover_regions(&template()).unwrap();
        let affine = r.front.to_affine();

        let lo = affine.transform_point2(Vec2::ZERO);
        let hi = affine.transform_point2(Vec2::ONE);
        assert!((lo.x - r.front.offset_u).abs() < EPS);
        assert!((lo.y - r.front.offset_v).abs() < EPS);
        assert!((hi.x - (r.front.offset_u + r.front.scale_u)).abs() < EPS);
        assert!((hi.y - (r.front.offset_v + r.front.scale_v)).abs() < EPS);
    }
}
