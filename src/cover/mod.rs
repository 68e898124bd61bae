//! Wraparound cover image partitioning

mod regions;

pub use regions::{CoverRegions, PhysicalDims, RegionError, UvRegion, compute_cover_regions};
