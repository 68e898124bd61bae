//! Folio - a 3D picture-book cover viewer built with Bevy
//!
//! Shows a physical book whose front cover, spine, and back cover are cut from
//! a single wraparound print image. The covers swing open and closed on a
//! toggle with a critically-damped hinge animation.

pub mod artwork;
pub mod book;
pub mod constants;
pub mod cover;
pub mod hinge;
pub mod input;
pub mod settings;

// Re-export commonly used types for convenience
pub use artwork::{COVERS_FILE, CoverArtDatabase, CurrentArtwork, swap_artwork};
pub use book::{Book, CoverMaterials, setup_scene, spawn_book};
pub use constants::*;
pub use cover::{CoverRegions, PhysicalDims, RegionError, UvRegion, compute_cover_regions};
pub use hinge::{BookOpen, Hinge, HingeSide, HingeState, animate_hinges};
pub use input::capture_input;
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
