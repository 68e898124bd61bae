//! Cover artwork library - which wraparound images are available and which is shown
//!
//! The list of print files lives in `assets/covers.txt` so new artwork can be
//! dropped in without recompiling. One decoded image backs all three face
//! materials; swapping artwork only repoints the texture handle, the regions
//! themselves never change for a given physical template.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::book::CoverMaterials;

/// Path to the cover list file
pub const COVERS_FILE: &str = "assets/covers.txt";

/// Asset paths written by the generator binary, used when no list file exists
const DEFAULT_COVERS: [&str; 3] = ["cover_0.png", "cover_1.png", "cover_2.png"];

/// All wraparound images the viewer can cycle through
#[derive(Resource)]
pub struct CoverArtDatabase {
    pub files: Vec<String>,
}

impl CoverArtDatabase {
    /// Load the cover list, falling back to the generated defaults if the
    /// file is missing or holds no entries
    pub fn load_or_default(path: &str) -> Self {
        let content = match fs::read_to_string(Path::new(path)) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read cover list {}: {}, using defaults", path, e);
                return Self::defaults();
            }
        };

        let files = Self::parse(&content);
        if files.is_empty() {
            warn!("No covers listed in {}, using defaults", path);
            return Self::defaults();
        }

        info!("Loaded {} covers from {}", files.len(), path);
        Self { files }
    }

    /// Parse `cover: <asset path>` lines; `#` starts a comment
    pub fn parse(content: &str) -> Vec<String> {
        let mut files = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(file) = line.strip_prefix("cover:") {
                files.push(file.trim().to_string());
            }
        }
        files
    }

    fn defaults() -> Self {
        Self {
            files: DEFAULT_COVERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Asset path for an index, wrapping past the end
    pub fn get(&self, index: usize) -> &str {
        &self.files[index % self.files.len()]
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Index of the artwork currently on the book
#[derive(Resource, Default)]
pub struct CurrentArtwork(pub usize);

/// Point the three face materials at the newly selected image.
/// Runs on selection change only (including the initial insert), never per frame.
pub fn swap_artwork(
    current: Res<CurrentArtwork>,
    db: Res<CoverArtDatabase>,
    asset_server: Res<AssetServer>,
    cover_mats: Res<CoverMaterials>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !current.is_changed() {
        return;
    }

    let path = db.get(current.0).to_string();
    info!("Showing cover artwork: {}", path);
    let texture: Handle<Image> = asset_server.load(path);

    for handle in [&cover_mats.front, &cover_mats.spine, &cover_mats.back] {
        if let Some(material) = materials.get_mut(handle) {
            material.base_color_texture = Some(texture.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cover_lines() {
        let content = "\
# my covers
cover: gallery/forest.png

cover: gallery/ocean.png
palette: not a cover
cover:tight.png
";
        let files = CoverArtDatabase::parse(content);
        assert_eq!(files, vec!["gallery/forest.png", "gallery/ocean.png", "tight.png"]);
    }

    #[test]
    fn test_parse_ignores_garbage() {
        assert!(CoverArtDatabase::parse("nothing here\n# comment\n").is_empty());
    }

    #[test]
    fn test_get_wraps_past_end() {
        let db = CoverArtDatabase {
            files: vec!["a.png".into(), "b.png".into()],
        };
        assert_eq!(db.get(0), "a.png");
        assert_eq!(db.get(3), "b.png");
    }
}
