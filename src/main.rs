//! Folio - a 3D picture-book cover viewer
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use folio::{
    BookOpen, COVERS_FILE, CoverArtDatabase, CurrentArtwork, CurrentSettings, PhysicalDims,
    animate_hinges, capture_input, compute_cover_regions, constants::*, save_settings_system,
    setup_scene, swap_artwork,
};

fn main() {
    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Save settings on first run to ensure file exists
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    // The physical template is fixed at compile time; a degenerate bleed setup
    // is a configuration error and there is nothing sensible to render.
    let regions = match compute_cover_regions(&PhysicalDims::default()) {
        Ok(regions) => regions,
        Err(e) => {
            eprintln!("Invalid cover template: {e}");
            std::process::exit(1);
        }
    };

    let cover_db = CoverArtDatabase::load_or_default(COVERS_FILE);

    // Clamp loaded selections to valid ranges
    let viewport_index = current_settings
        .settings
        .viewport_index
        .min(VIEWPORT_PRESETS.len() - 1);
    let artwork_index = current_settings
        .settings
        .artwork_index
        .min(cover_db.len().saturating_sub(1));
    let (viewport_width, viewport_height, _) = VIEWPORT_PRESETS[viewport_index];

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: bevy::window::WindowResolution::new(
                    viewport_width as u32,
                    viewport_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Folio".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        })
        .insert_resource(regions)
        .insert_resource(cover_db)
        .insert_resource(CurrentArtwork(artwork_index))
        .insert_resource(current_settings)
        .init_resource::<BookOpen>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                capture_input,
                swap_artwork,
                animate_hinges,
                save_settings_system,
            )
                .chain(),
        )
        .run();
}
