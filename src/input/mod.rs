//! Input module - open/close toggle and artwork cycling

use bevy::prelude::*;

use crate::artwork::{CoverArtDatabase, CurrentArtwork};
use crate::hinge::BookOpen;
use crate::settings::CurrentSettings;

/// Runs in Update; the only writer of [`BookOpen`] and [`CurrentArtwork`].
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut open: ResMut<BookOpen>,
    mut current: ResMut<CurrentArtwork>,
    db: Res<CoverArtDatabase>,
    mut settings: ResMut<CurrentSettings>,
) {
    // Open/close toggle (Space / Enter / gamepad South)
    let toggle = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::Enter)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::South));
    if toggle {
        open.0 = !open.0;
        info!("Book {}", if open.0 { "opening" } else { "closing" });
    }

    // Artwork cycling (arrows / brackets / shoulder buttons)
    let next = keyboard.just_pressed(KeyCode::ArrowRight)
        || keyboard.just_pressed(KeyCode::BracketRight)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::RightTrigger));
    let prev = keyboard.just_pressed(KeyCode::ArrowLeft)
        || keyboard.just_pressed(KeyCode::BracketLeft)
        || gamepads
            .iter()
            .any(|gp| gp.just_pressed(GamepadButton::LeftTrigger));

    if (next || prev) && !db.is_empty() {
        let count = db.len();
        current.0 = if next {
            (current.0 + 1) % count
        } else {
            (current.0 + count - 1) % count
        };
        settings.settings.artwork_index = current.0;
        settings.dirty = true;
    }
}
