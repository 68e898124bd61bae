//! Book scene - camera, lights, and the box geometry the core feeds
//!
//! The book stands with its spine on the Y axis and both covers reaching
//! along +X when closed. Each cover hangs off a pivot entity at the spine so
//! the hinge animator only ever writes a rotation; all the dimensions come
//! from the physical constants the region mapper also uses.

use bevy::prelude::*;

use crate::constants::*;
use crate::cover::{CoverRegions, UvRegion};
use crate::hinge::{Hinge, HingeSide};

/// Marker for the book root entity
#[derive(Component)]
pub struct Book;

/// Handles to the three face materials so artwork swaps can repoint their
/// texture without touching the meshes
#[derive(Resource)]
pub struct CoverMaterials {
    pub front: Handle<StandardMaterial>,
    pub spine: Handle<StandardMaterial>,
    pub back: Handle<StandardMaterial>,
}

/// A face material sampling one region of the shared wraparound image.
/// The texture handle is filled in by the artwork swap system.
fn face_material(region: UvRegion) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        uv_transform: region.to_affine(),
        perceptual_roughness: 0.55,
        ..default()
    }
}

/// Spawn camera, lights, and the book
pub fn setup_scene(
    mut commands: Commands,
    regions: Res<CoverRegions>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, 7.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let front_mat = materials.add(face_material(regions.front));
    let spine_mat = materials.add(face_material(regions.spine));
    let back_mat = materials.add(face_material(regions.back));
    let paper_mat = materials.add(StandardMaterial {
        base_color: PAPER_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });

    spawn_book(
        &mut commands,
        &mut meshes,
        front_mat.clone(),
        spine_mat.clone(),
        back_mat.clone(),
        paper_mat,
    );

    commands.insert_resource(CoverMaterials {
        front: front_mat,
        spine: spine_mat,
        back: back_mat,
    });
}

/// Spawn the book hierarchy: spine and page block fixed, covers on hinge pivots
pub fn spawn_book(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    front_mat: Handle<StandardMaterial>,
    spine_mat: Handle<StandardMaterial>,
    back_mat: Handle<StandardMaterial>,
    paper_mat: Handle<StandardMaterial>,
) {
    let cover_mesh = meshes.add(Cuboid::new(COVER_WIDTH, BOOK_HEIGHT, COVER_THICKNESS));
    let spine_mesh = meshes.add(Cuboid::new(
        COVER_THICKNESS,
        BOOK_HEIGHT,
        SPINE_DEPTH + 2.0 * COVER_THICKNESS,
    ));
    let pages_mesh = meshes.add(Cuboid::new(
        COVER_WIDTH - PAGE_INSET,
        BOOK_HEIGHT - 2.0 * PAGE_INSET,
        SPINE_DEPTH,
    ));

    // Closed pose: front plate toward the camera, back plate behind the pages
    let plate_z = (SPINE_DEPTH + COVER_THICKNESS) / 2.0;

    commands
        .spawn((Book, Transform::default(), Visibility::default()))
        .with_children(|book| {
            // Front cover pivot at the spine axis
            book.spawn((
                Transform::from_xyz(0.0, 0.0, plate_z),
                Visibility::default(),
                Hinge::new(HingeSide::FrontCover),
            ))
            .with_children(|pivot| {
                pivot.spawn((
                    Mesh3d(cover_mesh.clone()),
                    MeshMaterial3d(front_mat),
                    Transform::from_xyz(COVER_WIDTH / 2.0, 0.0, 0.0),
                ));
            });

            // Back cover pivot, mirrored across the page block
            book.spawn((
                Transform::from_xyz(0.0, 0.0, -plate_z),
                Visibility::default(),
                Hinge::new(HingeSide::BackCover),
            ))
            .with_children(|pivot| {
                pivot.spawn((
                    Mesh3d(cover_mesh),
                    MeshMaterial3d(back_mat),
                    Transform::from_xyz(COVER_WIDTH / 2.0, 0.0, 0.0),
                ));
            });

            // Spine wraps the page block between the two hinge lines
            book.spawn((
                Mesh3d(spine_mesh),
                MeshMaterial3d(spine_mat),
                Transform::from_xyz(-COVER_THICKNESS / 2.0, 0.0, 0.0),
            ));

            // Page block stays put; only the covers animate
            book.spawn((
                Mesh3d(pages_mesh),
                MeshMaterial3d(paper_mat),
                Transform::from_xyz((COVER_WIDTH - PAGE_INSET) / 2.0, 0.0, 0.0),
            ));
        });
}
