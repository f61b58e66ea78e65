use crate::{joint_group::spawn_joint_group, physics::StrutCatalog};
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
}

/// Anchors of the joint groups placed in the starting scene.
const JOINT_GROUP_ANCHORS: [Vec3; 2] = [Vec3::new(0.0, 2.0, 0.0), Vec3::new(5.0, 4.0, 0.0)];

fn setup(
    mut commands: Commands,
    catalog: Res<StrutCatalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("World setup");

    // Backdrop just behind the z = 0 construction plane.
    commands.spawn((
        Transform::from_xyz(0., 0., -0.25),
        Mesh3d(meshes.add(Plane3d::new(Vec3::Z, Vec2::splat(25.)).mesh().build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    for anchor in JOINT_GROUP_ANCHORS {
        spawn_joint_group(&mut commands, anchor, &catalog);
    }

    // light
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            range: 60.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 12.0),
    ));
}
