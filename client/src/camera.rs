use crate::input::InputAction;
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use shared::CameraRigSettings;

use crate::convert::{vec3_from_na, vec3_to_na};

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(CameraRig::default());
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, (toggle_play_mode, move_camera).chain());
}

const CAMERA_START: Vec3 = Vec3::new(0.0, 5.0, 20.0);

/// Panning camera settings plus the play-mode flag.
#[derive(Resource, Default)]
pub struct CameraRig {
    pub settings: CameraRigSettings,
    pub play_mode: bool,
}

#[derive(Component)]
pub struct MainCamera;

fn add_camera(mut commands: Commands, rig: Res<CameraRig>) {
    let start = vec3_from_na(&rig.settings.clamp(vec3_to_na(CAMERA_START)));
    let fov = rig.settings.fov_for(rig.play_mode);
    info!("Initial FOV set to: {fov}");

    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: fov.to_radians(),
            ..default()
        }),
        Transform::from_translation(start),
    ));
}

fn toggle_play_mode(
    actions: Res<ActionState<InputAction>>,
    mut rig: ResMut<CameraRig>,
    mut projection: Single<&mut Projection, With<MainCamera>>,
) {
    if !actions.just_pressed(&InputAction::TogglePlayMode) {
        return;
    }

    rig.play_mode = !rig.play_mode;
    let fov = rig.settings.fov_for(rig.play_mode);
    if rig.play_mode {
        info!("Entering Play Mode");
    } else {
        info!("Exiting Play Mode - Flattening View");
    }

    // Orthographic views have no FOV; the editor panel owns that switch.
    if let Projection::Perspective(perspective) = &mut **projection {
        perspective.fov = fov.to_radians();
        info!("FOV set to: {fov}");
    }
}

fn move_camera(
    actions: Res<ActionState<InputAction>>,
    rig: Res<CameraRig>,
    mut camera: Single<&mut Transform, With<MainCamera>>,
    time: Res<Time>,
) {
    let input = CameraRigSettings::planar_input(
        actions.pressed(&InputAction::MoveLeft),
        actions.pressed(&InputAction::MoveRight),
        actions.pressed(&InputAction::MoveUp),
        actions.pressed(&InputAction::MoveDown),
    );

    let delta = rig.settings.move_delta(input, time.delta_secs());
    let next = rig.settings.clamp(vec3_to_na(camera.translation) + delta);
    camera.translation = vec3_from_na(&next);
}
