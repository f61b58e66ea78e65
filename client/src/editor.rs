//! Editor panel: a "Play" button that flips the main camera between
//! orthographic and perspective projection.
//!
//! The camera starts orthographic while the panel's mode starts as perspective,
//! so the first press settles on orthographic and the second reaches perspective.

use crate::{camera::MainCamera, input::InputAction};
use bevy::{camera::ScalingMode, prelude::*};
use leafwing_input_manager::prelude::ActionState;
use shared::{ProjectionMode, ProjectionTransition};

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(EditorView::default());
    app.add_systems(Startup, spawn_play_button);
    app.add_systems(PostStartup, init_camera_projection);
    app.add_systems(
        Update,
        (
            on_play_pressed,
            advance_transition,
            randomize_button_color,
        )
            .chain()
            .run_if(editor_enabled),
    );
}

#[derive(Resource)]
pub struct EditorView {
    pub transition: ProjectionTransition,
    enabled: bool,
}

impl Default for EditorView {
    fn default() -> Self {
        Self {
            transition: ProjectionTransition::new(ProjectionMode::Perspective),
            enabled: true,
        }
    }
}

#[derive(Component)]
struct PlayButton;

fn editor_enabled(view: Res<EditorView>) -> bool {
    view.enabled
}

fn spawn_play_button(mut commands: Commands) {
    commands.spawn((
        PlayButton,
        Button,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            width: Val::Px(100.0),
            height: Val::Px(50.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(Color::srgb(0.15, 0.15, 0.15)),
        children![(Text::new("Play"), TextColor(Color::WHITE))],
    ));
}

fn init_camera_projection(
    mut view: ResMut<EditorView>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(mut projection) = cameras.single_mut() else {
        error!("No Camera3d found in the scene!");
        view.enabled = false;
        return;
    };

    *projection = orthographic(view.transition.target_ortho_size);
}

fn on_play_pressed(
    buttons: Query<&Interaction, (Changed<Interaction>, With<PlayButton>)>,
    mut view: ResMut<EditorView>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            let target = view.transition.toggle();
            info!("Switching camera to {target:?}");
        }
    }
}

fn advance_transition(
    time: Res<Time>,
    mut view: ResMut<EditorView>,
    mut projection: Single<&mut Projection, With<MainCamera>>,
) {
    let Some(t) = view.transition.advance(time.delta_secs()) else {
        return;
    };

    let transition = &view.transition;
    **projection = match transition.target() {
        ProjectionMode::Perspective => Projection::from(PerspectiveProjection {
            fov: transition.fov_at(t).to_radians(),
            ..default()
        }),
        ProjectionMode::Orthographic => orthographic(transition.ortho_size_at(t)),
    };

    if !transition.is_transitioning() {
        info!("Camera settled on {:?}", transition.target());
    }
}

fn randomize_button_color(
    actions: Res<ActionState<InputAction>>,
    mut buttons: Query<&mut BackgroundColor, With<PlayButton>>,
) {
    if !actions.just_pressed(&InputAction::RandomizeColor) {
        return;
    }

    for mut color in &mut buttons {
        color.0 = Color::srgb(rand::random(), rand::random(), rand::random());
    }
}

fn orthographic(viewport_height: f32) -> Projection {
    Projection::from(OrthographicProjection {
        scaling_mode: ScalingMode::FixedVertical { viewport_height },
        ..OrthographicProjection::default_3d()
    })
}
