//! Interactive strut placement.
//!
//! Each joint group shows a "+" button over its anchor. Pressing it starts a strut
//! that follows the cursor across the `z = 0` plane, and pressing the same button
//! again finalizes it. A right click anywhere cancels every strut in progress.

use crate::{
    camera::MainCamera,
    convert::{quat_from_na, vec2_from_na, vec2_to_na, vec3_from_na, vec3_to_na},
    input::InputAction,
    physics::{SegmentAssets, StrutPhysics},
};
use bevy::{prelude::*, window::PrimaryWindow};
use leafwing_input_manager::prelude::ActionState;
use shared::{
    BodyId, CameraRays, ClickOutcome, JointGroup, PREVIEW_MESH_HEIGHT, Pose, RapierStrutWorld, SegmentCatalog,
    rapier_world::rapier3d::prelude::RigidBodyHandle,
};

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<JointTool>();
    app.add_systems(PostStartup, check_camera);
    app.add_systems(
        Update,
        (
            select_segment,
            handle_primary_click,
            handle_cancel,
            update_previews,
            position_overlay_buttons,
            report_new_bodies,
        )
            .chain()
            .run_if(joint_tool_enabled),
    );
}

const BUTTON_SIZE: Vec2 = Vec2::splat(32.0);

#[derive(Resource)]
pub struct JointTool {
    enabled: bool,
}

impl Default for JointTool {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// A joint group placed in the scene.
#[derive(Component)]
pub struct JointGroupSite {
    pub group: JointGroup<RapierStrutWorld>,
    button: Entity,
    preview: Option<Entity>,
}

#[derive(Component)]
pub struct JointGroupButton {
    site: Entity,
}

#[derive(Component)]
pub struct StrutPreview;

/// Visual of a finalized strut.
#[derive(Component)]
pub struct StrutBody {
    pub site: Entity,
    pub id: BodyId,
    pub handle: RigidBodyHandle,
}

/// Camera service backed by the engine camera.
struct ViewportCamera<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
}

impl CameraRays for ViewportCamera<'_> {
    fn ray_origin(&self, screen: shared::Vec2) -> Option<shared::Vec3> {
        self.camera
            .viewport_to_world(self.transform, vec2_from_na(&screen))
            .ok()
            .map(|ray| vec3_to_na(ray.origin))
    }

    fn ray_direction(&self, screen: shared::Vec2) -> Option<shared::Vec3> {
        self.camera
            .viewport_to_world(self.transform, vec2_from_na(&screen))
            .ok()
            .map(|ray| vec3_to_na(*ray.direction))
    }

    fn project_to_screen(&self, world: shared::Vec3) -> Option<shared::Vec2> {
        self.camera
            .world_to_viewport(self.transform, vec3_from_na(&world))
            .ok()
            .map(vec2_to_na)
    }
}

/// Spawn a joint group at `anchor` together with its overlay button.
pub fn spawn_joint_group(commands: &mut Commands, anchor: Vec3, catalog: &SegmentCatalog) -> Entity {
    let site = commands.spawn_empty().id();

    let button = commands
        .spawn((
            JointGroupButton { site },
            Button,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(BUTTON_SIZE.x),
                height: Val::Px(BUTTON_SIZE.y),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.7)),
            children![(Text::new("+"), TextColor(Color::WHITE))],
        ))
        .id();

    commands.entity(site).insert((
        Name::new("JointGroup"),
        JointGroupSite {
            group: JointGroup::new(vec3_to_na(anchor), catalog.clone()),
            button,
            preview: None,
        },
        Transform::from_translation(anchor),
    ));

    site
}

/// Transform of a unit-height segment mesh stretched to `length`.
pub fn segment_transform(pose: &Pose, length: f32) -> Transform {
    Transform {
        translation: vec3_from_na(&pose.translation),
        rotation: quat_from_na(&pose.rotation),
        scale: Vec3::new(1.0, length / PREVIEW_MESH_HEIGHT, 1.0),
    }
}

fn joint_tool_enabled(tool: Res<JointTool>) -> bool {
    tool.enabled
}

fn check_camera(mut tool: ResMut<JointTool>, cameras: Query<(), With<MainCamera>>) {
    if cameras.is_empty() {
        error!("No camera in the viewport; joint groups are disabled");
        tool.enabled = false;
    }
}

fn select_segment(actions: Res<ActionState<InputAction>>, mut sites: Query<&mut JointGroupSite>) {
    let Some(kind) = InputAction::SEGMENT_SELECTIONS
        .iter()
        .find(|action| actions.just_pressed(action))
        .and_then(|action| action.segment())
    else {
        return;
    };

    for mut site in &mut sites {
        if site.group.select_segment(kind) {
            info!("Segment set to {kind:?}");
        }
    }
}

fn handle_primary_click(
    mut commands: Commands,
    buttons: Query<(&Interaction, &JointGroupButton), Changed<Interaction>>,
    mut sites: Query<&mut JointGroupSite>,
    mut physics: ResMut<StrutPhysics>,
    assets: Res<SegmentAssets>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Ok(mut site) = sites.get_mut(button.site) else {
            continue;
        };

        match site.group.primary_click(&mut physics.0) {
            ClickOutcome::Finalized(id) => {
                if let Some(body) = site.group.registry().body(id) {
                    commands.spawn((
                        StrutBody {
                            site: button.site,
                            id,
                            handle: body.handle,
                        },
                        Mesh3d(assets.mesh(body.segment)),
                        MeshMaterial3d(assets.body_material.clone()),
                        segment_transform(&body.pose, body.length),
                    ));
                }
                if let Some(preview) = site.preview.take() {
                    commands.entity(preview).despawn();
                }
            }
            ClickOutcome::Started => {
                let segment = site.group.builder().segment();
                let Some(geometry) = site.group.builder().preview().copied() else {
                    continue;
                };
                let preview = commands
                    .spawn((
                        StrutPreview,
                        Mesh3d(assets.mesh(segment)),
                        MeshMaterial3d(assets.preview_material.clone()),
                        segment_transform(&geometry.pose(), geometry.length),
                    ))
                    .id();
                site.preview = Some(preview);
            }
        }
    }
}

fn handle_cancel(
    mut commands: Commands,
    actions: Res<ActionState<InputAction>>,
    mut sites: Query<&mut JointGroupSite>,
) {
    if !actions.just_pressed(&InputAction::Cancel) {
        return;
    }

    for mut site in &mut sites {
        if !site.group.cancel() {
            continue;
        }
        if let Some(preview) = site.preview.take() {
            commands.entity(preview).despawn();
        }
    }
}

fn update_previews(
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut sites: Query<&mut JointGroupSite>,
    mut previews: Query<&mut Transform, With<StrutPreview>>,
) {
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (camera, transform) = *camera;
    let rays = ViewportCamera { camera, transform };

    for mut site in &mut sites {
        match site.group.tick(&rays, vec2_to_na(cursor)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                debug!("Skipping strut preview update: {err}");
                continue;
            }
        }

        let (Some(preview), Some(geometry)) = (site.preview, site.group.builder().preview()) else {
            continue;
        };
        if let Ok(mut preview_transform) = previews.get_mut(preview) {
            *preview_transform = segment_transform(&geometry.pose(), geometry.length);
        }
    }
}

fn position_overlay_buttons(
    camera: Single<(&Camera, &GlobalTransform), With<MainCamera>>,
    sites: Query<&JointGroupSite>,
    mut nodes: Query<(&mut Node, &mut Visibility), With<JointGroupButton>>,
) {
    let (camera, transform) = *camera;
    let rays = ViewportCamera { camera, transform };

    for site in &sites {
        let Ok((mut node, mut visibility)) = nodes.get_mut(site.button) else {
            continue;
        };
        match site.group.overlay_position(&rays, vec2_to_na(BUTTON_SIZE)) {
            Some(top_left) => {
                node.left = Val::Px(top_left.x);
                node.top = Val::Px(top_left.y);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn report_new_bodies(
    bodies: Query<&StrutBody, Added<StrutBody>>,
    sites: Query<&JointGroupSite>,
    physics: Res<StrutPhysics>,
) {
    for body in &bodies {
        let joined = sites
            .get(body.site)
            .map(|site| site.group.registry().joints_of(body.id).count())
            .unwrap_or(0);
        info!(
            "Strut body {} ({:?}) hinged to {joined} earlier struts; world has {} bodies, {} joints",
            body.id.0,
            body.handle,
            physics.body_count(),
            physics.joint_count()
        );
    }
}
