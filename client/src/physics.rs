use bevy::prelude::*;
use shared::{RapierStrutWorld, SegmentCatalog, SegmentKind, SegmentShape};

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<StrutPhysics>();
    app.init_resource::<StrutCatalog>();
    app.add_systems(Startup, load_segment_assets);
}

/// Bodies, colliders and hinges of every finalized strut.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct StrutPhysics(pub RapierStrutWorld);

/// Segment parameters handed to each joint group when it is spawned.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct StrutCatalog(pub SegmentCatalog);

/// Unit-length meshes (long axis +Y) and materials per segment kind.
#[derive(Resource, Default)]
pub struct SegmentAssets {
    meshes: [Handle<Mesh>; 3],
    pub preview_material: Handle<StandardMaterial>,
    pub body_material: Handle<StandardMaterial>,
}

impl SegmentAssets {
    pub fn mesh(&self, kind: SegmentKind) -> Handle<Mesh> {
        match kind {
            SegmentKind::Strut => self.meshes[0].clone(),
            SegmentKind::Conveyor => self.meshes[1].clone(),
            SegmentKind::Cable => self.meshes[2].clone(),
        }
    }
}

fn load_segment_assets(
    mut commands: Commands,
    catalog: Res<StrutCatalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut mesh_for = |kind: SegmentKind| meshes.add(unit_mesh(&catalog.get(kind).shape));

    commands.insert_resource(SegmentAssets {
        meshes: [
            mesh_for(SegmentKind::Strut),
            mesh_for(SegmentKind::Conveyor),
            mesh_for(SegmentKind::Cable),
        ],
        preview_material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.9, 0.8, 0.3, 0.6),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        body_material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.62, 0.68),
            metallic: 0.8,
            perceptual_roughness: 0.4,
            ..default()
        }),
    });
}

/// Mesh of height `PREVIEW_MESH_HEIGHT`; length is applied as a Y scale.
fn unit_mesh(shape: &SegmentShape) -> Mesh {
    let height = shared::PREVIEW_MESH_HEIGHT;
    match *shape {
        SegmentShape::Cylinder { radius } => Cylinder::new(radius, height).into(),
        SegmentShape::Capsule { radius } => {
            Capsule3d::new(radius, (height - 2.0 * radius).max(0.0)).into()
        }
        SegmentShape::Cuboid {
            half_width,
            half_depth,
        } => Cuboid::new(2.0 * half_width, height, 2.0 * half_depth).into(),
    }
}
