pub mod builder;
pub mod constants;
pub mod joint_group;
pub mod preview;
pub mod projection;
pub mod rapier_world;
pub mod registry;
pub mod segment;
pub mod types;
pub mod view;

pub use builder::{CompletedStrut, GestureState, StrutBuilder, StrutGesture};
pub use constants::{MAX_STRUT_LENGTH, MIN_STRUT_LENGTH, PREVIEW_MESH_HEIGHT, STRUT_RADIUS};
pub use joint_group::{ClickOutcome, JointGroup};
pub use preview::{PreviewGeometry, long_axis_rotation};
pub use projection::{CameraRays, ProjectionError, project_cursor, project_to_plane};
pub use rapier_world::RapierStrutWorld;
pub use registry::{BodyId, Constraint, FinalizedBody, JointGroupRegistry, PhysicsBackend};
pub use segment::{SegmentCatalog, SegmentKind, SegmentShape, SegmentSpec};
pub use types::{Point3, Pose, Quat, Vec2, Vec3};
pub use view::{CameraRigSettings, ProjectionMode, ProjectionTransition};
