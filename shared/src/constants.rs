/// Shortest strut the builder will ever produce (meters).
///
/// Keeps the preview and the finalized collider away from zero-height geometry.
pub const MIN_STRUT_LENGTH: f32 = 0.01;

/// Default longest strut (meters). Segment specs may override it.
pub const MAX_STRUT_LENGTH: f32 = 10.0;

/// Collision radius of a finalized strut (meters).
pub const STRUT_RADIUS: f32 = 0.1;

/// Height of the unit cylinder used for previews. Preview length is applied as a Y scale.
pub const PREVIEW_MESH_HEIGHT: f32 = 1.0;

pub const DEFAULT_SEGMENT_STRENGTH: f32 = 100.0;

/// Below this squared length a start→end difference is treated as zero.
pub const DIFF_EPS_SQ: f32 = 1.0e-12;

/// Camera rig bounds on the X axis (meters).
pub const CAMERA_MIN_X: f32 = -10.0;
pub const CAMERA_MAX_X: f32 = 10.0;

/// Camera rig bounds on the Y axis (meters).
pub const CAMERA_MIN_Y: f32 = 0.0;
pub const CAMERA_MAX_Y: f32 = 10.0;

/// Camera rig planar speed in meters per second.
pub const CAMERA_MOVE_SPEED: f32 = 10.0;

/// Vertical FOV in play mode (degrees).
pub const PERSPECTIVE_FOV_DEG: f32 = 40.0;

/// Very narrow FOV used for the flattened editing view (degrees).
pub const FLATTENED_FOV_DEG: f32 = 5.0;

/// Editor panel: FOV targeted when switching to perspective (degrees).
pub const EDITOR_TARGET_FOV_DEG: f32 = 100.0;

/// Editor panel: vertical extent targeted when switching to orthographic (meters).
pub const EDITOR_TARGET_ORTHO_SIZE: f32 = 20.0;

/// Duration of the editor projection transition in seconds.
pub const PROJECTION_TRANSITION_SECS: f32 = 0.5;
