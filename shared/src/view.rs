/*!
Camera rig and editor view math.

Plain parameter handling for the camera behaviors; the client applies the
results to the engine camera.
*/

use crate::constants::{
    CAMERA_MAX_X, CAMERA_MAX_Y, CAMERA_MIN_X, CAMERA_MIN_Y, CAMERA_MOVE_SPEED,
    EDITOR_TARGET_FOV_DEG, EDITOR_TARGET_ORTHO_SIZE, FLATTENED_FOV_DEG, PERSPECTIVE_FOV_DEG,
    PROJECTION_TRANSITION_SECS,
};
use crate::types::{Vec2, Vec3};

/// Settings for the panning camera rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRigSettings {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    /// Planar speed in meters per second.
    pub move_speed: f32,
    /// FOV in play mode (degrees).
    pub perspective_fov: f32,
    /// FOV outside play mode (degrees).
    pub flattened_fov: f32,
}

impl Default for CameraRigSettings {
    fn default() -> Self {
        Self {
            min_x: CAMERA_MIN_X,
            max_x: CAMERA_MAX_X,
            min_y: CAMERA_MIN_Y,
            max_y: CAMERA_MAX_Y,
            move_speed: CAMERA_MOVE_SPEED,
            perspective_fov: PERSPECTIVE_FOV_DEG,
            flattened_fov: FLATTENED_FOV_DEG,
        }
    }
}

impl CameraRigSettings {
    /// Clamp X and Y into the rig bounds. Z is preserved.
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        Vec3::new(
            pos.x.clamp(self.min_x, self.max_x),
            pos.y.clamp(self.min_y, self.max_y),
            pos.z,
        )
    }

    /// Translation for this frame from a raw planar input (each axis in -1..=1).
    ///
    /// Diagonals are normalized so they are not faster than straight moves.
    pub fn move_delta(&self, input: Vec2, dt: f32) -> Vec3 {
        if input.norm_squared() == 0.0 {
            return Vec3::zeros();
        }
        let step = input.normalize() * self.move_speed * dt;
        Vec3::new(step.x, step.y, 0.0)
    }

    /// Raw planar input from the held movement keys.
    ///
    /// Left pushes the rig toward +X and right toward -X; up and down follow +Y.
    pub fn planar_input(left: bool, right: bool, up: bool, down: bool) -> Vec2 {
        let axis = |pos: bool, neg: bool| match (pos, neg) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        Vec2::new(axis(left, right), axis(up, down))
    }

    pub fn fov_for(&self, play_mode: bool) -> f32 {
        if play_mode {
            self.perspective_fov
        } else {
            self.flattened_fov
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Timed switch between perspective and orthographic projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionTransition {
    target: ProjectionMode,
    elapsed: f32,
    duration: f32,
    active: bool,
    /// FOV the perspective side settles on (degrees).
    pub target_fov: f32,
    /// Vertical extent the orthographic side settles on (meters).
    pub target_ortho_size: f32,
}

impl ProjectionTransition {
    pub fn new(initial: ProjectionMode) -> Self {
        Self {
            target: initial,
            elapsed: 0.0,
            duration: PROJECTION_TRANSITION_SECS,
            active: false,
            target_fov: EDITOR_TARGET_FOV_DEG,
            target_ortho_size: EDITOR_TARGET_ORTHO_SIZE,
        }
    }

    #[inline]
    pub fn target(&self) -> ProjectionMode {
        self.target
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.active
    }

    /// Flip the target mode and restart the transition.
    pub fn toggle(&mut self) -> ProjectionMode {
        self.target = self.target.toggled();
        self.elapsed = 0.0;
        self.active = true;
        self.target
    }

    /// Advance by `dt` seconds. Returns the progress in `0.0..=1.0` while a transition
    /// runs, `None` otherwise. The call that reaches `1.0` ends the transition.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            self.active = false;
        }
        Some(t)
    }

    /// Perspective FOV at progress `t`, widening from the flattened FOV.
    pub fn fov_at(&self, t: f32) -> f32 {
        lerp(FLATTENED_FOV_DEG, self.target_fov, smoothstep(t))
    }

    /// Orthographic extent at progress `t`, growing from half the target.
    pub fn ortho_size_at(&self, t: f32) -> f32 {
        lerp(0.5 * self.target_ortho_size, self.target_ortho_size, smoothstep(t))
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_rig_in_bounds() {
        let rig = CameraRigSettings::default();
        assert_eq!(rig.clamp(Vec3::new(-50.0, 20.0, 7.0)), Vec3::new(-10.0, 10.0, 7.0));
        assert_eq!(rig.clamp(Vec3::new(3.0, -1.0, 0.0)), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(rig.clamp(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn diagonal_move_is_normalized() {
        let rig = CameraRigSettings::default();
        let d = rig.move_delta(Vec2::new(1.0, 1.0), 0.5);
        assert!((d.norm() - 5.0).abs() < 1.0e-5);
        assert_eq!(d.z, 0.0);
        assert_eq!(rig.move_delta(Vec2::zeros(), 0.5), Vec3::zeros());
    }

    #[test]
    fn left_key_moves_toward_positive_x() {
        let rig = CameraRigSettings::default();
        let left = CameraRigSettings::planar_input(true, false, false, false);
        assert_eq!(left, Vec2::new(1.0, 0.0));
        assert!(rig.move_delta(left, 0.1).x > 0.0);

        let right = CameraRigSettings::planar_input(false, true, false, false);
        assert!(rig.move_delta(right, 0.1).x < 0.0);

        assert_eq!(CameraRigSettings::planar_input(false, false, true, false), Vec2::new(0.0, 1.0));
        assert_eq!(CameraRigSettings::planar_input(true, true, true, true), Vec2::zeros());
    }

    #[test]
    fn play_mode_picks_fov() {
        let rig = CameraRigSettings::default();
        assert_eq!(rig.fov_for(true), 40.0);
        assert_eq!(rig.fov_for(false), 5.0);
    }

    #[test]
    fn transition_runs_for_its_duration() {
        let mut tr = ProjectionTransition::new(ProjectionMode::Perspective);
        assert_eq!(tr.advance(0.1), None);

        assert_eq!(tr.toggle(), ProjectionMode::Orthographic);
        assert!(tr.is_transitioning());
        let t = tr.advance(0.25).unwrap();
        assert!((t - 0.5).abs() < 1.0e-5);
        assert!(tr.is_transitioning());

        assert_eq!(tr.advance(1.0), Some(1.0));
        assert!(!tr.is_transitioning());
        assert_eq!(tr.advance(0.1), None);
    }

    #[test]
    fn first_toggle_from_perspective_targets_orthographic() {
        let mut tr = ProjectionTransition::new(ProjectionMode::Perspective);
        assert!(!tr.is_transitioning());
        assert_eq!(tr.toggle(), ProjectionMode::Orthographic);
        assert_eq!(tr.advance(PROJECTION_TRANSITION_SECS), Some(1.0));
        assert_eq!(tr.target(), ProjectionMode::Orthographic);
        // The second press is the one that reaches perspective.
        assert_eq!(tr.toggle(), ProjectionMode::Perspective);
    }

    #[test]
    fn toggle_mid_transition_restarts() {
        let mut tr = ProjectionTransition::new(ProjectionMode::Orthographic);
        tr.toggle();
        tr.advance(0.4);
        assert_eq!(tr.toggle(), ProjectionMode::Orthographic);
        let t = tr.advance(0.1).unwrap();
        assert!((t - 0.2).abs() < 1.0e-5);
    }

    #[test]
    fn interpolation_hits_targets() {
        let tr = ProjectionTransition::new(ProjectionMode::Perspective);
        assert_eq!(tr.fov_at(0.0), FLATTENED_FOV_DEG);
        assert_eq!(tr.fov_at(1.0), tr.target_fov);
        assert_eq!(tr.ortho_size_at(1.0), tr.target_ortho_size);
    }
}
