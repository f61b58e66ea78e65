use crate::constants::{DIFF_EPS_SQ, MIN_STRUT_LENGTH};
use crate::types::{Pose, Quat, Vec3};
use nalgebra as na;
use std::f32::consts::FRAC_PI_2;

/// Live geometry of the strut being dragged out.
///
/// Derived from the gesture every tick and never persisted on its own. The
/// rotation maps local +Y (the cylinder's long axis) onto the start→end direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewGeometry {
    /// Where the preview mesh is placed (meters).
    pub position: Vec3,
    /// Clamped strut length (meters).
    pub length: f32,
    pub rotation: Quat,
}

impl PreviewGeometry {
    /// Minimal preview sitting at `start`.
    pub fn at(start: Vec3) -> Self {
        Self {
            position: start,
            length: MIN_STRUT_LENGTH,
            rotation: Quat::identity(),
        }
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }

    /// World-space direction of the long axis.
    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.rotation * Vec3::y()
    }

    /// Reshape toward `end`, clamping the length to `[MIN_STRUT_LENGTH, max_length]`.
    ///
    /// A zero start→end difference leaves the geometry untouched. Returns whether
    /// anything changed.
    pub fn reshape(&mut self, start: Vec3, end: Vec3, max_length: f32) -> bool {
        let diff = end - start;
        if diff == Vec3::zeros() {
            return false;
        }

        // Scale by the largest component first so tiny differences keep a direction.
        let dir = (diff / diff.amax()).normalize();
        let length = diff
            .norm()
            .clamp(MIN_STRUT_LENGTH, max_length.max(MIN_STRUT_LENGTH));

        self.position = start + dir * length;
        self.length = length;
        self.rotation = long_axis_rotation(&dir);
        true
    }
}

/// Rotation that turns the local +Y axis onto `dir` (a unit vector).
///
/// Built as a look-at toward `dir` (local +Z forward, world +Y up) followed by a
/// fixed +90° turn about local X, which carries +Y onto the forward axis. When
/// `dir` is vertical the up hint falls back to world +Z.
pub fn long_axis_rotation(dir: &Vec3) -> Quat {
    let up = if dir.cross(&Vec3::y()).norm_squared() <= DIFF_EPS_SQ {
        Vec3::z()
    } else {
        Vec3::y()
    };

    let look = Quat::face_towards(dir, &up);
    look * Quat::from_axis_angle(&na::Vector3::x_axis(), FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_STRUT_LENGTH;

    const EPS: f32 = 1.0e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn three_four_five() {
        let mut g = PreviewGeometry::at(Vec3::zeros());
        assert!(g.reshape(Vec3::zeros(), Vec3::new(3.0, 4.0, 0.0), MAX_STRUT_LENGTH));
        assert!((g.length - 5.0).abs() < EPS);
        assert!(approx(g.axis(), Vec3::new(0.6, 0.8, 0.0)));
        assert!(approx(g.position, Vec3::new(3.0, 4.0, 0.0)));
    }

    #[test]
    fn length_is_clamped_for_any_distance() {
        let start = Vec3::new(1.0, -2.0, 0.0);
        for i in 0..=200 {
            let dist = i as f32 * 0.5;
            let mut g = PreviewGeometry::at(start);
            g.reshape(start, start + Vec3::new(dist, 0.0, 0.0), MAX_STRUT_LENGTH);
            assert!(g.length >= MIN_STRUT_LENGTH, "dist {dist} gave {}", g.length);
            assert!(g.length <= MAX_STRUT_LENGTH, "dist {dist} gave {}", g.length);
        }
    }

    #[test]
    fn long_drag_stops_at_max_length() {
        let mut g = PreviewGeometry::at(Vec3::zeros());
        g.reshape(Vec3::zeros(), Vec3::new(0.0, 0.0, -100.0), MAX_STRUT_LENGTH);
        assert!((g.length - 10.0).abs() < EPS);
        assert!(approx(g.position, Vec3::new(0.0, 0.0, -10.0)));
        assert!(approx(g.axis(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn tiny_drag_stops_at_min_length() {
        let mut g = PreviewGeometry::at(Vec3::zeros());
        g.reshape(Vec3::zeros(), Vec3::new(0.001, 0.0, 0.0), MAX_STRUT_LENGTH);
        assert!((g.length - MIN_STRUT_LENGTH).abs() < EPS);
        assert!(approx(g.position, Vec3::new(MIN_STRUT_LENGTH, 0.0, 0.0)));
    }

    #[test]
    fn zero_diff_leaves_geometry_unchanged() {
        let mut g = PreviewGeometry::at(Vec3::zeros());
        g.reshape(Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0), MAX_STRUT_LENGTH);
        let before = g;
        assert!(!g.reshape(Vec3::zeros(), Vec3::zeros(), MAX_STRUT_LENGTH));
        assert_eq!(g, before);
    }

    #[test]
    fn sub_micron_drag_still_moves_to_min_length() {
        let mut g = PreviewGeometry::at(Vec3::zeros());
        assert!(g.reshape(Vec3::zeros(), Vec3::new(5.0e-7, 0.0, 0.0), MAX_STRUT_LENGTH));
        assert_eq!(g.length, MIN_STRUT_LENGTH);
        assert!(approx(g.position, Vec3::new(MIN_STRUT_LENGTH, 0.0, 0.0)));
        assert!(approx(g.axis(), Vec3::x()));

        // Small enough that squaring underflows.
        assert!(g.reshape(Vec3::zeros(), Vec3::new(0.0, -1.0e-30, 0.0), MAX_STRUT_LENGTH));
        assert!(approx(g.position, Vec3::new(0.0, -MIN_STRUT_LENGTH, 0.0)));
        assert!(approx(g.axis(), -Vec3::y()));
    }

    #[test]
    fn vertical_directions_are_finite() {
        for dir in [Vec3::y(), -Vec3::y()] {
            let q = long_axis_rotation(&dir);
            assert!(q.coords.iter().all(|c| c.is_finite()));
            assert!(approx(q * Vec3::y(), dir));
        }
    }

    #[test]
    fn rotation_aligns_long_axis_with_arbitrary_direction() {
        let dir = Vec3::new(-1.0, 2.0, 0.5).normalize();
        let q = long_axis_rotation(&dir);
        assert!(approx(q * Vec3::y(), dir));
    }
}
