//! Cursor → construction plane projection.
//!
//! Struts are built on the world plane `z = 0`. The camera service hands us a ray
//! for a screen coordinate; we intersect it with that plane.

use crate::types::{Vec2, Vec3};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The cursor ray is parallel to the construction plane (or the result is not finite).
    #[error("cursor ray does not intersect the construction plane")]
    DegenerateProjection,
    /// The camera could not produce a ray for the given screen position.
    #[error("camera produced no ray for screen position ({x}, {y})")]
    NoRay { x: f32, y: f32 },
}

/// Camera service used by the projector.
///
/// Implemented by the client on top of the engine camera; tests use a fixed ray.
pub trait CameraRays {
    /// World-space origin of the ray through `screen`.
    fn ray_origin(&self, screen: Vec2) -> Option<Vec3>;
    /// World-space direction of the ray through `screen`.
    fn ray_direction(&self, screen: Vec2) -> Option<Vec3>;
    /// Screen position of a world point, if it is in front of the camera.
    fn project_to_screen(&self, world: Vec3) -> Option<Vec2>;
}

/// Intersect a ray with the plane `z = 0`.
pub fn project_to_plane(origin: Vec3, direction: Vec3) -> Result<Vec3, ProjectionError> {
    if direction.z == 0.0 {
        return Err(ProjectionError::DegenerateProjection);
    }

    let distance = -origin.z / direction.z;
    let point = origin + direction * distance;

    if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
        return Err(ProjectionError::DegenerateProjection);
    }

    Ok(point)
}

/// Project a screen coordinate onto the construction plane.
///
/// Out-of-viewport coordinates are not rejected here; whether they still yield a ray
/// is up to the camera service.
pub fn project_cursor(camera: &impl CameraRays, screen: Vec2) -> Result<Vec3, ProjectionError> {
    let no_ray = ProjectionError::NoRay {
        x: screen.x,
        y: screen.y,
    };
    let origin = camera.ray_origin(screen).ok_or(no_ray)?;
    let direction = camera.ray_direction(screen).ok_or(no_ray)?;
    project_to_plane(origin, direction)
}
