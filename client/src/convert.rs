//! Glam (Bevy) ↔ nalgebra (shared) conversions.

use bevy::prelude::{Quat, Vec2, Vec3};

#[inline]
pub fn vec3_to_na(v: Vec3) -> shared::Vec3 {
    shared::Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn vec3_from_na(v: &shared::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn vec2_to_na(v: Vec2) -> shared::Vec2 {
    shared::Vec2::new(v.x, v.y)
}

#[inline]
pub fn vec2_from_na(v: &shared::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// nalgebra stores quaternion coords as `[i, j, k, w]`.
#[inline]
pub fn quat_from_na(q: &shared::Quat) -> Quat {
    let c = q.coords;
    Quat::from_xyzw(c[0], c[1], c[2], c[3])
}
