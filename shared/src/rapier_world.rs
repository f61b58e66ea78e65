//! Rapier-backed body service for finalized struts.
//!
//! Holds the rigid-body, collider and joint sets that joint groups write into.
//! Nothing here steps the simulation; the sets are the persistent record of what
//! was built and can be handed to a pipeline by whoever owns the simulation.

// Re-export Rapier so downstream crates can use Rapier types without needing to
// depend on `rapier3d` directly.
pub use rapier3d;

use crate::registry::PhysicsBackend;
use crate::segment::SegmentShape;
use crate::types::{Point3, Pose};
use rapier3d::prelude::*;

/// In-memory Rapier structures for everything the joint groups have finalized.
#[derive(Default)]
pub struct RapierStrutWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
}

impl RapierStrutWorld {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// World pose of a body, or the world frame if `handle` is not in this world.
    fn body_frame(&self, handle: RigidBodyHandle) -> Isometry<Real> {
        match self.bodies.get(handle) {
            Some(body) => Isometry::from_parts((*body.translation()).into(), *body.rotation()),
            None => {
                log::warn!("Unknown rigid body {handle:?}; anchoring its joint in the world frame");
                Isometry::identity()
            }
        }
    }
}

impl PhysicsBackend for RapierStrutWorld {
    type Body = RigidBodyHandle;
    type Joint = ImpulseJointHandle;

    fn create_static_body(&mut self, pose: &Pose, shape: &SegmentShape, length: f32) -> RigidBodyHandle {
        let rb = RigidBodyBuilder::fixed().pose(pose.iso()).build();
        let rb_handle = self.bodies.insert(rb);

        let collider = shape.collider(length);
        self.colliders
            .insert_with_parent(collider, rb_handle, &mut self.bodies);

        rb_handle
    }

    /// Revolute joint about world +Z (the construction plane normal), anchored at
    /// `anchor` expressed in each body's local frame.
    fn create_constraint(
        &mut self,
        a: RigidBodyHandle,
        b: RigidBodyHandle,
        anchor: Point3,
    ) -> ImpulseJointHandle {
        let frame_a = self.body_frame(a);
        let frame_b = self.body_frame(b);

        let world_axis = Vector::z_axis();
        let mut joint = RevoluteJointBuilder::new(world_axis)
            .local_anchor1(frame_a.inverse_transform_point(&anchor))
            .local_anchor2(frame_b.inverse_transform_point(&anchor))
            .build();
        joint
            .data
            .set_local_axis1(frame_a.rotation.inverse() * world_axis)
            .set_local_axis2(frame_b.rotation.inverse() * world_axis);

        self.impulse_joints.insert(a, b, joint, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::long_axis_rotation;
    use crate::types::{Quat, Vec3};

    fn strut() -> SegmentShape {
        SegmentShape::Cylinder { radius: 0.1 }
    }

    #[test]
    fn static_body_is_fixed_at_pose() {
        let mut world = RapierStrutWorld::new();
        let pose = Pose::new(Vec3::new(1.0, 2.0, 0.0), Quat::identity());
        let handle = world.create_static_body(&pose, &strut(), 3.0);

        let body = world.bodies.get(handle).unwrap();
        assert!(body.is_fixed());
        assert!((body.translation() - pose.translation).norm() < 1.0e-6);
        assert_eq!(body.colliders().len(), 1);
        assert_eq!(world.colliders.len(), 1);
    }

    #[test]
    fn constraint_anchors_coincide_in_world_space() {
        let mut world = RapierStrutWorld::new();
        let dir_a = Vec3::new(0.6, 0.8, 0.0);
        let dir_b = Vec3::new(-1.0, 0.0, 0.0);
        let pose_a = Pose::new(dir_a * 5.0, long_axis_rotation(&dir_a));
        let pose_b = Pose::new(dir_b * 2.0, long_axis_rotation(&dir_b));
        let a = world.create_static_body(&pose_a, &strut(), 5.0);
        let b = world.create_static_body(&pose_b, &strut(), 2.0);

        let anchor = Point3::new(0.0, 0.0, 0.0);
        let handle = world.create_constraint(a, b, anchor);
        assert_eq!(world.joint_count(), 1);

        let joint = world.impulse_joints.get(handle).unwrap();
        let world_anchor1 = pose_a.iso() * joint.data.local_anchor1();
        let world_anchor2 = pose_b.iso() * joint.data.local_anchor2();
        assert!((world_anchor1 - anchor).norm() < 1.0e-5);
        assert!((world_anchor2 - anchor).norm() < 1.0e-5);

        let world_axis1 = pose_a.rotation * joint.data.local_axis1();
        assert!((world_axis1.into_inner() - Vec3::z()).norm() < 1.0e-5);
    }

    #[test]
    fn unknown_body_falls_back_to_world_frame() {
        let mut world = RapierStrutWorld::new();
        let pose = Pose::new(Vec3::new(1.0, 2.0, 0.0), long_axis_rotation(&Vec3::x()));
        let known = world.create_static_body(&pose, &strut(), 2.0);

        let frame = world.body_frame(known);
        assert!((frame.translation.vector - pose.translation).norm() < 1.0e-6);
        assert!(frame.rotation.angle_to(&pose.rotation) < 1.0e-5);

        assert_eq!(world.body_frame(RigidBodyHandle::invalid()), Isometry::identity());

        let other = RapierStrutWorld::new();
        assert_eq!(other.body_frame(known), Isometry::identity());
    }
}
