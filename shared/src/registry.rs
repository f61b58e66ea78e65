//! Finalized bodies of a joint group and the hinges between them.
//!
//! Every new body is hinged to every body finalized before it, always at the
//! group's anchor, so the constraint graph is a fan around one pivot rather than
//! a chain.

use crate::builder::CompletedStrut;
use crate::segment::{SegmentKind, SegmentShape};
use crate::types::{Point3, Pose, Vec3};
use std::fmt::Debug;

/// Physics/body service the registry creates bodies and constraints through.
pub trait PhysicsBackend {
    type Body: Copy + Debug + PartialEq;
    type Joint: Copy + Debug + PartialEq;

    /// Create a non-moving body with a collider of `shape` stretched to `length`
    /// along local +Y.
    fn create_static_body(&mut self, pose: &Pose, shape: &SegmentShape, length: f32) -> Self::Body;

    /// Hinge `a` to `b` at the world-space point `anchor`.
    fn create_constraint(&mut self, a: Self::Body, b: Self::Body, anchor: Point3) -> Self::Joint;
}

/// Index of a body within its joint group (finalization order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalizedBody<H> {
    pub id: BodyId,
    pub handle: H,
    pub pose: Pose,
    pub radius: f32,
    pub length: f32,
    pub segment: SegmentKind,
    pub strength: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint<J> {
    pub handle: J,
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub anchor: Vec3,
}

/// Bodies and constraints accumulated at one anchor. Grows monotonically.
#[derive(Debug)]
pub struct JointGroupRegistry<B: PhysicsBackend> {
    anchor: Vec3,
    bodies: Vec<FinalizedBody<B::Body>>,
    joints: Vec<Constraint<B::Joint>>,
}

impl<B: PhysicsBackend> JointGroupRegistry<B> {
    pub fn new(anchor: Vec3) -> Self {
        Self {
            anchor,
            bodies: Vec::new(),
            joints: Vec::new(),
        }
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    #[inline]
    pub fn bodies(&self) -> &[FinalizedBody<B::Body>] {
        &self.bodies
    }

    #[inline]
    pub fn joints(&self) -> &[Constraint<B::Joint>] {
        &self.joints
    }

    pub fn body(&self, id: BodyId) -> Option<&FinalizedBody<B::Body>> {
        self.bodies.get(id.0)
    }

    /// Constraints that touch `id`.
    pub fn joints_of(&self, id: BodyId) -> impl Iterator<Item = &Constraint<B::Joint>> {
        self.joints
            .iter()
            .filter(move |j| j.body_a == id || j.body_b == id)
    }

    /// Turn a completed gesture into a body and hinge it to every earlier body.
    pub fn finalize(&mut self, backend: &mut B, strut: &CompletedStrut) -> &FinalizedBody<B::Body> {
        let pose = strut.geometry.pose();
        let length = strut.geometry.length;
        let handle = backend.create_static_body(&pose, &strut.spec.shape, length);

        let id = BodyId(self.bodies.len());
        let anchor = Point3::from(self.anchor);

        for previous in &self.bodies {
            let joint = backend.create_constraint(previous.handle, handle, anchor);
            self.joints.push(Constraint {
                handle: joint,
                body_a: previous.id,
                body_b: id,
                anchor: self.anchor,
            });
        }

        self.bodies.push(FinalizedBody {
            id,
            handle,
            pose,
            radius: strut.spec.radius(),
            length,
            segment: strut.segment,
            strength: strut.spec.strength,
        });

        log::info!(
            "Strut finalized: body {} ({} bodies, {} joints)",
            id.0,
            self.bodies.len(),
            self.joints.len()
        );

        &self.bodies[id.0]
    }
}
