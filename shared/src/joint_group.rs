use crate::builder::StrutBuilder;
use crate::projection::{CameraRays, ProjectionError, project_cursor};
use crate::registry::{BodyId, JointGroupRegistry, PhysicsBackend};
use crate::segment::{SegmentCatalog, SegmentKind};
use crate::types::{Vec2, Vec3};

/// What a primary click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new gesture started at the anchor.
    Started,
    /// The active gesture was turned into a body.
    Finalized(BodyId),
}

/// One construction site: an anchor, its placement gesture, and what has been built
/// there so far.
#[derive(Debug)]
pub struct JointGroup<B: PhysicsBackend> {
    builder: StrutBuilder,
    registry: JointGroupRegistry<B>,
}

impl<B: PhysicsBackend> JointGroup<B> {
    pub fn new(anchor: Vec3, catalog: SegmentCatalog) -> Self {
        Self {
            builder: StrutBuilder::new(catalog),
            registry: JointGroupRegistry::new(anchor),
        }
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.registry.anchor()
    }

    #[inline]
    pub fn builder(&self) -> &StrutBuilder {
        &self.builder
    }

    #[inline]
    pub fn registry(&self) -> &JointGroupRegistry<B> {
        &self.registry
    }

    #[inline]
    pub fn is_scaling(&self) -> bool {
        self.builder.is_scaling()
    }

    pub fn select_segment(&mut self, kind: SegmentKind) -> bool {
        self.builder.select_segment(kind)
    }

    /// Idle → start a gesture; scaling → finalize it.
    pub fn primary_click(&mut self, backend: &mut B) -> ClickOutcome {
        match self.finalize(backend) {
            Some(id) => ClickOutcome::Finalized(id),
            None => {
                self.begin();
                ClickOutcome::Started
            }
        }
    }

    /// Start a gesture at the anchor. Ignored while one is active.
    pub fn begin(&mut self) -> bool {
        self.builder.begin(self.anchor())
    }

    /// Per-frame preview update from the cursor.
    ///
    /// Idle groups skip the projection entirely and return `Ok(false)`. On error the
    /// preview is left as it was.
    pub fn tick(&mut self, camera: &impl CameraRays, cursor: Vec2) -> Result<bool, ProjectionError> {
        if !self.is_scaling() {
            return Ok(false);
        }
        let end = project_cursor(camera, cursor)?;
        Ok(self.builder.update(end))
    }

    /// Drag the active gesture to a world-space end point.
    pub fn drag_to(&mut self, end: Vec3) -> bool {
        self.builder.update(end)
    }

    /// Turn the active gesture into a body. `None` when idle.
    pub fn finalize(&mut self, backend: &mut B) -> Option<BodyId> {
        let strut = self.builder.complete()?;
        Some(self.registry.finalize(backend, &strut).id)
    }

    /// Discard the active gesture. Never touches finalized bodies or joints.
    pub fn cancel(&mut self) -> bool {
        self.builder.cancel()
    }

    /// Top-left screen position for an overlay control of `size` centered on the anchor.
    pub fn overlay_position(&self, camera: &impl CameraRays, size: Vec2) -> Option<Vec2> {
        camera
            .project_to_screen(self.anchor())
            .map(|screen| screen - size / 2.0)
    }
}
