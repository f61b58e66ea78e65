use crate::preview::PreviewGeometry;
use crate::segment::{SegmentCatalog, SegmentKind, SegmentSpec};
use crate::types::Vec3;

/// Transient state of one placement gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrutGesture {
    pub start_position: Vec3,
    pub current_end: Vec3,
    pub segment: SegmentKind,
    pub preview: PreviewGeometry,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Scaling(StrutGesture),
}

/// A gesture that has just been finalized, ready to be handed to the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletedStrut {
    pub geometry: PreviewGeometry,
    pub segment: SegmentKind,
    pub spec: SegmentSpec,
}

/// Two-click placement gesture: `Idle` → `Scaling` → `Idle`.
///
/// The builder only tracks geometry. Turning a finished gesture into a body is the
/// caller's job (see [`crate::JointGroup`]).
#[derive(Clone, Debug)]
pub struct StrutBuilder {
    catalog: SegmentCatalog,
    segment: SegmentKind,
    state: GestureState,
}

impl StrutBuilder {
    pub fn new(catalog: SegmentCatalog) -> Self {
        Self {
            catalog,
            segment: SegmentKind::default(),
            state: GestureState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[inline]
    pub fn is_scaling(&self) -> bool {
        matches!(self.state, GestureState::Scaling(_))
    }

    pub fn gesture(&self) -> Option<&StrutGesture> {
        match &self.state {
            GestureState::Scaling(gesture) => Some(gesture),
            GestureState::Idle => None,
        }
    }

    pub fn preview(&self) -> Option<&PreviewGeometry> {
        self.gesture().map(|g| &g.preview)
    }

    #[inline]
    pub fn catalog(&self) -> &SegmentCatalog {
        &self.catalog
    }

    #[inline]
    pub fn segment(&self) -> SegmentKind {
        self.segment
    }

    /// Choose the segment kind for the next gesture. Ignored while scaling.
    pub fn select_segment(&mut self, kind: SegmentKind) -> bool {
        if self.is_scaling() {
            log::debug!("Segment change to {kind:?} ignored while scaling");
            return false;
        }
        self.segment = kind;
        true
    }

    /// Start a gesture at `anchor`. Returns `false` (and changes nothing) if one is
    /// already active.
    pub fn begin(&mut self, anchor: Vec3) -> bool {
        if self.is_scaling() {
            return false;
        }

        self.state = GestureState::Scaling(StrutGesture {
            start_position: anchor,
            current_end: anchor,
            segment: self.segment,
            preview: PreviewGeometry::at(anchor),
        });
        log::info!("Started new strut at: {anchor:?}");
        true
    }

    /// Drag the live end to `end` and reshape the preview.
    ///
    /// Returns `true` when the preview geometry changed.
    pub fn update(&mut self, end: Vec3) -> bool {
        let GestureState::Scaling(gesture) = &mut self.state else {
            return false;
        };

        let max_length = self.catalog.get(gesture.segment).max_length;
        gesture.current_end = end;
        gesture.preview.reshape(gesture.start_position, end, max_length)
    }

    /// End the gesture and hand back its final geometry. `None` when idle.
    pub fn complete(&mut self) -> Option<CompletedStrut> {
        let GestureState::Scaling(gesture) = std::mem::take(&mut self.state) else {
            return None;
        };

        Some(CompletedStrut {
            geometry: gesture.preview,
            segment: gesture.segment,
            spec: *self.catalog.get(gesture.segment),
        })
    }

    /// Drop the active gesture without producing anything. Returns whether one was
    /// active.
    pub fn cancel(&mut self) -> bool {
        if !self.is_scaling() {
            return false;
        }
        self.state = GestureState::Idle;
        log::info!("Strut creation cancelled");
        true
    }
}

impl Default for StrutBuilder {
    fn default() -> Self {
        Self::new(SegmentCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_STRUT_LENGTH;
    use crate::segment::{SegmentShape, SegmentSpec};

    #[test]
    fn begin_records_anchor_and_minimal_preview() {
        let mut builder = StrutBuilder::default();
        let anchor = Vec3::new(1.0, 2.0, 0.0);
        assert!(builder.begin(anchor));

        let gesture = builder.gesture().unwrap();
        assert_eq!(gesture.start_position, anchor);
        assert_eq!(gesture.current_end, anchor);
        assert_eq!(gesture.preview.position, anchor);
        assert_eq!(gesture.preview.length, MIN_STRUT_LENGTH);
    }

    #[test]
    fn begin_while_scaling_is_ignored() {
        let mut builder = StrutBuilder::default();
        builder.begin(Vec3::zeros());
        builder.update(Vec3::new(2.0, 0.0, 0.0));

        assert!(!builder.begin(Vec3::new(9.0, 9.0, 0.0)));
        let gesture = builder.gesture().unwrap();
        assert_eq!(gesture.start_position, Vec3::zeros());
        assert_eq!(gesture.preview.length, 2.0);
    }

    #[test]
    fn update_while_idle_does_nothing() {
        let mut builder = StrutBuilder::default();
        assert!(!builder.update(Vec3::new(1.0, 0.0, 0.0)));
        assert!(builder.preview().is_none());
    }

    #[test]
    fn complete_returns_to_idle() {
        let mut builder = StrutBuilder::default();
        builder.begin(Vec3::zeros());
        builder.update(Vec3::new(3.0, 4.0, 0.0));

        let done = builder.complete().unwrap();
        assert!((done.geometry.length - 5.0).abs() < 1.0e-5);
        assert_eq!(done.segment, SegmentKind::Strut);
        assert!(!builder.is_scaling());
        assert!(builder.complete().is_none());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut builder = StrutBuilder::default();
        builder.begin(Vec3::zeros());
        assert!(builder.cancel());
        assert_eq!(builder.state(), &GestureState::Idle);
        assert!(!builder.cancel());
        assert_eq!(builder.state(), &GestureState::Idle);
    }

    #[test]
    fn segment_selection_is_locked_during_gesture() {
        let mut builder = StrutBuilder::default();
        assert!(builder.select_segment(SegmentKind::Cable));
        builder.begin(Vec3::zeros());
        assert!(!builder.select_segment(SegmentKind::Conveyor));
        assert_eq!(builder.gesture().unwrap().segment, SegmentKind::Cable);
        assert_eq!(builder.segment(), SegmentKind::Cable);
    }

    #[test]
    fn segment_max_length_bounds_preview() {
        let mut catalog = SegmentCatalog::default();
        catalog.set(
            SegmentKind::Cable,
            SegmentSpec {
                shape: SegmentShape::Capsule { radius: 0.02 },
                max_length: 2.5,
                strength: 1.0,
            },
        );
        let mut builder = StrutBuilder::new(catalog);
        builder.select_segment(SegmentKind::Cable);
        builder.begin(Vec3::zeros());
        builder.update(Vec3::new(0.0, 50.0, 0.0));
        assert_eq!(builder.preview().unwrap().length, 2.5);
    }
}
