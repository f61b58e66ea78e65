use crate::constants::{DEFAULT_SEGMENT_STRENGTH, MAX_STRUT_LENGTH, MIN_STRUT_LENGTH, STRUT_RADIUS};
use rapier3d::prelude::*;

/// Kinds of segment a joint group can place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    #[default]
    Strut,
    Conveyor,
    Cable,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [SegmentKind::Strut, SegmentKind::Conveyor, SegmentKind::Cable];

    #[inline]
    fn index(self) -> usize {
        match self {
            SegmentKind::Strut => 0,
            SegmentKind::Conveyor => 1,
            SegmentKind::Cable => 2,
        }
    }
}

/// Cross-section of a segment. The long axis is always local +Y and the length is
/// supplied when the collider is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentShape {
    /// Y-aligned cylinder (meters).
    Cylinder { radius: f32 },

    /// Y-aligned capsule (meters). The caps are included in the segment length.
    Capsule { radius: f32 },

    /// Y-aligned box with the given half-extents across the long axis (meters).
    Cuboid { half_width: f32, half_depth: f32 },
}

impl SegmentShape {
    /// Radius used when reporting the segment's thickness.
    pub fn radius(&self) -> f32 {
        match *self {
            SegmentShape::Cylinder { radius } | SegmentShape::Capsule { radius } => radius,
            SegmentShape::Cuboid {
                half_width,
                half_depth,
            } => half_width.max(half_depth),
        }
    }

    /// Build a Rapier collider of total length `length` along local +Y.
    ///
    /// The collider is created with identity local transform; the pose lives on the
    /// parent rigid-body.
    pub fn collider(&self, length: f32) -> Collider {
        let half_height = 0.5 * length.max(MIN_STRUT_LENGTH);
        match *self {
            SegmentShape::Cylinder { radius } => ColliderBuilder::cylinder(half_height, radius).build(),

            // Rapier's capsule half-height excludes the caps.
            SegmentShape::Capsule { radius } => {
                ColliderBuilder::capsule_y((half_height - radius).max(0.0), radius).build()
            }

            SegmentShape::Cuboid {
                half_width,
                half_depth,
            } => ColliderBuilder::cuboid(half_width, half_height, half_depth).build(),
        }
    }
}

/// Physical parameters of one segment kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSpec {
    pub shape: SegmentShape,
    /// Upper clamp for the preview length (meters).
    pub max_length: f32,
    /// Load the segment is rated for. Carried on finalized bodies; not simulated.
    pub strength: f32,
}

impl SegmentSpec {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.shape.radius()
    }
}

/// Lookup table from [`SegmentKind`] to [`SegmentSpec`].
///
/// Built once and handed to each builder, instead of living in process-wide state.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentCatalog {
    specs: [SegmentSpec; 3],
}

impl SegmentCatalog {
    pub fn new(strut: SegmentSpec, conveyor: SegmentSpec, cable: SegmentSpec) -> Self {
        Self {
            specs: [strut, conveyor, cable],
        }
    }

    #[inline]
    pub fn get(&self, kind: SegmentKind) -> &SegmentSpec {
        &self.specs[kind.index()]
    }

    pub fn set(&mut self, kind: SegmentKind, spec: SegmentSpec) {
        self.specs[kind.index()] = spec;
    }
}

impl Default for SegmentCatalog {
    fn default() -> Self {
        Self::new(
            SegmentSpec {
                shape: SegmentShape::Cylinder {
                    radius: STRUT_RADIUS,
                },
                max_length: MAX_STRUT_LENGTH,
                strength: DEFAULT_SEGMENT_STRENGTH,
            },
            SegmentSpec {
                shape: SegmentShape::Cuboid {
                    half_width: 0.25,
                    half_depth: 0.05,
                },
                max_length: MAX_STRUT_LENGTH,
                strength: DEFAULT_SEGMENT_STRENGTH,
            },
            SegmentSpec {
                shape: SegmentShape::Capsule { radius: 0.02 },
                max_length: MAX_STRUT_LENGTH,
                strength: 0.25 * DEFAULT_SEGMENT_STRENGTH,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strut_is_thin_cylinder() {
        let catalog = SegmentCatalog::default();
        let strut = catalog.get(SegmentKind::Strut);
        assert_eq!(strut.shape, SegmentShape::Cylinder { radius: 0.1 });
        assert_eq!(strut.max_length, 10.0);
        assert_eq!(strut.radius(), 0.1);
    }

    #[test]
    fn catalog_entries_are_replaceable() {
        let mut catalog = SegmentCatalog::default();
        let long_cable = SegmentSpec {
            shape: SegmentShape::Capsule { radius: 0.01 },
            max_length: 30.0,
            strength: 5.0,
        };
        catalog.set(SegmentKind::Cable, long_cable);
        assert_eq!(catalog.get(SegmentKind::Cable), &long_cable);
        assert_eq!(catalog.get(SegmentKind::Strut).max_length, 10.0);
    }

    #[test]
    fn cylinder_collider_spans_length() {
        let collider = SegmentShape::Cylinder { radius: 0.1 }.collider(4.0);
        let cylinder = collider.shape().as_cylinder().unwrap();
        assert!((cylinder.half_height - 2.0).abs() < 1.0e-6);
        assert!((cylinder.radius - 0.1).abs() < 1.0e-6);
    }

    #[test]
    fn capsule_shorter_than_caps_collapses_to_sphere() {
        let collider = SegmentShape::Capsule { radius: 0.5 }.collider(0.5);
        let capsule = collider.shape().as_capsule().unwrap();
        assert!(capsule.half_height().abs() < 1.0e-6);
    }

    #[test]
    fn cuboid_collider_uses_cross_section() {
        let collider = SegmentShape::Cuboid {
            half_width: 0.25,
            half_depth: 0.05,
        }
        .collider(2.0);
        let cuboid = collider.shape().as_cuboid().unwrap();
        assert!((cuboid.half_extents.x - 0.25).abs() < 1.0e-6);
        assert!((cuboid.half_extents.y - 1.0).abs() < 1.0e-6);
        assert!((cuboid.half_extents.z - 0.05).abs() < 1.0e-6);
    }
}
