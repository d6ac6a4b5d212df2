use glam::Vec3;

use crate::constants::{BOX_COUNT, BOX_HALF_EXTENTS, BOX_POSITIONS};

/// Identity of the surface closest to a probe point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceId {
    /// Nothing within range.
    Background,
    /// The ground plane at `y = 0`.
    Plane,
    /// One of the boxes, by index.
    Box(usize),
}

/// Result of marching a single ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Distance travelled along the ray.
    pub distance: f32,
    /// Surface reported by the last probe.
    pub surface: SurfaceId,
}

/// Axis-aligned box with a fixed centre.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxBody {
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl BoxBody {
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            position,
            half_extents: BOX_HALF_EXTENTS,
        }
    }
}

/// The ground plane plus three boxes, fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    boxes: [BoxBody; BOX_COUNT],
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::with_box_positions(BOX_POSITIONS)
    }

    /// Scene rebuilt from box centres, e.g. as read back from frame uniforms.
    #[must_use]
    pub fn with_box_positions(positions: [Vec3; BOX_COUNT]) -> Self {
        Self {
            boxes: positions.map(BoxBody::new),
        }
    }

    #[must_use]
    pub fn boxes(&self) -> &[BoxBody; BOX_COUNT] {
        &self.boxes
    }

    /// Centre of box `index`, or the origin for an unknown index.
    #[must_use]
    pub fn box_position(&self, index: usize) -> Vec3 {
        self.boxes.get(index).map_or(Vec3::ZERO, |b| b.position)
    }
}
