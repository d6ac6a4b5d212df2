//! Distance functions for the plane and the boxes.

use glam::Vec3;

use crate::constants::MAX_DIST;
use crate::types::{Scene, SurfaceId};

/// Distance from `p` to the ground plane `y = 0`.
#[must_use]
#[inline]
pub fn sd_plane(p: Vec3) -> f32 {
    p.y
}

/// Distance from `p` to an origin-centred box with the given half extents.
///
/// Points inside the box report zero.
#[must_use]
#[inline]
pub fn sd_box(p: Vec3, half_extents: Vec3) -> f32 {
    (p.abs() - half_extents).max(Vec3::ZERO).length()
}

impl Scene {
    /// Closest surface to `p` and the distance to it.
    ///
    /// Boxes are evaluated in index order and the plane last; a candidate only
    /// replaces the current best when strictly closer, so a box wins an exact
    /// tie with the plane.
    #[must_use]
    pub fn distance(&self, p: Vec3) -> (f32, SurfaceId) {
        let mut min_dist = MAX_DIST;
        let mut surface = SurfaceId::Background;

        for (index, body) in self.boxes().iter().enumerate() {
            let dist = sd_box(p - body.position, body.half_extents);
            if dist < min_dist {
                min_dist = dist;
                surface = SurfaceId::Box(index);
            }
        }

        let plane_dist = sd_plane(p);
        if plane_dist < min_dist {
            min_dist = plane_dist;
            surface = SurfaceId::Plane;
        }

        (min_dist, surface)
    }

    /// Distance only, for gradient estimation.
    #[must_use]
    #[inline]
    pub fn distance_only(&self, p: Vec3) -> f32 {
        self.distance(p).0
    }
}
