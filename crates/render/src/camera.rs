//! Fixed pinhole camera used by the ray marcher
//!
//! The camera never moves: rays start at [`Camera::eye`] and pass through an
//! image plane one unit in front of it along +Z, scaled by the image height.

use glam::{Vec2, Vec3};

/// Pinhole camera looking down +Z
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Ray origin for every pixel
    pub eye: Vec3,
    /// Distance from the eye to the image plane
    pub focal_length: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 0.0),
            focal_length: 1.0,
        }
    }
}

impl Camera {
    /// Normalised screen coordinate for a bottom-up pixel position.
    ///
    /// The image centre maps to the origin and the vertical axis spans
    /// `[-0.5, 0.5]`; the horizontal span follows the aspect ratio.
    pub fn uv(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
        (frag_coord - 0.5 * resolution) / resolution.y
    }

    /// Unit direction of the primary ray through `uv`
    pub fn ray_direction(&self, uv: Vec2) -> Vec3 {
        uv.extend(self.focal_length).normalize()
    }
}
