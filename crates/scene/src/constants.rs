//! Fixed parameters of the scene and the ray marcher.

use glam::Vec3;

/// Upper bound on sphere-tracing iterations per ray.
pub const MAX_STEPS: usize = 64;
/// Rays that travel further than this are misses.
pub const MAX_DIST: f32 = 100.0;
/// A probe closer than this counts as a surface hit.
pub const SURF_DIST: f32 = 0.001;
/// Offset used for the central-difference normal.
pub const NORMAL_EPSILON: f32 = 0.001;

/// Number of boxes in the scene.
pub const BOX_COUNT: usize = 3;
/// Half extents shared by every box.
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.75, 1.0);
/// Box centres, by index.
pub const BOX_POSITIONS: [Vec3; BOX_COUNT] = [
    Vec3::new(0.0, 1.0, 6.0),
    Vec3::new(-3.0, 1.0, 6.0),
    Vec3::new(3.0, 1.0, 6.0),
];

/// Position of the single point light.
pub const LIGHT_POSITION: Vec3 = Vec3::new(2.0, 5.0, 6.0);
/// Diffuse multiplier applied when the shadow ray is blocked.
pub const SHADOW_FACTOR: f32 = 0.1;
/// Ambient term, added unconditionally.
pub const AMBIENT: f32 = 0.2;
