//! Normals and direct lighting from the single point light.

use glam::Vec3;

use crate::constants::{AMBIENT, LIGHT_POSITION, NORMAL_EPSILON, SHADOW_FACTOR, SURF_DIST};
use crate::types::Scene;

impl Scene {
    /// Surface normal at `p` from a central difference of the distance field.
    ///
    /// Returns zero where the gradient vanishes (deep inside a box).
    #[must_use]
    pub fn normal(&self, p: Vec3) -> Vec3 {
        let axis = |dir: Vec3| {
            self.distance_only(p + dir * NORMAL_EPSILON)
                - self.distance_only(p - dir * NORMAL_EPSILON)
        };
        Vec3::new(axis(Vec3::X), axis(Vec3::Y), axis(Vec3::Z)).normalize_or_zero()
    }

    /// Diffuse plus ambient intensity at the surface point `p`.
    ///
    /// The diffuse term drops to [`SHADOW_FACTOR`] of its value when a ray
    /// marched towards the light hits anything before reaching it.
    #[must_use]
    pub fn light(&self, p: Vec3) -> f32 {
        let to_light = LIGHT_POSITION - p;
        let l = to_light.normalize_or_zero();
        let n = self.normal(p);

        let mut diffuse = n.dot(l).clamp(0.0, 1.0);
        if self.in_shadow(p + n * SURF_DIST * 2.0, l, to_light.length()) {
            diffuse *= SHADOW_FACTOR;
        }

        diffuse + AMBIENT
    }

    /// Whether a ray from `origin` along `l` is blocked within `light_distance`.
    #[must_use]
    pub fn in_shadow(&self, origin: Vec3, l: Vec3, light_distance: f32) -> bool {
        self.march(origin, l).distance < light_distance
    }
}
