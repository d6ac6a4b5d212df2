//! Sphere tracing through the scene.

use glam::Vec3;

use crate::constants::{MAX_DIST, MAX_STEPS, SURF_DIST};
use crate::types::{Hit, Scene, SurfaceId};

impl Scene {
    /// March a ray from `origin` along the unit vector `direction`.
    ///
    /// Each step advances by the distance to the closest surface. Marching
    /// stops on a probe closer than [`SURF_DIST`], once the ray has travelled
    /// past [`MAX_DIST`], or after [`MAX_STEPS`] probes. In the last two cases
    /// the returned surface is whatever the final probe saw.
    #[must_use]
    pub fn march(&self, origin: Vec3, direction: Vec3) -> Hit {
        let mut travelled = 0.0;
        let mut surface = SurfaceId::Background;

        for _ in 0..MAX_STEPS {
            let p = origin + direction * travelled;
            let (step, probe_surface) = self.distance(p);
            surface = probe_surface;
            travelled += step;
            if travelled > MAX_DIST || step < SURF_DIST {
                break;
            }
        }

        Hit {
            distance: travelled,
            surface,
        }
    }
}
