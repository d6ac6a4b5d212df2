//! CPU evaluation of the per-pixel shader
//!
//! Mirrors `fs_main` in `sdf.wgsl` step for step so the headless renderer and
//! the window produce the same image: primary ray, base colour by surface,
//! diffuse + ambient light, additive particle glow, then gamma encoding.

use glam::{Vec2, Vec3, Vec4};
use scene::{Scene, SurfaceId};

use crate::camera::Camera;
use crate::gpu_types::FrameUniforms;

pub const PLANE_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);
pub const BOX_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.8);
pub const HIGHLIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);

pub const GLOW_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.1);
/// Particles further than this from the shaded point contribute nothing
pub const GLOW_RADIUS: f32 = 0.1;
pub const GLOW_GAIN: f32 = 10.0;

/// Exponent of the output encoding, roughly `1 / 2.2`
pub const GAMMA: f32 = 0.4545;

/// Per-frame shading inputs, built once and shared by every pixel
pub struct FrameShader<'a> {
    uniforms: &'a FrameUniforms,
    scene: Scene,
    camera: Camera,
    resolution: Vec2,
}

impl<'a> FrameShader<'a> {
    pub fn new(uniforms: &'a FrameUniforms) -> Self {
        Self {
            uniforms,
            scene: uniforms.geometry(),
            camera: Camera::default(),
            resolution: Vec2::from(uniforms.scene.resolution),
        }
    }

    /// Gamma-encoded RGBA for a pixel centre given bottom-up.
    ///
    /// Channels are not clamped; overlapping glow can exceed 1.
    pub fn shade(&self, frag_coord: Vec2) -> Vec4 {
        let uv = Camera::uv(frag_coord, self.resolution);
        let ro = self.camera.eye;
        let rd = self.camera.ray_direction(uv);

        let hit = self.scene.march(ro, rd);
        let p = ro + rd * hit.distance;

        let mut color = self.base_color(hit.surface);
        color *= self.scene.light(p);
        color += self.glow(p);

        gamma_encode(color).extend(1.0)
    }

    fn base_color(&self, surface: SurfaceId) -> Vec3 {
        match surface {
            SurfaceId::Box(index) if self.uniforms.is_highlighted(index) => HIGHLIGHT_COLOR,
            SurfaceId::Box(_) => BOX_COLOR,
            SurfaceId::Plane | SurfaceId::Background => PLANE_COLOR,
        }
    }

    /// Additive warm glow from every live particle within [`GLOW_RADIUS`] of `p`.
    pub fn glow(&self, p: Vec3) -> Vec3 {
        self.uniforms
            .active_particles()
            .filter_map(|(position, life)| {
                let dist = p.distance(position);
                (dist < GLOW_RADIUS).then(|| GLOW_COLOR * life * (GLOW_RADIUS - dist) * GLOW_GAIN)
            })
            .sum()
    }
}

pub fn gamma_encode(color: Vec3) -> Vec3 {
    color.powf(GAMMA)
}

/// Quantise a shaded colour to RGBA8, saturating out-of-range channels.
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0 + Vec4::splat(0.5);
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
