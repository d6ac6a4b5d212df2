//! Per-frame uniform data shared by the CPU shader and `sdf.wgsl`
//!
//! Everything the shader reads is rebuilt from live state every frame by
//! [`FrameUniforms::build`]. The structs are `Pod` so the same bytes are
//! uploaded to the GPU unchanged; field order and padding mirror the WGSL
//! declarations.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use particles::{ParticleSystem, MAX_PARTICLES};
use scene::constants::BOX_COUNT;
use scene::Scene;

use crate::interaction::HighlightState;

/// Uniform buffer at binding 0
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Surface size in pixels
    pub resolution: [f32; 2],
    /// Seconds since start; passed through for the shader, not yet used by it
    pub time: f32,
    pub _pad: f32,
    /// Non-zero for the highlighted box; the fourth lane is padding
    pub highlight: [u32; 4],
    /// Box centres, `w` unused
    pub box_positions: [[f32; 4]; BOX_COUNT],
}

/// Read-only storage buffer at binding 1
///
/// Slot `i` is active when `lives[i] > 0`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleUniforms {
    /// Particle positions, `w` unused
    pub positions: [[f32; 4]; MAX_PARTICLES],
    pub lives: [f32; MAX_PARTICLES],
}

/// Everything the shader needs for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub scene: SceneUniforms,
    pub particles: ParticleUniforms,
}

impl FrameUniforms {
    /// Snapshot the current frame state into fixed-size shader buffers.
    ///
    /// The newest [`MAX_PARTICLES`] particles fill slots in pool order; unused
    /// slots stay zeroed, which the shader reads as inactive.
    pub fn build(
        resolution: (u32, u32),
        time: f32,
        highlight: &HighlightState,
        scene: &Scene,
        particles: &ParticleSystem,
    ) -> Self {
        let flags = highlight.flags();
        let mut highlight_lanes = [0u32; 4];
        for (lane, flag) in highlight_lanes.iter_mut().zip(flags) {
            *lane = u32::from(flag);
        }

        let scene_uniforms = SceneUniforms {
            resolution: [resolution.0 as f32, resolution.1 as f32],
            time,
            _pad: 0.0,
            highlight: highlight_lanes,
            box_positions: std::array::from_fn(|i| scene.box_position(i).extend(0.0).to_array()),
        };

        let mut particle_uniforms = ParticleUniforms::zeroed();
        let skip = particles.len().saturating_sub(MAX_PARTICLES);
        for (slot, particle) in particles.iter().skip(skip).enumerate() {
            particle_uniforms.positions[slot] = particle.position.extend(0.0).to_array();
            particle_uniforms.lives[slot] = particle.life;
        }

        Self {
            scene: scene_uniforms,
            particles: particle_uniforms,
        }
    }

    /// Whether box `index` is highlighted; unknown indices read as not highlighted
    pub fn is_highlighted(&self, index: usize) -> bool {
        index < BOX_COUNT && self.scene.highlight[index] != 0
    }

    /// Centre of box `index`, or the origin for an unknown index
    pub fn box_position(&self, index: usize) -> Vec3 {
        self.scene
            .box_positions
            .get(index)
            .map_or(Vec3::ZERO, |p| Vec3::new(p[0], p[1], p[2]))
    }

    /// The scene geometry described by these uniforms
    pub fn geometry(&self) -> Scene {
        Scene::with_box_positions(std::array::from_fn(|i| self.box_position(i)))
    }

    /// Active particle slots as `(position, life)`
    pub fn active_particles(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.particles
            .positions
            .iter()
            .zip(self.particles.lives.iter())
            .filter(|(_, life)| **life > 0.0)
            .map(|(p, life)| (Vec3::new(p[0], p[1], p[2]), *life))
    }
}
