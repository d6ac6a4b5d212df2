//! Frame driver
//!
//! [`RenderLoop`] owns all mutable state explicitly: the particle system and
//! the interaction controller, plus the immutable scene. Clicks are applied
//! between ticks; each tick advances particles once and snapshots the frame
//! into [`FrameUniforms`] for the shader.

use particles::ParticleSystem;
use scene::Scene;

use crate::gpu_types::FrameUniforms;
use crate::interaction::{HighlightState, InteractionController};

pub struct RenderLoop {
    scene: Scene,
    particles: ParticleSystem,
    interaction: InteractionController,
    frames: u64,
}

impl RenderLoop {
    pub fn new(particles: ParticleSystem, interaction: InteractionController) -> Self {
        Self {
            scene: Scene::new(),
            particles,
            interaction,
            frames: 0,
        }
    }

    /// Apply a click at normalised x. Never call while a frame is in flight.
    pub fn click(&mut self, x: f32) -> usize {
        self.interaction
            .on_click(x, &self.scene, &mut self.particles)
    }

    /// Advance the simulation by exactly one frame and build its uniforms.
    pub fn tick(&mut self, resolution: (u32, u32), elapsed: f32) -> FrameUniforms {
        self.particles.advance();
        self.frames += 1;

        let uniforms = FrameUniforms::build(
            resolution,
            elapsed,
            &self.interaction.highlight(),
            &self.scene,
            &self.particles,
        );
        tracing::debug!(
            frame = self.frames,
            elapsed,
            live_particles = self.particles.len(),
            "frame uniforms built"
        );
        uniforms
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn highlight(&self) -> HighlightState {
        self.interaction.highlight()
    }
}
