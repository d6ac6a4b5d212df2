use std::collections::VecDeque;

use glam::Vec3;

use crate::{BURST_SIZE, LIFE_STEP, MAX_PARTICLES, MAX_SPEED};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Constant for the particle's lifetime; no gravity or drag.
    pub velocity: Vec3,
    /// In `(0, 1]` while the particle is alive.
    pub life: f32,
}

impl Particle {
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            life: 1.0,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Owns the live particle pool; the only place particles are created or removed.
#[derive(Debug)]
pub struct ParticleSystem {
    pool: VecDeque<Particle>,
    rng: fastrand::Rng,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Deterministic velocities for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        Self {
            pool: VecDeque::with_capacity(MAX_PARTICLES + BURST_SIZE),
            rng,
        }
    }

    /// Spawn a burst of [`BURST_SIZE`] particles at `position`.
    ///
    /// If the pool then exceeds [`MAX_PARTICLES`], the oldest particles are
    /// dropped until it fits.
    pub fn spawn_burst(&mut self, position: Vec3) {
        for _ in 0..BURST_SIZE {
            let velocity = self.random_velocity();
            self.pool.push_back(Particle::new(position, velocity));
        }

        let excess = self.pool.len().saturating_sub(MAX_PARTICLES);
        if excess > 0 {
            self.pool.drain(..excess);
            tracing::debug!(evicted = excess, "particle pool over capacity");
        }
    }

    /// Step every particle one frame and drop the ones that have expired.
    ///
    /// Call exactly once per rendered frame.
    pub fn advance(&mut self) {
        for particle in &mut self.pool {
            particle.position += particle.velocity;
            particle.life -= LIFE_STEP;
        }
        self.pool.retain(Particle::is_alive);
    }

    fn random_velocity(&mut self) -> Vec3 {
        Vec3::new(
            self.random_component(),
            self.random_component(),
            self.random_component(),
        )
    }

    fn random_component(&mut self) -> f32 {
        (self.rng.f32() - 0.5) * 2.0 * MAX_SPEED
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Live particles, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Particle> + '_ {
        self.pool.iter()
    }
}
