#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Box Burst Particles
//!
//! A bounded burst simulation. Each click spawns [`BURST_SIZE`] particles at a
//! box centre; every frame they drift along a constant velocity and lose
//! [`LIFE_STEP`] of life until they disappear.
//!
//! The live set is an oldest-first [`std::collections::VecDeque`] that never
//! holds more than [`MAX_PARTICLES`] entries after a spawn: overflow is evicted
//! from the front immediately, so the newest particles are always the ones the
//! shader sees.

pub mod system;

pub use system::{Particle, ParticleSystem};

/// Particles created per click.
pub const BURST_SIZE: usize = 100;
/// Live particle cap, equal to the number of shader slots.
pub const MAX_PARTICLES: usize = 500;
/// Life lost per advanced frame.
pub const LIFE_STEP: f32 = 0.02;
/// Each velocity component is sampled uniformly from `[-MAX_SPEED, MAX_SPEED]`.
pub const MAX_SPEED: f32 = 0.075;
