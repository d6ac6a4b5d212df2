#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Box Burst Scene
//!
//! Signed distance functions, sphere tracing and direct lighting for the
//! three-box scene.
//!
//! The scene is deliberately tiny: one ground plane at `y = 0` and three
//! axis-aligned boxes that never move. Every query evaluates all four
//! candidates, so there is no acceleration structure and no per-frame state.
//!
//! ## Key Components
//!
//! -   **Geometry:** [`Scene::distance`] in the [`sdf`] module returns the
//!     closest surface and its [`SurfaceId`].
//! -   **Ray marching:** [`Scene::march`] in the [`raymarch`] module walks a
//!     ray until it touches a surface or leaves the scene.
//! -   **Lighting:** [`Scene::normal`] and [`Scene::light`] in the
//!     [`lighting`] module produce the diffuse + ambient term, including a
//!     binary shadow ray towards the single point light.
//!
//! ```rust
//! use scene::{Scene, SurfaceId};
//! use glam::Vec3;
//!
//! let scene = Scene::new();
//! let hit = scene.march(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y);
//! assert_eq!(hit.surface, SurfaceId::Plane);
//! ```

pub mod constants;
pub mod lighting;
pub mod raymarch;
pub mod sdf;
pub mod types;

pub use types::{BoxBody, Hit, Scene, SurfaceId};
