//! # Box Burst Renderer
//!
//! Frame orchestration and presentation for the box scene.
//!
//! [`RenderLoop`] owns the mutable state (particles, highlight) and turns it
//! into [`FrameUniforms`] once per frame. The uniforms are consumed either by
//! the CPU shader in [`shader`] (headless rendering into a [`Framebuffer`]) or
//! uploaded unchanged to `sdf.wgsl` by the window front-end in [`run`].

pub mod audio;
pub mod camera;
pub mod framebuffer;
pub mod gpu_types;
pub mod interaction;
pub mod pipeline;
pub mod render_loop;
pub mod run;
pub mod shader;
pub mod state;

pub use audio::{AudioFeedback, LoggedAudio, NoAudio, SnippetCursor};
pub use framebuffer::{render_to, DisplaySurface, Framebuffer, FramebufferError};
pub use gpu_types::{FrameUniforms, ParticleUniforms, SceneUniforms};
pub use interaction::{box_for_click, normalize_click_x, HighlightState, InteractionController};
pub use render_loop::RenderLoop;
pub use run::run;
