//! # Box Burst Application Logic
//!
//! Builds a [`RenderLoop`] from the command line and drives it either
//! headlessly, shading frames on the CPU and writing them as PNG, or in a
//! window through the GPU front-end in [`render::run`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use particles::ParticleSystem;
use render::{Framebuffer, InteractionController, LoggedAudio, RenderLoop};

use crate::cli::{Args, ClickSpec};

/// Simulated seconds per headless frame
pub const HEADLESS_FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Assemble the frame driver described by `args`.
#[must_use]
pub fn build_render_loop(args: &Args) -> RenderLoop {
    let particles = match args.seed {
        Some(seed) => ParticleSystem::with_seed(seed),
        None => ParticleSystem::new(),
    };
    let interaction = InteractionController::new(Box::new(LoggedAudio), args.track_duration);
    RenderLoop::new(particles, interaction)
}

/// Run until the window is closed.
///
/// # Errors
///
/// Returns an error if the window, surface or GPU device cannot be created.
pub fn run_windowed(args: &Args) -> Result<()> {
    if !args.clicks.is_empty() || args.output.is_some() {
        tracing::warn!("--click and --output only apply to headless runs; ignoring them");
    }
    tracing::info!(width = args.width, height = args.height, "opening window");
    render::run(build_render_loop(args), args.width, args.height)
}

/// Simulate `args.frames` frames, applying scripted clicks between ticks.
///
/// # Errors
///
/// Returns an error if the output directory or a frame file cannot be written.
pub fn run_headless(args: &Args) -> Result<()> {
    let mut frame_loop = build_render_loop(args);
    let mut framebuffer = Framebuffer::new(args.width, args.height)?;

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }
    for click in args.clicks.iter().filter(|c| c.frame >= args.frames) {
        tracing::warn!(frame = click.frame, x = click.x, "scripted click is past the last frame; ignoring it");
    }

    tracing::info!(
        frames = args.frames,
        width = args.width,
        height = args.height,
        "running headless"
    );

    let mut saved = 0usize;
    for frame in 0..args.frames {
        for click in clicks_at(&args.clicks, frame) {
            frame_loop.click(click.x);
        }

        let elapsed = frame as f32 * HEADLESS_FRAME_SECONDS;
        let uniforms = frame_loop.tick((args.width, args.height), elapsed);

        if let (Some(dir), true) = (&args.output, args.should_save(frame)) {
            framebuffer.shade(&uniforms);
            save_frame(&framebuffer, dir, frame)?;
            saved += 1;
        }
    }

    tracing::info!(
        frames = frame_loop.frame_count(),
        saved,
        live_particles = frame_loop.particles().len(),
        highlighted = ?frame_loop.highlight().selected(),
        "headless run finished"
    );
    Ok(())
}

/// Scripted clicks for `frame`, in command line order
fn clicks_at(clicks: &[ClickSpec], frame: u64) -> impl Iterator<Item = &ClickSpec> {
    clicks.iter().filter(move |c| c.frame == frame)
}

#[must_use]
pub fn frame_path(dir: &Path, frame: u64) -> std::path::PathBuf {
    dir.join(format!("frame_{frame:04}.png"))
}

fn save_frame(framebuffer: &Framebuffer, dir: &Path, frame: u64) -> Result<()> {
    let path = frame_path(dir, frame);
    framebuffer
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(frame, path = %path.display(), "frame saved");
    Ok(())
}
