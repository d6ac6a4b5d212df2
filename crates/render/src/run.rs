use anyhow::{Context, Result};
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::render_loop::RenderLoop;
use crate::state::State;

/// Open a window and run `frame_loop` once per redraw until it is closed.
///
/// Input events are drained by winit before each redraw, so clicks always
/// land between ticks.
pub fn run(frame_loop: RenderLoop, width: u32, height: u32) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Box Burst")
            .with_inner_size(PhysicalSize::new(width, height))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(window.clone(), frame_loop))?;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == state.window().id() => {
                if !state.input(event) {
                    match event {
                        WindowEvent::CloseRequested => {
                            tracing::info!(
                                frames = state.frame_loop().frame_count(),
                                "window closed"
                            );
                            elwt.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            state.update();
                            match state.render() {
                                Ok(()) => {}
                                // Reconfigure the surface if lost
                                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    tracing::error!("surface out of memory, exiting");
                                    elwt.exit();
                                }
                                // Outdated and Timeout resolve on the next frame
                                Err(e) => tracing::warn!("surface error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                state.window().request_redraw();
            }
            _ => {}
        }
    })?;
    Ok(())
}
