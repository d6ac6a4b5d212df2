//! Headless display surface
//!
//! [`DisplaySurface`] is the boundary the per-pixel shader writes through.
//! [`Framebuffer`] is an in-memory RGBA8 implementation that shades rows in
//! parallel and can be written out as PNG.

use std::path::Path;

use glam::Vec2;
use rayon::prelude::*;
use thiserror::Error;

use crate::gpu_types::FrameUniforms;
use crate::shader::{to_rgba8, FrameShader};

#[derive(Error, Debug)]
pub enum FramebufferError {
    #[error("framebuffer dimensions must be non-zero, got {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
}

/// Something that accepts one colour per pixel each frame
pub trait DisplaySurface {
    fn resolution(&self) -> (u32, u32);

    /// `y` counts rows from the top.
    fn write_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

/// Bottom-up fragment coordinate of the centre of pixel (`x`, top-down `row`).
fn frag_coord(x: u32, row: u32, height: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, (height - row) as f32 - 0.5)
}

/// Shade every pixel of `surface` through its write callback.
pub fn render_to<S: DisplaySurface + ?Sized>(surface: &mut S, uniforms: &FrameUniforms) {
    let (width, height) = surface.resolution();
    let shader = FrameShader::new(uniforms);
    for y in 0..height {
        for x in 0..width {
            let color = shader.shade(frag_coord(x, y, height));
            surface.write_pixel(x, y, to_rgba8(color));
        }
    }
}

/// RGBA8 pixels, row-major from the top-left
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::EmptyResolution { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        })
    }

    /// Evaluate the shader for the whole frame, one rayon task per row.
    pub fn shade(&mut self, uniforms: &FrameUniforms) {
        let shader = FrameShader::new(uniforms);
        let (width, height) = (self.width, self.height);
        self.pixels
            .par_chunks_mut(width as usize * 4)
            .enumerate()
            .for_each(|(row, line)| {
                for (x, pixel) in line.chunks_exact_mut(4).enumerate() {
                    let color = shader.shade(frag_coord(x as u32, row as u32, height));
                    pixel.copy_from_slice(&to_rgba8(color));
                }
            });
    }

    /// Byte offset of pixel (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the framebuffer.
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// RGBA of pixel (`x`, `y`), `y` counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| image::Rgba(self.pixel(x, y)))
    }

    pub fn save_png(&self, path: &Path) -> Result<(), FramebufferError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl DisplaySurface for Framebuffer {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}
