//! Seam to the host rendering pipeline
//!
//! Rendering itself is an external collaborator: the core only defines the
//! blocking [`Renderer`] contract and the RGBA image it hands back. The CLI
//! ships a flat preview implementation; tests use stubs.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use thiserror::Error;

/// Errors surfaced by a render backend
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render backend error: {0}")]
    Backend(String),

    #[error("no active scene to render")]
    NoScene,
}

/// An RGBA8 raster produced by a render backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl RenderedImage {
    /// A fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Set one pixel; out-of-bounds coordinates are ignored
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&rgba);
    }

    /// Encode as PNG and write to `path`
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        let buffer: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width, self.height, self.pixels.clone()).ok_or_else(
                || {
                    image::ImageError::Parameter(image::error::ParameterError::from_kind(
                        image::error::ParameterErrorKind::DimensionMismatch,
                    ))
                },
            )?;
        buffer.save_with_format(path, image::ImageFormat::Png)
    }
}

/// Blocking render call into the host pipeline
///
/// Invoked after framing, so implementations see the repositioned camera and
/// the final canvas resolution in the scene's render settings.
pub trait Renderer {
    fn render(&mut self, scene: &crate::scene::SceneContext) -> Result<RenderedImage, RenderError>;
}
