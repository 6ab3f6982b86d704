//! # Topshot Core
//!
//! Engine for exporting top-down orthographic snapshots of a 3D object as
//! sprite assets for the GameMaker: Studio toolchain.
//!
//! This crate provides the two halves of the export pipeline:
//!
//! - **Framing** — derive the bounding box covering the object and the scene
//!   reference point, aim the orthographic camera at it and lock the output
//!   canvas to the box's aspect ratio
//! - **Export** — generate fresh identifiers, build the `.yy` sprite
//!   document, trigger a render and persist the document plus image tree
//!
//! ## Architecture
//!
//! The host application's scene is modeled as an explicitly passed
//! [`SceneContext`] value rather than ambient global state, and the host's
//! rendering pipeline sits behind the [`Renderer`] trait. Identifier
//! generation is an injected [`IdGenerator`] capability so deterministic
//! sequences can replace random UUIDs in tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use topshot_core::{
//!     ExportOptions, Exporter, Renderer, RenderedImage, RenderError,
//!     scene::{Camera, ObjectTransform, RenderSettings, SceneContext, Vec2, Vec3},
//! };
//! use std::path::Path;
//!
//! struct HostRenderer;
//!
//! impl Renderer for HostRenderer {
//!     fn render(&mut self, scene: &SceneContext) -> Result<RenderedImage, RenderError> {
//!         // Hand off to the host application's render pipeline here
//!         Ok(RenderedImage::new(scene.render.resolution_x, scene.render.resolution_y))
//!     }
//! }
//!
//! let mut scene = SceneContext {
//!     object: ObjectTransform {
//!         location: Vec3::new(0.0, 0.0, 0.0),
//!         dimensions: Vec3::new(10.0, 10.0, 2.0),
//!     },
//!     reference_point: Vec2::new(5.0, 5.0),
//!     camera: Some(Camera::default()),
//!     render: RenderSettings::default(),
//! };
//!
//! let mut exporter = Exporter::with_options(ExportOptions::default());
//! let report = exporter.export(&mut scene, &mut HostRenderer, Path::new("props/crate.png"))?;
//! println!("wrote {} files", report.files.len());
//! # Ok::<(), topshot_core::ExportError>(())
//! ```

pub mod document;
pub mod export;
pub mod framing;
pub mod id;
pub mod render;
pub mod scene;

#[cfg(test)]
mod test_integration;

// Re-export commonly used types
pub use document::{build_document, DocumentIds, SpriteDocument};
pub use export::{
    ExportError, ExportOptions, ExportReport, ExportedFile, Exporter, SPRITE_DOCUMENT_EXT,
};
pub use framing::{frame, BoundingBox2D, FramingResult, MIN_ORTHO_SCALE};
pub use id::{IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use render::{RenderError, RenderedImage, Renderer};
pub use scene::{Camera, FixedAxis, ObjectTransform, RenderSettings, SceneContext, Vec2, Vec3};
