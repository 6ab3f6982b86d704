//! Sprite asset export
//!
//! Runs the framing step, builds the sprite document, triggers the render and
//! persists the output tree:
//!
//! ```text
//! <dest-dir>/<asset-name>/<asset-name>.yy
//! <dest-dir>/<asset-name>/<frame-id>.png
//! <dest-dir>/<asset-name>/layers/<frame-id>/<layer-id>.png
//! ```
//!
//! All preconditions are checked before the first filesystem mutation, and a
//! failure mid-write removes the partially written sprite directory, so an
//! export either completes or leaves nothing behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::document::{build_document, DocumentIds};
use crate::framing::{frame, FramingResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::render::{RenderError, Renderer};
use crate::scene::SceneContext;

/// Extension of the sprite document file
pub const SPRITE_DOCUMENT_EXT: &str = "yy";

/// User-facing export options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Whether the texture tiles horizontally
    pub tile_horizontally: bool,
    /// Whether the texture tiles vertically
    pub tile_vertically: bool,
    /// Premultiply alpha on import
    pub premultiply_alpha: bool,
    /// Interpolate colors between pixels
    pub edge_filtering: bool,
}

/// Errors that can occur during an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("scene has no active camera")]
    MissingCamera,

    #[error("destination has no usable file name: {0}")]
    InvalidDestination(PathBuf),

    #[error("output directory already exists: {0}")]
    OutputDirExists(PathBuf),

    #[error("rendered image is {got_width}x{got_height}, expected {want_width}x{want_height}")]
    CanvasMismatch {
        got_width: u32,
        got_height: u32,
        want_width: u32,
        want_height: u32,
    },

    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to serialize sprite document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One file written by an export
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Result of a completed export
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// The sprite document file
    pub document_path: PathBuf,
    /// Every file written, document included
    pub files: Vec<ExportedFile>,
    /// Total bytes written
    pub total_bytes: u64,
    /// Export duration
    pub duration_ms: u64,
    /// Framing applied to the scene
    pub framing: FramingResult,
}

/// Exporter for top-down sprite snapshots
pub struct Exporter {
    options: ExportOptions,
    ids: Box<dyn IdGenerator>,
}

impl Exporter {
    /// Exporter with default options and random UUID identifiers
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            ids: Box::new(UuidIdGenerator),
        }
    }

    /// Substitute the identifier source, e.g. a deterministic sequence
    pub fn with_id_generator(options: ExportOptions, ids: Box<dyn IdGenerator>) -> Self {
        Self { options, ids }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export the scene's object as a sprite asset rooted next to `destination`
    ///
    /// `destination` names the asset: `props/crate.png` exports into
    /// `props/crate/`. Frames the camera (mutating `scene`), renders through
    /// `renderer` and writes the document plus image tree.
    pub fn export(
        &mut self,
        scene: &mut SceneContext,
        renderer: &mut dyn Renderer,
        destination: &Path,
    ) -> Result<ExportReport, ExportError> {
        let start_time = Instant::now();

        // Preconditions, checked before any filesystem mutation
        let camera = scene.camera.as_mut().ok_or(ExportError::MissingCamera)?;
        let asset_name = destination
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ExportError::InvalidDestination(destination.to_path_buf()))?
            .to_string();

        let framing = frame(
            &scene.object,
            scene.reference_point,
            camera,
            &mut scene.render,
        );
        debug!(
            canvas_width = framing.canvas_width,
            canvas_height = framing.canvas_height,
            "framed scene for export"
        );

        let ids = DocumentIds::generate(self.ids.as_mut());
        let document = build_document(&asset_name, &framing, &self.options, &ids);

        let rendered = renderer.render(scene)?;
        if rendered.width != framing.canvas_width || rendered.height != framing.canvas_height {
            return Err(ExportError::CanvasMismatch {
                got_width: rendered.width,
                got_height: rendered.height,
                want_width: framing.canvas_width,
                want_height: framing.canvas_height,
            });
        }

        let dest_dir = destination.parent().unwrap_or_else(|| Path::new("."));
        let sprite_dir = dest_dir.join(&asset_name);
        if sprite_dir.exists() {
            return Err(ExportError::OutputDirExists(sprite_dir));
        }

        let files = match self.persist(&sprite_dir, &asset_name, &document, &ids, &rendered) {
            Ok(files) => files,
            Err(e) => {
                // Never leave a partial tree behind
                if let Err(cleanup) = std::fs::remove_dir_all(&sprite_dir) {
                    if cleanup.kind() != std::io::ErrorKind::NotFound {
                        warn!(
                            sprite_dir = %sprite_dir.display(),
                            error = %cleanup,
                            "failed to clean up partial export"
                        );
                    }
                }
                return Err(e);
            }
        };

        let total_bytes = files.iter().map(|f| f.size_bytes).sum();
        let document_path = files[0].path.clone();
        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            asset = %asset_name,
            files = files.len(),
            total_bytes,
            duration_ms,
            "sprite export complete"
        );

        Ok(ExportReport {
            document_path,
            files,
            total_bytes,
            duration_ms,
            framing,
        })
    }

    /// Write the document and image tree under `sprite_dir`
    ///
    /// The document file is always the first entry of the returned list.
    fn persist(
        &self,
        sprite_dir: &Path,
        asset_name: &str,
        document: &crate::document::SpriteDocument,
        ids: &DocumentIds,
        rendered: &crate::render::RenderedImage,
    ) -> Result<Vec<ExportedFile>, ExportError> {
        let layer_dir = sprite_dir.join("layers").join(&ids.frame);
        std::fs::create_dir_all(&layer_dir)?;

        let document_path = sprite_dir.join(format!("{asset_name}.{SPRITE_DOCUMENT_EXT}"));
        let json = serde_json::to_string(document)?;
        std::fs::write(&document_path, &json)?;

        let frame_path = sprite_dir.join(format!("{}.png", ids.frame));
        rendered.save_png(&frame_path)?;

        let layer_path = layer_dir.join(format!("{}.png", ids.layer));
        rendered.save_png(&layer_path)?;

        let mut files = Vec::with_capacity(3);
        for path in [document_path, frame_path, layer_path] {
            let size_bytes = std::fs::metadata(&path)?.len();
            files.push(ExportedFile { path, size_bytes });
        }
        Ok(files)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
