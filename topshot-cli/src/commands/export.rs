use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use topshot_core::{ExportOptions, Exporter};

use crate::commands::load_scene;
use crate::preview::PreviewRenderer;
use crate::ui;

/// Export a scene's object as a sprite asset
#[derive(Args)]
pub struct ExportCommand {
    /// Scene description file (JSON)
    #[arg(short, long)]
    pub scene: PathBuf,

    /// Destination path naming the asset, e.g. props/crate.png
    #[arg(short, long)]
    pub output: PathBuf,

    /// Tile the texture horizontally
    #[arg(long)]
    pub tile_horizontally: bool,

    /// Tile the texture vertically
    #[arg(long)]
    pub tile_vertically: bool,

    /// Premultiply alpha on import
    #[arg(long)]
    pub premultiply_alpha: bool,

    /// Interpolate colors between pixels
    #[arg(long)]
    pub edge_filtering: bool,

    /// Replace an existing output directory
    #[arg(long)]
    pub overwrite: bool,
}

impl ExportCommand {
    pub fn execute(&self) -> Result<()> {
        let mut scene = load_scene(&self.scene)?;

        if self.overwrite {
            self.remove_existing_output()?;
        }

        let options = ExportOptions {
            tile_horizontally: self.tile_horizontally,
            tile_vertically: self.tile_vertically,
            premultiply_alpha: self.premultiply_alpha,
            edge_filtering: self.edge_filtering,
        };

        let mut exporter = Exporter::with_options(options);
        let report = exporter
            .export(&mut scene, &mut PreviewRenderer, &self.output)
            .with_context(|| format!("Failed to export {}", self.output.display()))?;

        ui::success(&format!(
            "Exported {} ({} files, {})",
            report.document_path.display(),
            report.files.len(),
            ui::format_file_size(report.total_bytes)
        ));
        for file in &report.files {
            ui::info(&format!(
                "  {} ({})",
                file.path.display(),
                ui::format_file_size(file.size_bytes)
            ));
        }

        Ok(())
    }

    /// Drop a previous export of the same asset, if any
    fn remove_existing_output(&self) -> Result<()> {
        let asset_name = match self.output.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => return Ok(()), // exporter reports the bad destination
        };
        let dest_dir = self
            .output
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        let sprite_dir = dest_dir.join(&asset_name);
        if sprite_dir.exists() {
            info!(sprite_dir = %sprite_dir.display(), "removing existing output");
            std::fs::remove_dir_all(&sprite_dir)
                .with_context(|| format!("Failed to remove {}", sprite_dir.display()))?;
        }
        Ok(())
    }
}
