use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use topshot_core::frame;

use crate::commands::load_scene;
use crate::ui;

/// Run only the framing step and print the result, writing nothing
#[derive(Args)]
pub struct FrameCommand {
    /// Scene description file (JSON)
    #[arg(short, long)]
    pub scene: PathBuf,
}

impl FrameCommand {
    pub fn execute(&self) -> Result<()> {
        let scene = load_scene(&self.scene)?;

        let object = scene.object;
        let mut camera = match scene.camera {
            Some(camera) => camera,
            None => bail!("scene has no active camera"),
        };
        let mut render = scene.render;

        let result = frame(&object, scene.reference_point, &mut camera, &mut render);

        ui::info(&format!(
            "camera center: ({:.3}, {:.3})  elevation: {:.3}",
            result.camera_center.x, result.camera_center.y, camera.location.z
        ));
        ui::info(&format!("ortho scale:   {:.3}", camera.ortho_scale));
        ui::info(&format!(
            "canvas:        {}x{}",
            result.canvas_width, result.canvas_height
        ));
        ui::info(&format!(
            "pivot:         ({}, {})",
            result.origin_offset.0, result.origin_offset.1
        ));

        Ok(())
    }
}
