pub mod export;
pub mod frame;

use anyhow::{Context, Result};
use std::path::Path;
use topshot_core::SceneContext;

/// Load a scene description from a JSON file
pub fn load_scene(path: &Path) -> Result<SceneContext> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse scene file {}", path.display()))
}
