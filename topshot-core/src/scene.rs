use serde::{Deserialize, Serialize};

/// A point or extent in the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A world-space position or size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The horizontal (x, y) components
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// World-space placement and extent of the object being exported
///
/// `dimensions` is the full size of the object's axis-aligned bounds, so the
/// object occupies `location ± dimensions / 2` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Center of the object's bounds
    pub location: Vec3,
    /// Full extent of the bounds on each axis
    pub dimensions: Vec3,
}

/// The orthographic render camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub location: Vec3,
    /// World-space width/height visible through the camera
    pub ortho_scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            location: Vec3::default(),
            ortho_scale: 1.0,
        }
    }
}

/// Which render-resolution axis is held fixed while framing
///
/// The framing step only ever recomputes one axis; the other is taken as
/// external configuration. `Auto` picks the box's longer side as the fixed
/// axis, matching the observed exporter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedAxis {
    #[default]
    Auto,
    Width,
    Height,
}

/// Output-canvas configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// Axis treated as the fixed configuration value during framing
    #[serde(default)]
    pub fixed_axis: FixedAxis,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 64,
            resolution_y: 64,
            fixed_axis: FixedAxis::Auto,
        }
    }
}

/// Everything the export pipeline reads from (and writes back into) the scene
///
/// This value is exclusively owned by the caller and passed `&mut` through the
/// pipeline; there is no ambient scene singleton. `camera` is `None` when the
/// scene has no active render camera, which the exporter rejects before
/// touching the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneContext {
    /// The object to snapshot
    pub object: ObjectTransform,
    /// Scene origin marker, guaranteed visible in the framed shot
    pub reference_point: Vec2,
    /// Active render camera, if any
    pub camera: Option<Camera>,
    /// Output-canvas configuration
    #[serde(default)]
    pub render: RenderSettings,
}
