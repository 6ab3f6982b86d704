//! Camera framing for the top-down snapshot
//!
//! Derives the smallest axis-aligned box covering both the object's
//! horizontal extent and the scene reference point, then points the
//! orthographic camera at it and locks the output canvas to the box's
//! aspect ratio.

use crate::scene::{Camera, FixedAxis, ObjectTransform, RenderSettings, Vec2, Vec3};

/// Lower bound for the camera's orthographic scale
///
/// Zero-size objects produce a zero-area bounding box; the scale is floored
/// here so the camera never degenerates to a zero view volume.
pub const MIN_ORTHO_SCALE: f32 = 1e-3;

/// Axis-aligned rectangle in the horizontal plane
///
/// Derived per framing call, never stored in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox2D {
    /// Smallest box containing the object's horizontal extent and `point`
    pub fn of_object_and_point(object: &ObjectTransform, point: Vec2) -> Self {
        let half_x = object.dimensions.x / 2.0;
        let half_y = object.dimensions.y / 2.0;

        let min = Vec2::new(
            (object.location.x - half_x).min(point.x),
            (object.location.y - half_y).min(point.y),
        );
        let max = Vec2::new(
            (object.location.x + half_x).max(point.x),
            (object.location.y + half_y).max(point.y),
        );

        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Output of the framing step, consumed by the document builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingResult {
    /// Horizontal camera position after framing, in world units
    pub camera_center: Vec2,
    /// Canvas size after the non-dominant axis was recomputed
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Reference point relative to the box minimum, floored to pixels
    pub origin_offset: (i32, i32),
}

/// Frame the object and reference point, mutating the camera and canvas
///
/// Always succeeds: degenerate zero-size boxes fall back to a square canvas
/// and the `MIN_ORTHO_SCALE` floor. The dominant resolution axis is taken
/// from `render.fixed_axis` and never recomputed; only the other axis is
/// adjusted to preserve the box's aspect ratio.
pub fn frame(
    object: &ObjectTransform,
    reference_point: Vec2,
    camera: &mut Camera,
    render: &mut RenderSettings,
) -> FramingResult {
    let bounds = BoundingBox2D::of_object_and_point(object, reference_point);
    let center = bounds.center();
    let w = bounds.width();
    let h = bounds.height();

    let width_dominant = match render.fixed_axis {
        FixedAxis::Auto => w >= h,
        FixedAxis::Width => true,
        FixedAxis::Height => false,
    };

    if width_dominant {
        camera.ortho_scale = w.max(MIN_ORTHO_SCALE);
        render.resolution_y = scaled_axis(render.resolution_x, h, w);
    } else {
        camera.ortho_scale = h.max(MIN_ORTHO_SCALE);
        render.resolution_x = scaled_axis(render.resolution_y, w, h);
    }

    // Looking straight down from the top of the object's bounds
    camera.location = Vec3::new(center.x, center.y, object.location.z + object.dimensions.z);

    let origin_offset = (
        (reference_point.x - bounds.min.x).floor() as i32,
        (reference_point.y - bounds.min.y).floor() as i32,
    );

    FramingResult {
        camera_center: center,
        canvas_width: render.resolution_x,
        canvas_height: render.resolution_y,
        origin_offset,
    }
}

/// Recompute the non-dominant resolution axis from the box aspect ratio
fn scaled_axis(fixed_resolution: u32, numerator: f32, denominator: f32) -> u32 {
    if denominator <= 0.0 || numerator <= 0.0 {
        // Degenerate box: keep the canvas square
        return fixed_resolution.max(1);
    }
    let scaled = (numerator / denominator * fixed_resolution as f32).round() as u32;
    scaled.max(1)
}
