//! Flat preview renderer
//!
//! Stand-in for a host application's render pipeline: rasterizes the object's
//! footprint as a flat-colored rectangle on a transparent canvas, using the
//! framed camera and canvas from the scene. Good enough to eyeball pivot and
//! framing in the produced sprite; not a renderer in any other sense.

use topshot_core::{RenderError, RenderedImage, Renderer, SceneContext};

const FOOTPRINT_COLOR: [u8; 4] = [160, 160, 168, 255];

pub struct PreviewRenderer;

impl Renderer for PreviewRenderer {
    fn render(&mut self, scene: &SceneContext) -> Result<RenderedImage, RenderError> {
        let camera = scene.camera.as_ref().ok_or(RenderError::NoScene)?;
        let width = scene.render.resolution_x;
        let height = scene.render.resolution_y;
        let mut image = RenderedImage::new(width, height);

        // World-space window the orthographic camera sees; the scale applies
        // to the dominant axis, the other follows the canvas aspect
        let (view_width, view_height) = if width >= height {
            (
                camera.ortho_scale,
                camera.ortho_scale * height as f32 / width as f32,
            )
        } else {
            (
                camera.ortho_scale * width as f32 / height as f32,
                camera.ortho_scale,
            )
        };
        let view_min_x = camera.location.x - view_width / 2.0;
        let view_min_y = camera.location.y - view_height / 2.0;

        let half_x = scene.object.dimensions.x / 2.0;
        let half_y = scene.object.dimensions.y / 2.0;
        let obj_min_x = scene.object.location.x - half_x;
        let obj_max_x = scene.object.location.x + half_x;
        let obj_min_y = scene.object.location.y - half_y;
        let obj_max_y = scene.object.location.y + half_y;

        let px_per_unit_x = width as f32 / view_width;
        let px_per_unit_y = height as f32 / view_height;

        let x0 = ((obj_min_x - view_min_x) * px_per_unit_x).floor().max(0.0) as u32;
        let x1 = ((obj_max_x - view_min_x) * px_per_unit_x).ceil().min(width as f32) as u32;
        // Canvas rows run top-down while world y runs up
        let y0 = ((view_min_y + view_height - obj_max_y) * px_per_unit_y)
            .floor()
            .max(0.0) as u32;
        let y1 = ((view_min_y + view_height - obj_min_y) * px_per_unit_y)
            .ceil()
            .min(height as f32) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                image.put_pixel(x, y, FOOTPRINT_COLOR);
            }
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topshot_core::{
        frame, Camera, ObjectTransform, RenderSettings, SceneContext, Vec2, Vec3,
    };

    #[test]
    fn framed_object_fills_the_canvas() {
        let mut scene = SceneContext {
            object: ObjectTransform {
                location: Vec3::new(3.0, -1.0, 0.0),
                dimensions: Vec3::new(8.0, 8.0, 2.0),
            },
            reference_point: Vec2::new(3.0, -1.0),
            camera: Some(Camera::default()),
            render: RenderSettings::default(),
        };
        let object = scene.object;
        let mut camera = scene.camera.take().unwrap();
        let mut render = scene.render;
        frame(&object, scene.reference_point, &mut camera, &mut render);
        scene.camera = Some(camera);
        scene.render = render;

        let image = PreviewRenderer.render(&scene).unwrap();

        // Object and reference coincide, so the footprint covers the view
        assert_eq!(image.pixels[3], 255);
        let last = image.pixels.len() - 1;
        assert_eq!(image.pixels[last], 255);
    }

    #[test]
    fn tall_object_footprint_fills_canvas() {
        // Height-dominant scene: ortho scale is the box's longer side, so it
        // applies to the vertical view axis, not the horizontal one.
        let mut scene = SceneContext {
            object: ObjectTransform {
                location: Vec3::new(0.0, 0.0, 0.0),
                dimensions: Vec3::new(10.0, 20.0, 2.0),
            },
            reference_point: Vec2::new(0.0, 0.0),
            camera: Some(Camera::default()),
            render: RenderSettings::default(),
        };
        let object = scene.object;
        let mut camera = scene.camera.take().unwrap();
        let mut render = scene.render;
        frame(&object, scene.reference_point, &mut camera, &mut render);
        scene.camera = Some(camera);
        scene.render = render;
        assert_eq!((render.resolution_x, render.resolution_y), (32, 64));

        let image = PreviewRenderer.render(&scene).unwrap();

        // Box and object extent coincide, so every corner pixel is opaque
        assert_eq!(image.pixels[3], 255);
        let last = image.pixels.len() - 1;
        assert_eq!(image.pixels[last], 255);
        let top_right = (image.width as usize - 1) * 4 + 3;
        assert_eq!(image.pixels[top_right], 255);
    }

    #[test]
    fn missing_camera_is_a_render_error() {
        let scene = SceneContext {
            object: ObjectTransform {
                location: Vec3::default(),
                dimensions: Vec3::new(1.0, 1.0, 1.0),
            },
            reference_point: Vec2::default(),
            camera: None,
            render: RenderSettings::default(),
        };

        assert!(PreviewRenderer.render(&scene).is_err());
    }
}
