//! End-to-end test of the framing + export pipeline

use crate::export::{ExportOptions, Exporter};
use crate::id::SequenceIdGenerator;
use crate::render::{RenderError, RenderedImage, Renderer};
use crate::scene::{Camera, ObjectTransform, RenderSettings, SceneContext, Vec2, Vec3};
use tempfile::TempDir;

/// Renders the framed canvas filled with an opaque color
struct SolidRenderer;

impl Renderer for SolidRenderer {
    fn render(&mut self, scene: &SceneContext) -> Result<RenderedImage, RenderError> {
        let mut image = RenderedImage::new(scene.render.resolution_x, scene.render.resolution_y);
        for y in 0..image.height {
            for x in 0..image.width {
                image.put_pixel(x, y, [200, 180, 40, 255]);
            }
        }
        Ok(image)
    }
}

fn crate_scene() -> SceneContext {
    SceneContext {
        object: ObjectTransform {
            location: Vec3::new(0.0, 0.0, 0.5),
            dimensions: Vec3::new(10.0, 20.0, 1.0),
        },
        reference_point: Vec2::new(0.0, 0.0),
        camera: Some(Camera::default()),
        render: RenderSettings::default(),
    }
}

#[test]
fn full_export_produces_consistent_tree_and_document() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("barrel.png");
    let mut scene = crate_scene();

    let mut exporter = Exporter::with_id_generator(
        ExportOptions {
            tile_horizontally: true,
            ..ExportOptions::default()
        },
        Box::new(SequenceIdGenerator::new("e2e")),
    );
    let report = exporter
        .export(&mut scene, &mut SolidRenderer, &destination)
        .unwrap();

    // 10x20 box with resolution_y fixed at 64: 32x64 canvas
    assert_eq!(report.framing.canvas_width, 32);
    assert_eq!(report.framing.canvas_height, 64);
    assert_eq!(scene.render.resolution_x, 32);
    let camera = scene.camera.unwrap();
    assert_eq!(camera.ortho_scale, 20.0);
    assert_eq!(camera.location.x, 0.0);
    assert_eq!(camera.location.y, 0.0);

    let json = std::fs::read_to_string(&report.document_path).unwrap();
    let document: crate::document::SpriteDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.name, "barrel");
    assert_eq!(document.width, 32);
    assert_eq!(document.height, 64);
    assert!(document.h_tile);
    assert!(!document.v_tile);
    // Reference point sits at the box minimum corner plus (5, 10)
    assert_eq!(document.xorig, 5);
    assert_eq!(document.yorig, 10);

    // The rendered PNGs decode back at the framed canvas size
    let frame_png = temp_dir
        .path()
        .join("barrel")
        .join(format!("{}.png", document.frames[0].id));
    let loaded = image::open(&frame_png).unwrap().to_rgba8();
    assert_eq!(loaded.dimensions(), (32, 64));
    assert_eq!(loaded.get_pixel(0, 0).0, [200, 180, 40, 255]);
}

#[test]
fn rerunning_export_regenerates_every_identifier() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = Exporter::new();

    let mut first_scene = crate_scene();
    let first = exporter
        .export(
            &mut first_scene,
            &mut SolidRenderer,
            &temp_dir.path().join("first.png"),
        )
        .unwrap();

    let mut second_scene = crate_scene();
    let second = exporter
        .export(
            &mut second_scene,
            &mut SolidRenderer,
            &temp_dir.path().join("second.png"),
        )
        .unwrap();

    let collect_ids = |path: &std::path::Path| -> Vec<String> {
        let json = std::fs::read_to_string(path).unwrap();
        let doc: crate::document::SpriteDocument = serde_json::from_str(&json).unwrap();
        let frame = &doc.frames[0];
        vec![
            doc.id.clone(),
            frame.id.clone(),
            frame.composite_image.id.clone(),
            frame.images[0].id.clone(),
            doc.layers[0].id.clone(),
        ]
    };

    let first_ids = collect_ids(&first.document_path);
    let second_ids = collect_ids(&second.document_path);
    for id in &first_ids {
        assert!(!second_ids.contains(id), "identifier {id} reused across exports");
    }
}
