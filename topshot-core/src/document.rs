//! GameMaker: Studio sprite document (`.yy`) schema
//!
//! Serde models for the sprite asset description consumed by the GameMaker
//! toolchain, with field names matching the on-disk JSON key casing exactly.
//! A document is built fresh per export from a [`FramingResult`] and the
//! export options; nothing here is a reusable mutable template.

use serde::{Deserialize, Serialize};

use crate::export::ExportOptions;
use crate::framing::FramingResult;
use crate::id::IdGenerator;

/// Schema version carried by the top-level sprite record
pub const SPRITE_MVC_VERSION: &str = "1.12";
/// Schema version carried by nested frame/image/layer records
pub const RECORD_MVC_VERSION: &str = "1.0";
/// GameMaker's default texture group
pub const DEFAULT_TEXTURE_GROUP_ID: &str = "1225f6b0-ac20-43bd-a82e-be73fa0b6f4f";
/// Origin mode: custom pixel pivot (xorig/yorig)
const ORIGIN_CUSTOM: u32 = 9;

/// Top-level sprite asset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDocument {
    pub id: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub mvc: String,
    pub name: String,
    #[serde(rename = "For3D")]
    pub for_3d: bool,
    #[serde(rename = "HTile")]
    pub h_tile: bool,
    #[serde(rename = "VTile")]
    pub v_tile: bool,
    pub bbox_bottom: u32,
    pub bbox_left: u32,
    pub bbox_right: u32,
    pub bbox_top: u32,
    pub bboxmode: u32,
    pub colkind: u32,
    pub coltolerance: u32,
    #[serde(rename = "edgeFiltering")]
    pub edge_filtering: bool,
    pub frames: Vec<SpriteFrame>,
    #[serde(rename = "gridX")]
    pub grid_x: u32,
    #[serde(rename = "gridY")]
    pub grid_y: u32,
    pub height: u32,
    pub layers: Vec<ImageLayer>,
    pub origin: u32,
    #[serde(rename = "originLocked")]
    pub origin_locked: bool,
    #[serde(rename = "playbackSpeed")]
    pub playback_speed: f32,
    #[serde(rename = "playbackSpeedType")]
    pub playback_speed_type: u32,
    #[serde(rename = "premultiplyAlpha")]
    pub premultiply_alpha: bool,
    pub sepmasks: bool,
    #[serde(rename = "swatchColours")]
    pub swatch_colours: Option<Vec<u32>>,
    #[serde(rename = "swfPrecision")]
    pub swf_precision: f32,
    #[serde(rename = "textureGroupId")]
    pub texture_group_id: String,
    #[serde(rename = "type")]
    pub sprite_type: u32,
    pub width: u32,
    pub xorig: i32,
    pub yorig: i32,
}

/// One animation frame, referencing its parent sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub id: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub mvc: String,
    #[serde(rename = "SpriteId")]
    pub sprite_id: String,
    #[serde(rename = "compositeImage")]
    pub composite_image: SpriteImage,
    pub images: Vec<SpriteImage>,
}

/// A raster belonging to a frame; the composite carries no layer reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteImage {
    pub id: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub mvc: String,
    #[serde(rename = "FrameId")]
    pub frame_id: String,
    #[serde(rename = "LayerId")]
    pub layer_id: Option<String>,
}

/// One image layer, referencing its parent sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub id: String,
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub mvc: String,
    #[serde(rename = "SpriteId")]
    pub sprite_id: String,
    #[serde(rename = "blendMode")]
    pub blend_mode: u32,
    #[serde(rename = "isLocked")]
    pub is_locked: bool,
    pub name: String,
    pub opacity: f32,
    pub visible: bool,
}

/// The five identifiers generated fresh for every export
///
/// Image filenames and document cross-references both come from this set, so
/// the on-disk tree and the document can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIds {
    pub sprite: String,
    pub frame: String,
    pub composite_image: String,
    pub layer: String,
    pub image: String,
}

impl DocumentIds {
    /// Draw five fresh identifiers from the generator
    pub fn generate(generator: &mut dyn IdGenerator) -> Self {
        Self {
            sprite: generator.next_id(),
            frame: generator.next_id(),
            composite_image: generator.next_id(),
            layer: generator.next_id(),
            image: generator.next_id(),
        }
    }
}

/// Build a complete sprite document for one export
///
/// Pure construction: the result depends only on the arguments. Child records
/// reference their immediate parent's identifier (frame and layer point at
/// the sprite, images point at the frame).
pub fn build_document(
    name: &str,
    framing: &FramingResult,
    options: &ExportOptions,
    ids: &DocumentIds,
) -> SpriteDocument {
    let composite_image = SpriteImage {
        id: ids.composite_image.clone(),
        model_name: "GMSpriteImage".to_string(),
        mvc: RECORD_MVC_VERSION.to_string(),
        frame_id: ids.frame.clone(),
        layer_id: None,
    };

    let layer_image = SpriteImage {
        id: ids.image.clone(),
        model_name: "GMSpriteImage".to_string(),
        mvc: RECORD_MVC_VERSION.to_string(),
        frame_id: ids.frame.clone(),
        layer_id: Some(ids.layer.clone()),
    };

    let frame = SpriteFrame {
        id: ids.frame.clone(),
        model_name: "GMSpriteFrame".to_string(),
        mvc: RECORD_MVC_VERSION.to_string(),
        sprite_id: ids.sprite.clone(),
        composite_image,
        images: vec![layer_image],
    };

    let layer = ImageLayer {
        id: ids.layer.clone(),
        model_name: "GMImageLayer".to_string(),
        mvc: RECORD_MVC_VERSION.to_string(),
        sprite_id: ids.sprite.clone(),
        blend_mode: 0,
        is_locked: false,
        name: "default".to_string(),
        opacity: 100.0,
        visible: true,
    };

    let width = framing.canvas_width;
    let height = framing.canvas_height;

    SpriteDocument {
        id: ids.sprite.clone(),
        model_name: "GMSprite".to_string(),
        mvc: SPRITE_MVC_VERSION.to_string(),
        name: name.to_string(),
        for_3d: false,
        h_tile: options.tile_horizontally,
        v_tile: options.tile_vertically,
        bbox_bottom: height.saturating_sub(1),
        bbox_left: 0,
        bbox_right: width.saturating_sub(1),
        bbox_top: 0,
        bboxmode: 0,
        colkind: 1,
        coltolerance: 0,
        edge_filtering: options.edge_filtering,
        frames: vec![frame],
        grid_x: 0,
        grid_y: 0,
        height,
        layers: vec![layer],
        origin: ORIGIN_CUSTOM,
        origin_locked: false,
        playback_speed: 15.0,
        playback_speed_type: 0,
        premultiply_alpha: options.premultiply_alpha,
        sepmasks: false,
        swatch_colours: None,
        swf_precision: 2.525,
        texture_group_id: DEFAULT_TEXTURE_GROUP_ID.to_string(),
        sprite_type: 0,
        width,
        xorig: framing.origin_offset.0,
        yorig: framing.origin_offset.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::FramingResult;
    use crate::id::SequenceIdGenerator;
    use crate::scene::Vec2;
    use std::collections::HashSet;

    fn sample_framing() -> FramingResult {
        FramingResult {
            camera_center: Vec2::new(5.0, 5.0),
            canvas_width: 64,
            canvas_height: 128,
            origin_offset: (5, 7),
        }
    }

    fn sample_document() -> SpriteDocument {
        let mut generator = SequenceIdGenerator::new("doc");
        let ids = DocumentIds::generate(&mut generator);
        build_document(
            "crate_top",
            &sample_framing(),
            &ExportOptions::default(),
            &ids,
        )
    }

    #[test]
    fn ids_within_one_document_are_distinct() {
        let doc = sample_document();
        let frame = &doc.frames[0];
        let ids: HashSet<&str> = [
            doc.id.as_str(),
            frame.id.as_str(),
            frame.composite_image.id.as_str(),
            frame.images[0].id.as_str(),
            doc.layers[0].id.as_str(),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn children_reference_their_immediate_parent() {
        let doc = sample_document();
        let frame = &doc.frames[0];

        assert_eq!(frame.sprite_id, doc.id);
        assert_eq!(doc.layers[0].sprite_id, doc.id);
        assert_eq!(frame.composite_image.frame_id, frame.id);
        assert_eq!(frame.images[0].frame_id, frame.id);
        assert_eq!(frame.images[0].layer_id.as_deref(), Some(doc.layers[0].id.as_str()));
        assert_eq!(frame.composite_image.layer_id, None);
    }

    #[test]
    fn dimensions_and_pivot_come_from_framing() {
        let doc = sample_document();
        assert_eq!(doc.width, 64);
        assert_eq!(doc.height, 128);
        assert_eq!(doc.xorig, 5);
        assert_eq!(doc.yorig, 7);
        assert_eq!(doc.origin, 9);
        assert_eq!(doc.bbox_right, 63);
        assert_eq!(doc.bbox_bottom, 127);
    }

    #[test]
    fn options_map_onto_document_flags() {
        let mut generator = SequenceIdGenerator::new("doc");
        let ids = DocumentIds::generate(&mut generator);
        let options = ExportOptions {
            tile_horizontally: true,
            tile_vertically: false,
            premultiply_alpha: true,
            edge_filtering: true,
        };
        let doc = build_document("tiles", &sample_framing(), &options, &ids);

        assert!(doc.h_tile);
        assert!(!doc.v_tile);
        assert!(doc.premultiply_alpha);
        assert!(doc.edge_filtering);
    }

    #[test]
    fn serialized_document_keeps_toolchain_key_casing() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in [
            "id",
            "name",
            "width",
            "height",
            "frames",
            "layers",
            "HTile",
            "VTile",
            "premultiplyAlpha",
            "edgeFiltering",
            "xorig",
            "yorig",
            "origin",
            "playbackSpeed",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["modelName"], "GMSprite");
        assert_eq!(value["frames"][0]["modelName"], "GMSpriteFrame");
        assert_eq!(value["frames"][0]["compositeImage"]["LayerId"], serde_json::Value::Null);

        let parsed: SpriteDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
