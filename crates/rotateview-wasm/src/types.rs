//! WASM-compatible wrapper types.
//!
//! Converts core types into shapes JavaScript can consume directly: a
//! rendered image frame with RGBA pixels ready for `ImageData`, and a plain
//! snapshot object of the visual state.

use rotateview_core::{DecodedImage, FilterType, VisualState};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A rendered image frame for JavaScript.
///
/// Pixels are RGBA so they can go straight into
/// `new ImageData(new Uint8ClampedArray(frame.pixels()), frame.width)`.
#[wasm_bindgen]
pub struct JsImageFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImageFrame {
    /// Frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsImageFrame {
    /// Build a frame from a core RGB image, adding an opaque alpha channel.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        let pixels = img
            .pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 0xFF])
            .collect();
        Self {
            width: img.width,
            height: img.height,
            pixels,
        }
    }
}

/// Convert a u8 filter value to the core FilterType.
///
/// 0 = Nearest, 1 = Bilinear, 2 = Lanczos3. Any other value is Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Flat snapshot of the visual state, serialized to a plain JS object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VisualSnapshot {
    pub image: i32,
    pub rotation: i32,
    pub laid_out: bool,
    pub image_x: i32,
    pub image_y: i32,
    pub image_width: u32,
    pub image_height: u32,
    pub wrapper_size: u32,
    pub pivot_x: i32,
    pub pivot_y: i32,
    pub transform: String,
    pub transform_origin: String,
}

impl From<&VisualState> for VisualSnapshot {
    fn from(visual: &VisualState) -> Self {
        let layout = visual.layout;
        let pivot = visual.pivot();
        Self {
            image: visual.image,
            rotation: visual.rotation,
            laid_out: layout.is_some(),
            image_x: layout.map_or(0, |l| l.image_offset.x),
            image_y: layout.map_or(0, |l| l.image_offset.y),
            image_width: layout.map_or(0, |l| l.image.width),
            image_height: layout.map_or(0, |l| l.image.height),
            wrapper_size: layout.map_or(0, |l| l.wrapper.width),
            pivot_x: pivot.x,
            pivot_y: pivot.y,
            transform: css_transform(visual),
            transform_origin: css_transform_origin(visual),
        }
    }
}

/// CSS `transform` value for the image element.
pub(crate) fn css_transform(visual: &VisualState) -> String {
    format!("rotate({}deg)", visual.rotation)
}

/// CSS `transform-origin` value placing the origin on the hinge.
pub(crate) fn css_transform_origin(visual: &VisualState) -> String {
    let pivot = visual.pivot();
    format!("{}px {}px", pivot.x, pivot.y)
}
