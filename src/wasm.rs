use wasm_bindgen::prelude::*;

use crate::color::ColorRgba;
use crate::math;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Packs float channels into `0xAARRGGBB`
#[wasm_bindgen(js_name = packColor)]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    ColorRgba::new(r, g, b, a).to_packed()
}

/// Blends two packed colors, the result is always opaque
#[wasm_bindgen(js_name = lerpPacked)]
pub fn lerp_packed(start: u32, end: u32, ratio: f32) -> u32 {
    let start = ColorRgba::from_packed(start);
    let end = ColorRgba::from_packed(end);
    ColorRgba::lerp(&start, &end, ratio).to_packed()
}

#[wasm_bindgen(js_name = interpolateFloat)]
pub fn interpolate_float(v1: f32, v2: f32, t: f32, linear: bool) -> Result<f32, JsError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(JsError::new(&format!(
            "interpolation parameter must be within [0, 1], got {t}"
        )));
    }
    Ok(math::interpolate(v1, v2, t, linear))
}

#[wasm_bindgen(js_name = floatToByte)]
pub fn float_to_byte_js(value: f32) -> u8 {
    math::float_to_byte(value)
}

/// Parses `#AARRGGBB`
#[wasm_bindgen(js_name = parsePackedColor)]
pub fn parse_packed_color(s: &str) -> Result<u32, JsError> {
    s.parse::<crate::color::PackedColor>()
        .map(|packed| packed.0)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Packs a flat `[r, g, b, a, r, g, b, a, ...]` array, one `u32` per color
#[wasm_bindgen(js_name = packColors)]
pub fn pack_colors(channels: &js_sys::Float32Array) -> Result<js_sys::Uint32Array, JsError> {
    let channels = channels.to_vec();
    if channels.len() % 4 != 0 {
        return Err(JsError::new(&format!(
            "expected a multiple of 4 channels, got {}",
            channels.len()
        )));
    }
    let packed: Vec<u32> = channels
        .chunks_exact(4)
        .map(|c| ColorRgba::new(c[0], c[1], c[2], c[3]).to_packed())
        .collect();
    Ok(js_sys::Uint32Array::from(packed.as_slice()))
}
