use wasm_bindgen::prelude::*;

use crate::markup::XmlParser;
use crate::Options;

/// Convert SVG markup, returning `{ svg, pathData, skipped }`.
#[wasm_bindgen(js_name = convertSvg)]
pub fn convert_svg(input: &str) -> Result<JsValue, JsValue> {
    let conversion = crate::convert(input).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&conversion).map_err(JsValue::from)
}

/// Like `convertSvg`, with options given as a JSON string.
#[wasm_bindgen(js_name = convertSvgWithOptions)]
pub fn convert_svg_with_options(input: &str, options_json: &str) -> Result<JsValue, JsValue> {
    let options = Options::from_json(options_json).map_err(to_js_error)?;
    let conversion = crate::convert_with(input, &options, &XmlParser).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&conversion).map_err(JsValue::from)
}

fn to_js_error(e: crate::ConvertError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
