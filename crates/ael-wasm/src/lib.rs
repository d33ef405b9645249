//! WASM bindings for the AEL front end.
//!
//! Exposes `parse()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ tree, debug }` or throws on error.

use wasm_bindgen::prelude::*;

/// Parse AEL source into an expression tree.
///
/// Returns a JS object with `{ tree: string, debug: string }` — the
/// parenthesized tree form and the full structural dump.
/// Throws a JS error carrying the caret-annotated report if the input is
/// malformed.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let expr = ael_parser::Parser::parse(source)
        .map_err(|e| JsError::new(&e.report("<input>", source)))?;

    // Serialize to a plain JS object { tree, debug }
    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"tree".into(), &expr.to_string().into())
        .map_err(|_| JsError::new("Failed to set tree property"))?;
    js_sys::Reflect::set(&js_obj, &"debug".into(), &format!("{expr:#?}").into())
        .map_err(|_| JsError::new("Failed to set debug property"))?;

    Ok(js_obj.into())
}

/// Get the front-end version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
