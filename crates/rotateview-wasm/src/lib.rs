//! RotateView WASM - WebAssembly bindings for RotateView
//!
//! This crate hosts the rotateview-core widget in the browser. JavaScript
//! owns the DOM; the widget owns the geometry.
//!
//! # Module Structure
//!
//! - `view` - `JsRotateView`, the widget binding
//! - `types` - WASM-compatible wrapper types (image frames, visual snapshot)
//! - `logger` - routes `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRotateView, setLogLevel } from '@rotateview/wasm';
//!
//! await init();
//! setLogLevel('debug');
//!
//! const view = new JsRotateView(0, 0);
//! view.onLayout(0, 0, container.clientWidth, container.clientHeight);
//! image.style.transform = view.cssTransform();
//! image.style.transformOrigin = view.transformOrigin();
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod types;
mod view;

pub use types::JsImageFrame;
pub use view::JsRotateView;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Info);
}

/// Change the console log level: "off", "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(logger::level_from_str(level));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
