//! RotateView WASM bindings.
//!
//! The browser is the host toolkit here: JavaScript forwards the container's
//! `ResizeObserver` bounds and the wrapper's pointer events, then reads the
//! visual state back to position and rotate the image element.
//!
//! # Example
//!
//! ```typescript
//! import { JsRotateView } from '@rotateview/wasm';
//!
//! const view = JsRotateView.fromAttributes({ angle: 60, image: 1 });
//! view.registerImage(1, new Uint8Array(await (await fetch('dial.png')).arrayBuffer()));
//! view.setListener((angle) => console.log(`Angle: ${angle}`));
//!
//! new ResizeObserver(([entry]) => {
//!   const r = entry.contentRect;
//!   view.onLayout(r.left, r.top, r.right, r.bottom);
//!   render();
//! }).observe(container);
//!
//! wrapper.addEventListener('pointerdown', (e) => { view.pointerDown(e.offsetX, e.offsetY); render(); });
//! ```

use js_sys::Function;
use rotateview_core::{
    Bounds, PointerAction, PointerEvent, ResourceRegistry, RotateView, RotateViewAttributes,
};
use wasm_bindgen::prelude::*;

use crate::types::{css_transform, css_transform_origin, filter_from_u8, JsImageFrame, VisualSnapshot};

/// Drag-to-rotate widget for JavaScript.
#[wasm_bindgen]
pub struct JsRotateView {
    inner: RotateView,
}

#[wasm_bindgen]
impl JsRotateView {
    /// Create a widget with an initial angle and image handle.
    #[wasm_bindgen(constructor)]
    pub fn new(angle: i32, image: i32) -> JsRotateView {
        let attributes = RotateViewAttributes::new()
            .with_angle(angle)
            .with_image(image);
        Self {
            inner: RotateView::new(attributes, ResourceRegistry::new()),
        }
    }

    /// Create a widget from a partial attribute object, e.g. `{ angle: 60 }`.
    #[wasm_bindgen(js_name = fromAttributes)]
    pub fn from_attributes(attributes: JsValue) -> Result<JsRotateView, JsValue> {
        let attributes: RotateViewAttributes = if attributes.is_undefined() || attributes.is_null() {
            RotateViewAttributes::default()
        } else {
            serde_wasm_bindgen::from_value(attributes)?
        };
        Ok(Self {
            inner: RotateView::new(attributes, ResourceRegistry::new()),
        })
    }

    /// Decode PNG/JPEG bytes and register them under `id`.
    ///
    /// Returns `[width, height]` of the decoded image.
    #[wasm_bindgen(js_name = registerImage)]
    pub fn register_image(&mut self, id: i32, bytes: &[u8]) -> Result<Vec<u32>, JsValue> {
        self.inner
            .register_image(id, bytes)
            .map(|size| vec![size.width, size.height])
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current angle in whole degrees
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> i32 {
        self.inner.angle()
    }

    /// Rotate immediately to `degrees`
    #[wasm_bindgen(js_name = setAngle)]
    pub fn set_angle(&mut self, degrees: i32) {
        self.inner.set_angle(degrees);
    }

    /// Current angle at full precision
    #[wasm_bindgen(getter, js_name = angleDegrees)]
    pub fn angle_degrees(&self) -> f64 {
        self.inner.angle_degrees()
    }

    /// Handle of the displayed image
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> i32 {
        self.inner.image()
    }

    /// Show another registered image. Unknown handles are logged and ignored.
    #[wasm_bindgen(js_name = setImage)]
    pub fn set_image(&mut self, id: i32) {
        self.inner.set_image(id);
    }

    /// Register `(angle: number) => void`, or clear it with `undefined`.
    ///
    /// An exception thrown by the listener is logged and swallowed.
    ///
    /// The listener runs while the view is still borrowed, so it must not
    /// call back into the view: reading `view.angle` from inside it fails
    /// with wasm-bindgen's "recursive use of an object" error, which lands in
    /// the log as a thrown listener. Use the `angle` argument instead.
    #[wasm_bindgen(js_name = setListener)]
    pub fn set_listener(&mut self, listener: Option<Function>) {
        match listener {
            Some(function) => self.inner.set_listener(move |angle| {
                if let Err(err) = function.call1(&JsValue::NULL, &JsValue::from_f64(angle)) {
                    log::error!("Rotation listener threw: {:?}", err);
                }
            }),
            None => self.inner.clear_listener(),
        }
    }

    /// Container bounds became known or changed.
    #[wasm_bindgen(js_name = onLayout)]
    pub fn on_layout(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.inner
            .on_bounds_changed(Bounds::new(left, top, right, bottom));
    }

    /// Pointer went down at wrapper-local `(x, y)`.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.inner.on_pointer(PointerEvent::down(x, y))
    }

    /// Pointer moved to wrapper-local `(x, y)`.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.on_pointer(PointerEvent::moved(x, y))
    }

    /// Pointer went up at wrapper-local `(x, y)`.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.inner.on_pointer(PointerEvent::up(x, y))
    }

    /// The browser cancelled the pointer.
    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) -> bool {
        self.inner
            .on_pointer(PointerEvent::new(PointerAction::Cancel, 0.0, 0.0))
    }

    /// Rotation in whole degrees applied to the image
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.visual().rotation
    }

    /// True once the container has been measured
    #[wasm_bindgen(getter, js_name = isLaidOut)]
    pub fn is_laid_out(&self) -> bool {
        self.inner.visual().is_laid_out()
    }

    /// Side of the square wrapper, 0 before the first layout
    #[wasm_bindgen(getter, js_name = wrapperSize)]
    pub fn wrapper_size(&self) -> u32 {
        self.inner.layout().map_or(0, |l| l.wrapper.width)
    }

    /// CSS `transform` for the image element, e.g. `rotate(45deg)`
    #[wasm_bindgen(js_name = cssTransform)]
    pub fn css_transform(&self) -> String {
        css_transform(self.inner.visual())
    }

    /// CSS `transform-origin` for the image element, e.g. `50px 200px`
    #[wasm_bindgen(js_name = transformOrigin)]
    pub fn transform_origin(&self) -> String {
        css_transform_origin(self.inner.visual())
    }

    /// The whole visual state as a plain object.
    #[wasm_bindgen(js_name = visualState)]
    pub fn visual_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.snapshot())?)
    }

    /// Pixels of the displayed image at its laid-out size.
    ///
    /// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
    #[wasm_bindgen(js_name = renderImage)]
    pub fn render_image(&self, filter: u8) -> Result<JsImageFrame, JsValue> {
        self.inner
            .render_image(filter_from_u8(filter))
            .map(JsImageFrame::from_decoded)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsRotateView {
    pub(crate) fn snapshot(&self) -> VisualSnapshot {
        VisualSnapshot::from(self.inner.visual())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out_view() -> JsRotateView {
        let mut view = JsRotateView::new(0, 0);
        view.on_layout(0, 0, 400, 400);
        view
    }

    #[test]
    fn test_new_applies_attributes() {
        let view = JsRotateView::new(60, 0);
        assert_eq!(view.angle(), 60);
        assert_eq!(view.rotation(), 60);
        assert_eq!(view.image(), 0);
        assert!(!view.is_laid_out());
    }

    #[test]
    fn test_unknown_image_falls_back() {
        let mut view = JsRotateView::new(0, 77);
        assert_eq!(view.image(), 0);

        view.set_image(78);
        assert_eq!(view.image(), 0);
    }

    #[test]
    fn test_layout() {
        let view = laid_out_view();
        assert!(view.is_laid_out());
        assert_eq!(view.wrapper_size(), 400);
        assert_eq!(view.transform_origin(), "100px 200px");
    }

    #[test]
    fn test_drag() {
        let mut view = laid_out_view();

        assert!(view.pointer_down(300.0, 200.0));
        assert_eq!(view.rotation(), 90);
        assert_eq!(view.css_transform(), "rotate(90deg)");

        assert!(view.pointer_move(200.0, 350.0));
        assert_eq!(view.angle(), 180);

        assert!(view.pointer_up(200.0, 350.0));
        assert!(!view.pointer_move(300.0, 200.0));
        assert_eq!(view.angle(), 180);
    }

    #[test]
    fn test_set_angle() {
        let mut view = JsRotateView::new(0, 0);
        view.set_angle(-45);
        assert_eq!(view.angle(), -45);
        assert_eq!(view.css_transform(), "rotate(-45deg)");
    }

    #[test]
    fn test_cancel_ends_drag() {
        let mut view = laid_out_view();
        view.pointer_down(300.0, 200.0);
        assert!(view.pointer_cancel());
        assert!(!view.pointer_move(200.0, 100.0));
    }

    #[test]
    fn test_render_image() {
        let view = laid_out_view();
        let frame = view.render_image(1).unwrap();
        assert_eq!((frame.width(), frame.height()), (200, 200));
        assert_eq!(frame.byte_length(), 200 * 200 * 4);
    }

    #[test]
    fn test_snapshot() {
        let mut view = laid_out_view();
        view.set_angle(12);
        let snapshot = view.snapshot();
        assert!(snapshot.laid_out);
        assert_eq!(snapshot.rotation, 12);
        assert_eq!(snapshot.wrapper_size, 400);
    }
}
