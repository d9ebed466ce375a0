//! The RotateView widget.
//!
//! [`RotateView`] ties the pieces together. The host feeds it three kinds of
//! input and reads back a [`VisualState`]:
//!
//! - container bounds, via [`RotateView::on_bounds_changed`]
//! - pointer samples in wrapper coordinates, via [`RotateView::on_pointer`]
//! - programmatic calls (`set_angle`, `set_image`, `set_listener`)
//!
//! Every time an angle is applied (relayout, programmatic set, or touch) the
//! image rotation is updated to the angle truncated to whole degrees and the
//! listener, if any, receives the full-precision angle.

mod attributes;
mod event;
mod visual;

pub use attributes::RotateViewAttributes;
pub use event::{PointerAction, PointerEvent};
pub use visual::VisualState;

use crate::geometry::{angle_for_touch, Point, Size};
use crate::layout::{Bounds, ImageLayout, LayoutAdapter, LayoutError};
use crate::resource::{
    DecodedImage, FilterType, ResourceError, ResourceId, ResourceRegistry, PLACEHOLDER_IMAGE,
};

/// Callback receiving the angle, in degrees, every time it is applied.
pub type RotationListener = Box<dyn FnMut(f64)>;

/// Drag-to-rotate image widget.
pub struct RotateView {
    angle: f64,
    resources: ResourceRegistry,
    adapter: LayoutAdapter,
    visual: VisualState,
    listener: Option<RotationListener>,
}

impl Default for RotateView {
    fn default() -> Self {
        Self::new(RotateViewAttributes::default(), ResourceRegistry::new())
    }
}

impl RotateView {
    /// Create a widget from construction attributes.
    ///
    /// An attribute image that is not registered is logged and the
    /// placeholder is shown instead. No listener is registered yet, so the
    /// initial angle is first reported on the first layout.
    pub fn new(attributes: RotateViewAttributes, resources: ResourceRegistry) -> Self {
        let mut view = Self {
            angle: attributes.angle as f64,
            resources,
            adapter: LayoutAdapter::new(),
            visual: VisualState {
                image: PLACEHOLDER_IMAGE,
                layout: None,
                rotation: attributes.angle,
            },
            listener: None,
        };
        view.set_image(attributes.image);
        view
    }

    /// Register the rotation listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Current angle in whole degrees, truncated toward zero.
    pub fn angle(&self) -> i32 {
        self.angle as i32
    }

    /// Current angle at full precision.
    pub fn angle_degrees(&self) -> f64 {
        self.angle
    }

    /// Rotate to `degrees` immediately. No layout pass is needed.
    pub fn set_angle(&mut self, degrees: i32) {
        self.apply_angle(degrees as f64);
    }

    /// Handle of the displayed image.
    pub fn image(&self) -> ResourceId {
        self.visual.image
    }

    /// Display another registered image.
    ///
    /// Unknown handles are logged and ignored; the previous image stays. If
    /// the new image has a different intrinsic size, it is laid out against
    /// the last known container size first, and an image that cannot be laid
    /// out there is logged and ignored the same way.
    pub fn set_image(&mut self, id: ResourceId) {
        let intrinsic = match self.resources.intrinsic_size(id) {
            Ok(size) => size,
            Err(err) => {
                log::warn!("Keeping image {}: {}", self.visual.image, err);
                return;
            }
        };

        let previous = self.resources.intrinsic_size(self.visual.image).ok();
        if previous == Some(intrinsic) {
            self.visual.image = id;
            return;
        }

        match self.layout_for(intrinsic) {
            Ok(layout) => {
                self.visual.image = id;
                if let Some(layout) = layout {
                    self.commit_layout(layout);
                }
            }
            Err(err) => log::warn!("Keeping image {}: {}", self.visual.image, err),
        }
    }

    /// Decode and register an image. Re-registering the displayed image
    /// refreshes the layout; if the new pixels cannot be laid out the layout
    /// is dropped until the next container change.
    pub fn register_image(&mut self, id: ResourceId, bytes: &[u8]) -> Result<Size, ResourceError> {
        let size = self.resources.register_bytes(id, bytes)?;
        if id == self.visual.image {
            self.refresh_layout();
        }
        Ok(size)
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Draw state after the last event.
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn layout(&self) -> Option<&ImageLayout> {
        self.visual.layout.as_ref()
    }

    /// Pixels of the displayed image at its laid-out size, or at its
    /// intrinsic size before the first layout.
    pub fn render_image(&self, filter: FilterType) -> Result<DecodedImage, ResourceError> {
        let size = match self.visual.layout {
            Some(layout) => layout.image,
            None => self.resources.intrinsic_size(self.visual.image)?,
        };
        self.resources.render(self.visual.image, size, filter)
    }

    /// Container bounds became known or changed.
    pub fn on_bounds_changed(&mut self, bounds: Bounds) {
        if let Some(size) = self.adapter.on_bounds_changed(bounds) {
            self.relayout(size);
        }
    }

    /// Handle a pointer sample. Returns true if the event was consumed.
    ///
    /// Down starts a drag and rotates toward the sample, Move continues it,
    /// Up and Cancel end it. Layout notifications are held back while the
    /// drag is active.
    pub fn on_pointer(&mut self, event: PointerEvent) -> bool {
        match event.action {
            PointerAction::Down => {
                self.adapter.begin_drag();
                self.rotate_toward(event.position());
            }
            PointerAction::Move => {
                if !self.adapter.is_suspended() {
                    return false;
                }
                self.rotate_toward(event.position());
            }
            PointerAction::Up | PointerAction::Cancel => {
                if let Some(size) = self.adapter.end_drag() {
                    self.relayout(size);
                }
            }
        }
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.adapter.is_suspended()
    }

    fn rotate_toward(&mut self, position: Point) {
        let Some(layout) = self.visual.layout else {
            log::debug!("Ignoring pointer sample before first layout");
            return;
        };
        let angle = angle_for_touch(position, layout.center, layout.orientation);
        self.apply_angle(angle);
    }

    fn refresh_layout(&mut self) {
        if let Some(size) = self.adapter.last_size() {
            self.relayout(size);
        }
    }

    /// Layout of an image of `intrinsic` size in the last known container,
    /// or `None` before the first layout.
    fn layout_for(&self, intrinsic: Size) -> Result<Option<ImageLayout>, LayoutError> {
        self.adapter
            .last_size()
            .map(|size| ImageLayout::compute(size, intrinsic))
            .transpose()
    }

    fn relayout(&mut self, size: Size) {
        let intrinsic = match self.resources.intrinsic_size(self.visual.image) {
            Ok(intrinsic) => intrinsic,
            Err(err) => {
                log::warn!("Cannot lay out image {}: {}", self.visual.image, err);
                self.visual.layout = None;
                return;
            }
        };

        match ImageLayout::compute(size, intrinsic) {
            Ok(layout) => self.commit_layout(layout),
            Err(err) => {
                log::debug!("Dropping layout: {}", err);
                self.visual.layout = None;
            }
        }
    }

    fn commit_layout(&mut self, layout: ImageLayout) {
        log::debug!(
            "Laid out {}x{} image in {}x{} wrapper",
            layout.image.width,
            layout.image.height,
            layout.wrapper.width,
            layout.wrapper.height
        );
        self.visual.layout = Some(layout);
        self.apply_angle(self.angle);
    }

    fn apply_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.visual.rotation = angle as i32;
        if let Some(listener) = self.listener.as_mut() {
            listener(angle);
        }
    }
}
