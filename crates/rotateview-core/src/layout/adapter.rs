//! Filtering of container bound notifications.
//!
//! Hosts report bounds far more often than they change: before the first
//! measure pass (all zeros), on every pixel-level relayout, and in response
//! to the widget's own rotation updates while a finger is down. The adapter
//! lets through exactly one relayout per genuine size change.

use super::Bounds;
use crate::geometry::Size;

/// Decides when a bounds notification should trigger a relayout.
#[derive(Debug, Clone, Default)]
pub struct LayoutAdapter {
    /// Size of the last relayout that was let through.
    applied: Option<Size>,
    /// True while a drag is in progress.
    suspended: bool,
    /// Latest genuine size seen while suspended.
    pending: Option<Size>,
}

impl LayoutAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the container has been measured at least once.
    pub fn is_primed(&self) -> bool {
        self.applied.is_some()
    }

    /// True while layout notifications are held back by an active drag.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Size of the last relayout, if any.
    pub fn last_size(&self) -> Option<Size> {
        self.applied
    }

    /// Handle a bounds notification.
    ///
    /// Returns the size to lay out for, or `None` when the notification is
    /// spurious (all-zero bounds), repeats the current size, or arrives
    /// during a drag. A size change during a drag is kept and handed back by
    /// [`end_drag`](Self::end_drag).
    pub fn on_bounds_changed(&mut self, bounds: Bounds) -> Option<Size> {
        if bounds.is_unmeasured() {
            log::debug!("Ignoring unmeasured container bounds");
            return None;
        }

        let size = bounds.size();
        if self.suspended {
            self.pending = (self.applied != Some(size)).then_some(size);
            return None;
        }
        if self.applied == Some(size) {
            return None;
        }

        self.applied = Some(size);
        Some(size)
    }

    /// Stop letting relayouts through until [`end_drag`](Self::end_drag).
    pub fn begin_drag(&mut self) {
        self.suspended = true;
    }

    /// Resume relayouts. Returns a size change that was held back, if any.
    pub fn end_drag(&mut self) -> Option<Size> {
        self.suspended = false;
        let size = self.pending.take()?;
        self.applied = Some(size);
        Some(size)
    }
}
