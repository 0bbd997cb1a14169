// SPDX-License-Identifier: MPL-2.0
//! The overlay surface contract consumed by the coordinator.
//!
//! A surface is a top-level layer that can host at most one toast above
//! ordinary content. The coordinator drives attachment exclusively; the
//! surface only reports its bounds and tracks which view, if any, is
//! currently hosted. Hit-testing belongs to the coordinator (it owns the
//! animated frames): the host routes pointer presses through
//! [`Coordinator::hit_test`](super::Coordinator::hit_test) and must treat
//! everything outside the returned view as pass-through, so content
//! beneath the overlay stays interactive.

use iced_core::Size;

use super::view::ToastId;

/// A top-level layer capable of hosting one toast view.
pub trait OverlaySurface {
    /// Current size of the surface, in the same coordinate space as the
    /// toast frames.
    fn bounds(&self) -> Size;

    /// Makes the view paintable. Called exactly once per presentation,
    /// before the enter animation starts.
    fn attach(&mut self, id: ToastId);

    /// Removes the view. Called exactly once per presentation, after the
    /// exit animation completes.
    fn detach(&mut self, id: ToastId);
}

/// Surface backed by the application window.
///
/// Tracks the window size (updated from resize events by the host) and
/// the attached view id.
#[derive(Debug, Clone)]
pub struct WindowSurface {
    size: Size,
    attached: Option<ToastId>,
}

impl WindowSurface {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            attached: None,
        }
    }

    /// Updates the surface bounds after a window resize.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The currently hosted view, if any.
    #[must_use]
    pub fn attached(&self) -> Option<ToastId> {
        self.attached
    }
}

impl OverlaySurface for WindowSurface {
    fn bounds(&self) -> Size {
        self.size
    }

    fn attach(&mut self, id: ToastId) {
        self.attached = Some(id);
    }

    fn detach(&mut self, id: ToastId) {
        if self.attached == Some(id) {
            self.attached = None;
        }
    }
}
