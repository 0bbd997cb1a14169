// SPDX-License-Identifier: MPL-2.0
//! The renderable unit built from a toast request.
//!
//! A [`ToastView`] owns its request, its resolved style, its wrapped
//! message lines, and its measured size, all fixed at construction. The
//! frame and opacity are the only mutable parts, and the coordinator is
//! their only writer once the view has been enqueued.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use iced_core::{Point, Rectangle, Size};

use super::measure;
use super::request::{DismissCallback, Icon, IconAlignment, Style, Toast};
use crate::ui::design_tokens::sizing;

/// Unique identifier for a toast view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new process-unique id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of the label the icon ends up on after resolving the
/// `Natural` alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSide {
    Left,
    Right,
}

/// A sized, laid-out toast ready for presentation.
pub struct ToastView {
    id: ToastId,
    toast: Toast,
    style: Style,
    lines: Vec<String>,
    size: Size,
    frame: Rectangle,
    opacity: f32,
}

impl ToastView {
    /// Builds a view from a request, measuring the message against the
    /// fixed maximum text width.
    ///
    /// The width is constant; the height is the measured text height plus
    /// padding, but never below the minimum card height.
    #[must_use]
    pub fn new(toast: Toast) -> Self {
        let style = toast.effective_style();
        let lines = measure::wrap_lines(
            toast.message(),
            style.font_size,
            sizing::TOAST_TEXT_WIDTH,
        );
        let text_height = lines.len() as f32 * measure::line_height(style.font_size);
        let height = (text_height + sizing::TOAST_TEXT_PADDING).max(sizing::TOAST_MIN_HEIGHT);
        let size = Size::new(sizing::TOAST_WIDTH, height);

        Self {
            id: ToastId::new(),
            toast,
            style,
            lines,
            size,
            frame: Rectangle::new(Point::ORIGIN, size),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// The style resolved from the request's visual state.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The wrapped message lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The measured size, fixed at construction.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The current (possibly mid-animation) frame.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// The current opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Resolves the icon and the side it sits on, or `None` when the
    /// style hides the icon.
    ///
    /// `Natural` resolves to the leading edge; layout-direction detection
    /// is the host's concern, so leading means left here.
    #[must_use]
    pub fn icon_layout(&self) -> Option<(Icon, IconSide)> {
        let icon = self.style.icon?;
        let side = match self.style.icon_alignment {
            IconAlignment::Natural | IconAlignment::Left => IconSide::Left,
            IconAlignment::Right => IconSide::Right,
        };
        Some((icon, side))
    }

    pub(crate) fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    pub(crate) fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub(crate) fn take_callback(&mut self) -> Option<DismissCallback> {
        self.toast.take_callback()
    }
}

impl fmt::Debug for ToastView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastView")
            .field("id", &self.id)
            .field("toast", &self.toast)
            .field("size", &self.size)
            .field("frame", &self.frame)
            .field("opacity", &self.opacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::request::{State, Style};

    #[test]
    fn ids_are_unique() {
        let a = ToastView::new(Toast::new("a"));
        let b = ToastView::new(Toast::new("a"));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn width_is_fixed() {
        let short = ToastView::new(Toast::new("hi"));
        let long = ToastView::new(Toast::new(&"words ".repeat(30)));
        assert_eq!(short.size().width, sizing::TOAST_WIDTH);
        assert_eq!(long.size().width, sizing::TOAST_WIDTH);
    }

    #[test]
    fn short_message_gets_minimum_height() {
        let view = ToastView::new(Toast::new("ok"));
        assert_eq!(view.size().height, sizing::TOAST_MIN_HEIGHT);
    }

    #[test]
    fn long_message_grows_beyond_minimum_height() {
        let view = ToastView::new(Toast::new(&"words ".repeat(30)));
        assert!(view.size().height > sizing::TOAST_MIN_HEIGHT);
        assert!(view.lines().len() > 1);
    }

    #[test]
    fn natural_icon_alignment_resolves_left() {
        let view = ToastView::new(Toast::success("done"));
        let (icon, side) = view.icon_layout().expect("success style has an icon");
        assert_eq!(icon, Icon::Success);
        assert_eq!(side, IconSide::Left);
    }

    #[test]
    fn right_icon_alignment_is_preserved() {
        let style = Style {
            icon_alignment: crate::toast::request::IconAlignment::Right,
            ..Style::default()
        };
        let view = ToastView::new(Toast::new("styled").state(State::Custom(style)));
        let (_, side) = view.icon_layout().expect("style has an icon");
        assert_eq!(side, IconSide::Right);
    }

    #[test]
    fn hidden_icon_yields_no_layout() {
        let style = Style {
            icon: None,
            ..Style::default()
        };
        let view = ToastView::new(Toast::new("plain").state(State::Custom(style)));
        assert!(view.icon_layout().is_none());
    }
}
