// SPDX-License-Identifier: MPL-2.0
//! Messages and boot flags for the playground application.

use std::time::Instant;

use iced_core::Size;

use crate::toast::ToastId;

/// Options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured default display duration, in seconds.
    pub duration_secs: Option<f32>,
    /// A toast to show immediately on startup.
    pub initial_message: Option<String>,
}

/// One of the preset demo requests behind the playground buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoToast {
    /// Success state, bottom location, vertical slide.
    Success,
    /// Error state, top location, vertical slide.
    Error,
    /// Warning state at a caller-supplied vertical offset.
    Warning,
    /// Info state sliding in from the left and out to the right.
    Crossing,
    /// Custom style: no icon, centered text, custom background.
    Styled,
    /// Three queued requests fired at once.
    Burst,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A playground button was pressed.
    Demo(DemoToast),
    /// The visible toast was tapped.
    ToastTapped(ToastId),
    /// Frame clock tick while the coordinator is busy.
    Tick(Instant),
    /// The window was resized; the overlay surface follows it.
    WindowResized(Size),
}
