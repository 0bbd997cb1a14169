// SPDX-License-Identifier: MPL-2.0
//! Core toast request types.
//!
//! A [`Toast`] is the immutable description of one presentation request:
//! what to say, how long to stay, how to look, where to rest, and which
//! way to slide in and out. The built-in states map to fixed styles; the
//! custom state carries its own [`Style`].

use crate::ui::design_tokens::{palette, typography};
use iced_core::Color;
use std::fmt;
use std::time::Duration;

/// Auto-dismiss delay used when the caller does not specify one.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Completion callback, invoked exactly once after the toast has fully
/// left the screen. The flag is `true` on all normal paths; it exists so
/// future interruption paths can report early termination.
pub type DismissCallback = Box<dyn FnOnce(bool)>;

/// Glyph identity for the icon rendered next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
}

/// Horizontal placement of the icon relative to the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconAlignment {
    /// Follow the layout direction of the locale (leading edge).
    #[default]
    Natural,
    Left,
    Right,
}

/// Horizontal alignment of the message text inside the label area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Follow the layout direction of the locale (leading edge).
    #[default]
    Natural,
    Left,
    Center,
    Right,
}

/// Custom appearance for [`State::Custom`] toasts.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// The background color of the toast card.
    pub background: Color,
    /// The color of the message text.
    pub text_color: Color,
    /// The color of the icon glyph.
    pub tint_color: Color,
    /// The font size of the message text.
    pub font_size: f32,
    /// The icon on the toast; `None` hides the icon entirely.
    pub icon: Option<Icon>,
    pub text_alignment: TextAlignment,
    /// The position of the icon.
    pub icon_alignment: IconAlignment,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: palette::INFO_500,
            text_color: palette::WHITE,
            tint_color: palette::WHITE,
            font_size: typography::BODY,
            icon: Some(Icon::Info),
            text_alignment: TextAlignment::Natural,
            icon_alignment: IconAlignment::Natural,
        }
    }
}

impl Style {
    /// Creates a style with the given background and default values for
    /// everything else.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }
}

/// The toast's visual state. (Default is `Info`.)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    /// Represents a success message.
    Success,
    /// Represents an error message.
    Error,
    /// Represents a warning message.
    Warning,
    /// Represents an info message.
    #[default]
    Info,
    /// A custom toast with the specified style.
    Custom(Style),
}

impl State {
    /// Resolves the effective style: a fixed preset for the built-in
    /// states, the carried style for `Custom`.
    #[must_use]
    pub fn style(&self) -> Style {
        match self {
            State::Success => Style {
                background: palette::SUCCESS_500,
                icon: Some(Icon::Success),
                ..Style::default()
            },
            State::Error => Style {
                background: palette::ERROR_500,
                icon: Some(Icon::Error),
                ..Style::default()
            },
            State::Warning => Style {
                background: palette::WARNING_500,
                icon: Some(Icon::Warning),
                ..Style::default()
            },
            State::Info => Style::default(),
            State::Custom(style) => style.clone(),
        }
    }
}

/// Where the toast rests on screen. (Default is `Bottom`.)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Location {
    /// Near the top of the screen.
    Top,
    /// Near the bottom of the screen.
    #[default]
    Bottom,
    /// At an exact vertical coordinate supplied by the caller.
    Custom(f32),
}

/// Either the presenting or dismissing direction. (Default is `Vertical`.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// To / from the left screen edge.
    Left,
    /// To / from the right screen edge.
    Right,
    /// To / from the top or bottom edge, depending on the location.
    #[default]
    Vertical,
    /// No movement; the toast fades in place.
    Static,
}

/// An immutable presentation request.
///
/// Build one with [`Toast::new`] (or a state shorthand) and the builder
/// methods, then hand it to the coordinator:
///
/// ```ignore
/// coordinator.show(
///     Toast::success("Saved").duration(Duration::from_secs(1)),
///     &mut surface,
///     Instant::now(),
/// );
/// ```
pub struct Toast {
    message: String,
    duration: Duration,
    state: State,
    location: Location,
    presenting_direction: Direction,
    dismissing_direction: Direction,
    on_dismiss: Option<DismissCallback>,
}

impl Toast {
    /// Creates an info toast with default duration, location, and
    /// directions.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_DURATION,
            state: State::default(),
            location: Location::default(),
            presenting_direction: Direction::default(),
            dismissing_direction: Direction::default(),
            on_dismiss: None,
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).state(State::Success)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).state(State::Error)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).state(State::Warning)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).state(State::Info)
    }

    /// Sets the auto-dismiss delay.
    ///
    /// Zero is valid: the toast still animates in fully and begins its
    /// exit at the first tick after the enter animation completes.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the visual state.
    #[must_use]
    pub fn state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Sets the resting location.
    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Sets the direction the toast enters from.
    #[must_use]
    pub fn presenting(mut self, direction: Direction) -> Self {
        self.presenting_direction = direction;
        self
    }

    /// Sets the direction the toast leaves toward.
    #[must_use]
    pub fn dismissing(mut self, direction: Direction) -> Self {
        self.dismissing_direction = direction;
        self
    }

    /// Sets the completion callback.
    ///
    /// Invoked exactly once, after the exit animation completes and the
    /// view is detached.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce(bool) + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn visual_state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn resting_location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn presenting_direction(&self) -> Direction {
        self.presenting_direction
    }

    #[must_use]
    pub fn dismissing_direction(&self) -> Direction {
        self.dismissing_direction
    }

    /// Resolves the effective style for rendering and layout.
    #[must_use]
    pub fn effective_style(&self) -> Style {
        self.state.style()
    }

    /// Takes the completion callback, leaving `None` behind.
    pub(crate) fn take_callback(&mut self) -> Option<DismissCallback> {
        self.on_dismiss.take()
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("message", &self.message)
            .field("duration", &self.duration)
            .field("state", &self.state)
            .field("location", &self.location)
            .field("presenting_direction", &self.presenting_direction)
            .field("dismissing_direction", &self.dismissing_direction)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
