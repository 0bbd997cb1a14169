// SPDX-License-Identifier: MPL-2.0
//! Queued, animated toast presentation.
//!
//! A toast is a small, transient message card overlaid on the UI. This
//! module holds the whole presentation pipeline:
//!
//! - [`request`] - the immutable [`Toast`] request and its [`Style`]
//! - [`view`] - the sized, renderable [`ToastView`]
//! - [`measure`] - text wrapping and height estimation
//! - [`animation`] - the damped-spring [`Transition`]
//! - [`overlay`] - the [`OverlaySurface`] contract and window surface
//! - [`coordinator`] - the FIFO queue and animation state machine
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{Coordinator, Toast, WindowSurface};
//! use std::time::Instant;
//!
//! let mut coordinator = Coordinator::new();
//! let mut surface = WindowSurface::new(window_size);
//!
//! // Fire-and-forget; overlapping requests queue up FIFO.
//! coordinator.show(Toast::success("Saved"), &mut surface, Instant::now());
//!
//! // Drive animations from the host frame clock while busy.
//! coordinator.tick(Instant::now(), &mut surface);
//! ```
//!
//! At most one toast is visible at a time; later requests wait their
//! turn. A visible toast leaves after its display duration, or earlier
//! when tapped (route presses through [`Coordinator::hit_test`] and
//! [`Coordinator::request_dismiss`]).

pub mod animation;
pub mod coordinator;
pub mod measure;
pub mod overlay;
pub mod request;
pub mod view;

pub use animation::{Transition, TRANSITION_DURATION};
pub use coordinator::{AnimationPhase, Coordinator, Insets};
pub use overlay::{OverlaySurface, WindowSurface};
pub use request::{
    Direction, DismissCallback, Icon, IconAlignment, Location, State, Style, TextAlignment, Toast,
    DEFAULT_DURATION,
};
pub use view::{IconSide, ToastId, ToastView};
