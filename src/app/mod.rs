// SPDX-License-Identifier: MPL-2.0
//! Playground application demonstrating queued toast presentation.
//!
//! The `App` owns the one coordinator and overlay surface for the whole
//! process and wires them into the Iced update loop: buttons enqueue
//! requests, the frame-clock subscription drives animations, taps on the
//! visible toast dismiss it early, and a status line mirrors the
//! coordinator's phase and queue depth.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{DemoToast, Flags, Message};

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use iced::{window, Task, Theme};
use iced_core::Size;

use crate::config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::toast::{Coordinator, Insets, Toast, WindowSurface};

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

/// Root application state: the coordinator, its surface, and counters
/// surfaced in the status line.
#[derive(Debug)]
pub struct App {
    coordinator: Coordinator,
    surface: WindowSurface,
    diagnostics: DiagnosticsCollector,
    /// Display duration applied to the demo toasts.
    duration: Duration,
    /// How many completion callbacks have fired.
    completed: Rc<Cell<usize>>,
}

/// Durations come from the CLI or the config file; negative values would
/// panic the conversion, so they collapse to zero.
fn clamp_duration_secs(value: f32) -> f32 {
    value.max(0.0)
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let duration_secs = flags
            .duration_secs
            .or(config.default_duration_secs)
            .unwrap_or(config::DEFAULT_DURATION_SECS);
        let insets = Insets {
            top: config.top_inset.unwrap_or(config::DEFAULT_TOP_INSET),
            bottom: config.bottom_inset.unwrap_or(config::DEFAULT_BOTTOM_INSET),
        };

        let (diagnostics, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let mut coordinator = Coordinator::with_insets(insets);
        coordinator.set_diagnostics(handle);

        let mut app = Self {
            coordinator,
            surface: WindowSurface::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
            diagnostics,
            duration: Duration::from_secs_f32(clamp_duration_secs(duration_secs)),
            completed: Rc::new(Cell::new(0)),
        };

        if let Some(message) = flags.initial_message {
            let toast = Toast::new(message)
                .duration(app.duration)
                .on_dismiss(app.completion_counter());
            app.show(toast, Instant::now());
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Toast Playground")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn show(&mut self, toast: Toast, now: Instant) {
        self.coordinator.show(toast, &mut self.surface, now);
    }

    /// A completion callback that bumps the status-line counter.
    fn completion_counter(&self) -> impl FnOnce(bool) + 'static {
        let completed = Rc::clone(&self.completed);
        move |_finished| completed.set(completed.get() + 1)
    }
}
