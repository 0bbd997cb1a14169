// SPDX-License-Identifier: MPL-2.0
//! The presentation queue and animation state machine.
//!
//! The [`Coordinator`] accepts presentation requests, keeps them in
//! strict first-in-first-out order, and drives enter and exit animations
//! one toast at a time. At most one view is ever attached to the overlay
//! surface; every externally triggered transition re-checks the phase and
//! attachment before acting, so late timers, double taps, and redundant
//! ticks are absorbed as no-ops.
//!
//! The coordinator is an ordinary value: create one per application and
//! inject it wherever toasts are shown. Time enters exclusively through
//! the `now` arguments, which keeps every transition deterministic under
//! test.

use std::collections::VecDeque;
use std::time::Instant;

use iced_core::{Point, Rectangle, Size};

use super::animation::Transition;
use super::overlay::OverlaySurface;
use super::request::{Direction, Location, Toast};
use super::view::{ToastId, ToastView};
use crate::diagnostics::{DiagnosticsHandle, DismissTrigger, ToastEventKind};
use crate::ui::design_tokens::insets;

/// Where the coordinator currently is in a toast's lifecycle.
///
/// `Idle` holds exactly when no view is attached or mid-transition. After
/// the enter animation completes the phase stays `Presenting` while the
/// auto-dismiss delay runs; the deadline handler moves it through
/// `Presented` on its way into `Dismissing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Presenting,
    Presented,
    Dismissing,
}

/// Resting distances from the screen edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: insets::TOAST_TOP,
            bottom: insets::TOAST_BOTTOM,
        }
    }
}

/// The auto-dismiss deadline, tagged with the generation current at
/// schedule time. A deadline only fires while its generation matches the
/// coordinator's; any dismissal bumps the generation, turning a still
/// pending deadline into a no-op.
#[derive(Debug, Clone, Copy)]
struct DismissDeadline {
    at: Instant,
    generation: u64,
}

#[derive(Debug)]
struct ActiveToast {
    view: ToastView,
    surface_bounds: Size,
    transition: Option<Transition>,
    deadline: Option<DismissDeadline>,
}

/// Serializes toast presentations: FIFO queue plus the four-phase
/// animation state machine.
#[derive(Debug)]
pub struct Coordinator {
    queue: VecDeque<ToastView>,
    phase: AnimationPhase,
    active: Option<ActiveToast>,
    generation: u64,
    insets: Insets,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Creates an idle coordinator with the default edge insets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_insets(Insets::default())
    }

    /// Creates an idle coordinator with custom edge insets.
    #[must_use]
    pub fn with_insets(insets: Insets) -> Self {
        Self {
            queue: VecDeque::new(),
            phase: AnimationPhase::Idle,
            active: None,
            generation: 0,
            insets,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle lifecycle events are recorded to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Number of requests waiting behind the visible toast.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether there is nothing visible, animating, or waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == AnimationPhase::Idle && self.queue.is_empty()
    }

    /// The view currently attached to the surface, if any.
    #[must_use]
    pub fn attached_view(&self) -> Option<&ToastView> {
        self.active.as_ref().map(|active| &active.view)
    }

    /// Builds a view from the request and enqueues it. Fire-and-forget.
    pub fn show(&mut self, toast: Toast, surface: &mut dyn OverlaySurface, now: Instant) {
        self.enqueue(ToastView::new(toast), surface, now);
    }

    /// Inserts a view at the tail of the queue and advances if idle.
    ///
    /// Never interrupts a visible toast; the new request waits its turn.
    /// The queue is unbounded; back-pressure is the caller's concern.
    pub fn enqueue(&mut self, view: ToastView, surface: &mut dyn OverlaySurface, now: Instant) {
        self.record(ToastEventKind::Enqueued { id: view.id() });
        self.queue.push_back(view);
        self.try_advance(surface, now);
    }

    /// Starts the exit animation of the visible toast, regardless of its
    /// remaining auto-dismiss delay. Used for tap-to-dismiss.
    ///
    /// A no-op unless `id` is the attached view and it is not already
    /// leaving: dismissing a queued, detached, or already-dismissing
    /// toast has no effect.
    pub fn request_dismiss(&mut self, id: ToastId, now: Instant) {
        let is_attached = self
            .active
            .as_ref()
            .is_some_and(|active| active.view.id() == id);
        if !is_attached {
            return;
        }
        self.begin_exit(now, DismissTrigger::Tap);
    }

    /// Advances animations and timers to `now`.
    ///
    /// The host calls this from its frame clock whenever the coordinator
    /// is not idle. Redundant calls are harmless.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn OverlaySurface) {
        self.advance_transition(now, surface);
        self.fire_deadline(now);
    }

    /// The attached view's id if `point` lies inside its current animated
    /// frame; `None` means the point passes through to content beneath.
    ///
    /// Queued views are never hit: only the attached view receives touch
    /// routing.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ToastId> {
        let active = self.active.as_ref()?;
        if active.view.frame().contains(point) {
            Some(active.view.id())
        } else {
            None
        }
    }

    /// Pops the oldest queued view and begins its enter animation.
    ///
    /// Only proceeds from `Idle` with a non-empty queue, which makes it
    /// safe to call from every trigger point (new enqueue, end of a
    /// dismissal).
    fn try_advance(&mut self, surface: &mut dyn OverlaySurface, now: Instant) {
        if self.phase != AnimationPhase::Idle {
            return;
        }
        let Some(mut view) = self.queue.pop_front() else {
            return;
        };

        self.phase = AnimationPhase::Presenting;
        let bounds = surface.bounds();
        surface.attach(view.id());
        self.record(ToastEventKind::PresentStarted { id: view.id() });

        let location = view.toast().resting_location();
        let resting = resting_frame(view.size(), bounds, location, self.insets);
        let starting = offset_frame(
            resting,
            bounds,
            view.toast().presenting_direction(),
            location,
        );

        view.set_frame(starting);
        view.set_opacity(0.0);

        self.active = Some(ActiveToast {
            transition: Some(Transition::new(starting, resting, 0.0, 1.0, now)),
            view,
            surface_bounds: bounds,
            deadline: None,
        });
    }

    fn advance_transition(&mut self, now: Instant, surface: &mut dyn OverlaySurface) {
        let finished = match &mut self.active {
            Some(active) => match &active.transition {
                Some(transition) => {
                    let (frame, opacity) = transition.sample(now);
                    active.view.set_frame(frame);
                    active.view.set_opacity(opacity);
                    if transition.is_complete(now) {
                        active.transition = None;
                        true
                    } else {
                        false
                    }
                }
                None => false,
            },
            None => false,
        };
        if !finished {
            return;
        }

        match self.phase {
            AnimationPhase::Presenting => self.schedule_auto_dismiss(now),
            AnimationPhase::Dismissing => self.finish_dismiss(now, surface),
            // A transition only runs while entering or leaving; these
            // arms keep the phase set closed without a wildcard.
            AnimationPhase::Idle | AnimationPhase::Presented => {}
        }
    }

    /// The enter animation just finished: arm the auto-dismiss deadline.
    fn schedule_auto_dismiss(&mut self, now: Instant) {
        self.generation += 1;
        let generation = self.generation;
        if let Some(active) = &mut self.active {
            let id = active.view.id();
            active.deadline = Some(DismissDeadline {
                at: now + active.view.toast().display_duration(),
                generation,
            });
            self.record(ToastEventKind::PresentFinished { id });
        }
    }

    /// Fires the auto-dismiss deadline if it is due and still current.
    fn fire_deadline(&mut self, now: Instant) {
        let due = self.active.as_ref().is_some_and(|active| {
            active
                .deadline
                .is_some_and(|deadline| deadline.generation == self.generation && now >= deadline.at)
        });
        if !due || self.phase != AnimationPhase::Presenting {
            return;
        }

        self.phase = AnimationPhase::Presented;
        self.begin_exit(now, DismissTrigger::Timer);
    }

    /// Starts the exit animation from whatever frame and opacity the view
    /// currently has, supporting interruption of an in-progress entry.
    fn begin_exit(&mut self, now: Instant, trigger: DismissTrigger) {
        if !matches!(
            self.phase,
            AnimationPhase::Presenting | AnimationPhase::Presented
        ) || self.active.is_none()
        {
            return;
        }

        self.phase = AnimationPhase::Dismissing;
        self.generation += 1;

        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.deadline = None;

        // Catch up an interrupted enter animation so the exit begins from
        // the exact current state.
        if let Some(transition) = &active.transition {
            let (frame, opacity) = transition.sample(now);
            active.view.set_frame(frame);
            active.view.set_opacity(opacity);
        }

        let current = active.view.frame();
        let ending = offset_frame(
            current,
            active.surface_bounds,
            active.view.toast().dismissing_direction(),
            active.view.toast().resting_location(),
        );
        active.transition = Some(Transition::new(
            current,
            ending,
            active.view.opacity(),
            0.0,
            now,
        ));

        let id = active.view.id();
        self.record(ToastEventKind::DismissStarted { id, trigger });
    }

    /// The exit animation just finished: detach, complete, advance.
    fn finish_dismiss(&mut self, now: Instant, surface: &mut dyn OverlaySurface) {
        let Some(mut active) = self.active.take() else {
            return;
        };

        let id = active.view.id();
        if let Some(callback) = active.view.take_callback() {
            callback(true);
        }
        surface.detach(id);
        self.record(ToastEventKind::DismissFinished { id });

        self.phase = AnimationPhase::Idle;
        self.try_advance(surface, now);
    }

    fn record(&self, kind: ToastEventKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(kind);
        }
    }
}

/// Final on-screen frame: horizontally centered, vertically fixed by the
/// location's inset (or the caller's exact coordinate).
fn resting_frame(size: Size, bounds: Size, location: Location, insets: Insets) -> Rectangle {
    let x = (bounds.width - size.width) * 0.5;
    let y = match location {
        Location::Top => insets.top,
        Location::Bottom => bounds.height - size.height - insets.bottom,
        Location::Custom(y) => y,
    };
    Rectangle::new(Point::new(x, y), size)
}

/// Offsets `frame` off-screen according to the direction rule table.
///
/// Shared by entry (starting frame from the resting frame) and exit
/// (ending frame from the current frame). `Vertical` picks the screen
/// edge matching the location; `Static` leaves the frame in place so only
/// opacity animates.
fn offset_frame(frame: Rectangle, bounds: Size, direction: Direction, location: Location) -> Rectangle {
    let mut offset = frame;
    match direction {
        Direction::Left => offset.x -= bounds.width,
        Direction::Right => offset.x += bounds.width,
        Direction::Vertical => match location {
            Location::Bottom => offset.y = bounds.height,
            Location::Top | Location::Custom(_) => offset.y = -frame.height,
        },
        Direction::Static => {}
    }
    offset
}
