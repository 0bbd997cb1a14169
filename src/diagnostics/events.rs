// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for presentation lifecycle tracking.
//!
//! Every observable transition of a toast (enqueued, entering, resting,
//! leaving, gone) is captured as one event, timestamped with the
//! monotonic clock at the moment the coordinator performed it.

use std::time::Instant;

use crate::toast::ToastId;

/// What caused a toast to start its exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The auto-dismiss delay elapsed.
    Timer,
    /// The user tapped the visible toast.
    Tap,
}

/// Lifecycle transitions recorded by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A request entered the presentation queue.
    Enqueued { id: ToastId },
    /// The view was attached and its enter animation started.
    PresentStarted { id: ToastId },
    /// The enter animation completed; the auto-dismiss delay is running.
    PresentFinished { id: ToastId },
    /// The exit animation started.
    DismissStarted { id: ToastId, trigger: DismissTrigger },
    /// The view was detached and its completion callback fired.
    DismissFinished { id: ToastId },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone, Copy)]
pub struct ToastEvent {
    /// When the transition happened (monotonic).
    pub at: Instant,
    /// The transition itself.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// The toast this event concerns.
    #[must_use]
    pub fn toast_id(&self) -> ToastId {
        match self.kind {
            ToastEventKind::Enqueued { id }
            | ToastEventKind::PresentStarted { id }
            | ToastEventKind::PresentFinished { id }
            | ToastEventKind::DismissStarted { id, .. }
            | ToastEventKind::DismissFinished { id } => id,
        }
    }
}
