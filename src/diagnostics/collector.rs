// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! The coordinator records events through a [`DiagnosticsHandle`]; the
//! owning application drains them into a capacity-bounded buffer whenever
//! convenient (typically once per tick). The handle sends over a bounded
//! channel and never blocks the UI thread: if the channel is full the
//! event is dropped.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{ToastEvent, ToastEventKind};

/// Number of events that may be in flight between handle and collector.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for recording diagnostic events.
///
/// Cheap to clone; safe to hand to any component that should report
/// presentation activity.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event.
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn record(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Owns the event buffer and the receiving end of the channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<ToastEvent>,
    buffer: CircularBuffer<ToastEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector and its sending handle.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        let collector = Self {
            event_rx,
            buffer: CircularBuffer::new(capacity),
        };
        (collector, DiagnosticsHandle { event_tx })
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Returns the number of events drained.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Iterates over buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DismissTrigger;
    use crate::toast::{Toast, ToastView};

    fn some_id() -> crate::toast::ToastId {
        ToastView::new(Toast::new("test")).id()
    }

    #[test]
    fn recorded_events_arrive_after_drain() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let id = some_id();

        handle.record(ToastEventKind::Enqueued { id });
        handle.record(ToastEventKind::PresentStarted { id });
        assert!(collector.is_empty());

        assert_eq!(collector.drain(), 2);
        let kinds: Vec<_> = collector.events().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToastEventKind::Enqueued { id },
                ToastEventKind::PresentStarted { id },
            ]
        );
    }

    #[test]
    fn drain_on_empty_channel_returns_zero() {
        let (mut collector, _handle) = DiagnosticsCollector::new(BufferCapacity::default());
        assert_eq!(collector.drain(), 0);
    }

    #[test]
    fn events_survive_handle_clone_and_drop() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let id = some_id();

        let cloned = handle.clone();
        cloned.record(ToastEventKind::DismissStarted {
            id,
            trigger: DismissTrigger::Tap,
        });
        drop(cloned);
        drop(handle);

        assert_eq!(collector.drain(), 1);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn buffer_is_capacity_bounded() {
        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(10));
        let id = some_id();

        for _ in 0..12 {
            handle.record(ToastEventKind::Enqueued { id });
            collector.drain();
        }
        assert_eq!(collector.len(), 10);
    }
}
