// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for observing presentation activity.
//!
//! The coordinator reports every lifecycle transition (enqueue, enter,
//! rest, exit, completion) as a timestamped event. Events flow through a
//! non-blocking channel into a memory-bounded circular buffer owned by the
//! host application, which can inspect them for debugging or display them
//! in a diagnostics view.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: generic ring buffer with validated capacity
//! - [`ToastEvent`] / [`ToastEventKind`]: the lifecycle transitions
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel pair between
//!   the coordinator and the host

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DismissTrigger, ToastEvent, ToastEventKind};
