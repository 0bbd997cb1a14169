// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows queued, animated toast notifications in Iced
//! applications.
//!
//! A toast is a small transient message card: it slides onto the screen,
//! rests for its display duration, then slides away, or leaves early
//! when tapped. Overlapping requests are serialized first-in-first-out,
//! and at most one toast is ever visible.
//!
//! The [`toast`] module is the core: requests, views, the overlay surface
//! contract, and the coordinator state machine. The [`ui`] module renders
//! the visible toast on a pass-through canvas layer, and [`app`] is a
//! small playground binary exercising the whole pipeline.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
