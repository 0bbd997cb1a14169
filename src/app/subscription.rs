// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the playground application.
//!
//! The frame clock only runs while the coordinator has work: an idle
//! coordinator costs nothing. Window resizes are always tracked so the
//! overlay surface never goes stale.

use std::time::Duration;

use iced::{event, time, Subscription};

use super::message::Message;
use super::App;

/// Interval of the animation frame clock while a toast is in flight.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([self.tick_subscription(), resize_subscription()])
    }

    fn tick_subscription(&self) -> Subscription<Message> {
        if self.coordinator.is_idle() {
            Subscription::none()
        } else {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        }
    }
}

fn resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}
