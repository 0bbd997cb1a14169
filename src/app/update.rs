// SPDX-License-Identifier: MPL-2.0
//! Message handling for the playground application.

use std::time::{Duration, Instant};

use iced::Task;
use iced_core::Color;

use super::message::{DemoToast, Message};
use super::App;
use crate::toast::{Direction, Location, State, Style, TextAlignment, Toast};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Demo(demo) => {
                let toast = self.build_demo_toast(demo);
                let now = Instant::now();
                match toast {
                    DemoRequest::One(toast) => self.show(toast, now),
                    DemoRequest::Burst(toasts) => {
                        for toast in toasts {
                            self.show(toast, now);
                        }
                    }
                }
            }
            Message::ToastTapped(id) => {
                self.coordinator.request_dismiss(id, Instant::now());
            }
            Message::Tick(now) => {
                self.coordinator.tick(now, &mut self.surface);
                self.diagnostics.drain();
            }
            Message::WindowResized(size) => {
                self.surface.set_size(size);
            }
        }

        Task::none()
    }

    fn build_demo_toast(&self, demo: DemoToast) -> DemoRequest {
        let duration = self.duration;
        match demo {
            DemoToast::Success => DemoRequest::One(
                Toast::success("Saved").duration(duration).on_dismiss(self.completion_counter()),
            ),
            DemoToast::Error => DemoRequest::One(
                Toast::error("Something went wrong")
                    .duration(duration)
                    .location(Location::Top)
                    .on_dismiss(self.completion_counter()),
            ),
            DemoToast::Warning => DemoRequest::One(
                Toast::warning("Battery is low")
                    .duration(duration)
                    .location(Location::Custom(120.0))
                    .on_dismiss(self.completion_counter()),
            ),
            DemoToast::Crossing => DemoRequest::One(
                Toast::info("Crossing the screen")
                    .duration(duration)
                    .presenting(Direction::Left)
                    .dismissing(Direction::Right)
                    .on_dismiss(self.completion_counter()),
            ),
            DemoToast::Styled => {
                let style = Style {
                    background: Color::from_rgb(0.35, 0.2, 0.55),
                    icon: None,
                    text_alignment: TextAlignment::Center,
                    ..Style::default()
                };
                DemoRequest::One(
                    Toast::new("A custom-styled toast")
                        .duration(duration)
                        .state(State::Custom(style))
                        .presenting(Direction::Static)
                        .on_dismiss(self.completion_counter()),
                )
            }
            DemoToast::Burst => DemoRequest::Burst(
                ["First in line", "Second in line", "Third in line"]
                    .into_iter()
                    .map(|message| {
                        Toast::new(message)
                            .duration(Duration::from_secs(1))
                            .on_dismiss(self.completion_counter())
                    })
                    .collect(),
            ),
        }
    }
}

enum DemoRequest {
    One(Toast),
    Burst(Vec<Toast>),
}
