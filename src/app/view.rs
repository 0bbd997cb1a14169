// SPDX-License-Identifier: MPL-2.0
//! View rendering for the playground application.

use iced::widget::{button, column, container, row, stack, text};
use iced::{Element, Length};

use super::message::{DemoToast, Message};
use super::App;
use crate::toast::AnimationPhase;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::ToastOverlay;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let heading = text("Toast playground").size(typography::TITLE_MD);
        let hint = text("Fire toasts below. Tap a visible toast to dismiss it early.")
            .size(typography::BODY);

        let presets = row![
            demo_button("Success", DemoToast::Success),
            demo_button("Error (top)", DemoToast::Error),
            demo_button("Warning (offset)", DemoToast::Warning),
        ]
        .spacing(spacing::XS);

        let motions = row![
            demo_button("Left to right", DemoToast::Crossing),
            demo_button("Custom style", DemoToast::Styled),
            demo_button("Queue three", DemoToast::Burst),
        ]
        .spacing(spacing::XS);

        let status = text(self.status_line()).size(typography::CAPTION);

        let content = container(
            column![heading, hint, presets, motions, status].spacing(spacing::MD),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

        let overlay = ToastOverlay::new(&self.coordinator, Message::ToastTapped).into_element();

        stack![content, overlay].into()
    }

    fn status_line(&self) -> String {
        let phase = match self.coordinator.phase() {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Presenting => "presenting",
            AnimationPhase::Presented => "presented",
            AnimationPhase::Dismissing => "dismissing",
        };
        format!(
            "phase: {phase} | queued: {} | completed: {} | events: {}",
            self.coordinator.queued_count(),
            self.completed.get(),
            self.diagnostics.len(),
        )
    }
}

fn demo_button(label: &str, demo: DemoToast) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .on_press(Message::Demo(demo))
        .padding(spacing::XS)
        .into()
}
