// SPDX-License-Identifier: MPL-2.0
//! Full-window canvas layer that paints the attached toast.
//!
//! The canvas draws the toast card at its current animated frame and
//! opacity. Input handling honors the pass-through contract: a press is
//! captured only when it lands inside the attached toast's frame; every
//! other event is left alone so content beneath the overlay stays
//! interactive.

use iced::widget::canvas::{self, Canvas, Frame, Path, Text};
use iced::widget::Action;
use iced::{Element, Length};
use iced_core::{Color, Point, Size};

use crate::toast::measure;
use crate::toast::{Coordinator, IconSide, TextAlignment, ToastId, ToastView};
use crate::ui::design_tokens::{radius, sizing};
use crate::ui::icons;

/// Canvas program rendering the coordinator's attached toast.
pub struct ToastOverlay<'a, Message> {
    coordinator: &'a Coordinator,
    on_tap: fn(ToastId) -> Message,
}

impl<'a, Message: 'static> ToastOverlay<'a, Message> {
    /// Creates the overlay layer. `on_tap` wraps a tap on the visible
    /// toast into the host's message type.
    #[must_use]
    pub fn new(coordinator: &'a Coordinator, on_tap: fn(ToastId) -> Message) -> Self {
        Self { coordinator, on_tap }
    }

    /// Builds the full-window canvas element.
    pub fn into_element(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<'a, Message> canvas::Program<Message> for ToastOverlay<'a, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) =
            event
        {
            if let Some(position) = cursor.position_in(bounds) {
                if let Some(id) = self.coordinator.hit_test(position) {
                    return Some(Action::publish((self.on_tap)(id)).and_capture());
                }
            }
        }

        // Everything else passes through to the content beneath.
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(view) = self.coordinator.attached_view() {
            draw_toast(&mut frame, view);
        }

        vec![frame.into_geometry()]
    }
}

fn draw_toast(frame: &mut Frame, view: &ToastView) {
    let opacity = view.opacity();
    if opacity <= 0.0 {
        return;
    }

    let card = view.frame();
    let style = view.style();

    let corner: f32 = radius::TOAST;
    let path = Path::rounded_rectangle(
        Point::new(card.x, card.y),
        Size::new(card.width, card.height),
        corner.into(),
    );
    frame.fill(&path, dim(style.background, opacity));

    let padding = sizing::TOAST_CONTENT_PADDING;
    let mut text_x = card.x + padding;

    if let Some((icon, side)) = view.icon_layout() {
        let icon_x = match side {
            IconSide::Left => card.x + padding + sizing::TOAST_ICON / 2.0,
            IconSide::Right => card.x + card.width - padding - sizing::TOAST_ICON / 2.0,
        };
        let center = Point::new(icon_x, card.y + card.height / 2.0);
        icons::draw(
            frame,
            icon,
            center,
            sizing::TOAST_ICON,
            dim(style.tint_color, opacity),
        );

        if side == IconSide::Left {
            text_x = card.x + padding + sizing::TOAST_ICON + padding;
        }
    }

    let line_height = measure::line_height(style.font_size);
    let text_height = view.lines().len() as f32 * line_height;
    let mut line_y = card.y + (card.height - text_height) / 2.0;
    let text_color = dim(style.text_color, opacity);

    for line in view.lines() {
        let x = line_x(
            text_x,
            sizing::TOAST_TEXT_WIDTH,
            measure::line_width(line, style.font_size),
            style.text_alignment,
        );
        frame.fill_text(Text {
            content: line.clone(),
            position: Point::new(x, line_y),
            color: text_color,
            size: style.font_size.into(),
            ..Text::default()
        });
        line_y += line_height;
    }
}

/// Multiplies a color's alpha by the toast's current opacity.
fn dim(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Horizontal origin of one text line inside the label area.
fn line_x(area_x: f32, area_width: f32, line_width: f32, alignment: TextAlignment) -> f32 {
    match alignment {
        TextAlignment::Natural | TextAlignment::Left => area_x,
        TextAlignment::Center => area_x + (area_width - line_width) / 2.0,
        TextAlignment::Right => area_x + area_width - line_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_relative_eq, F32_EPSILON};

    #[test]
    fn dim_scales_alpha_only() {
        let dimmed = dim(Color::from_rgba(0.2, 0.4, 0.6, 0.8), 0.5);
        assert_relative_eq!(dimmed.a, 0.4, epsilon = F32_EPSILON);
        assert_relative_eq!(dimmed.r, 0.2, epsilon = F32_EPSILON);
        assert_relative_eq!(dimmed.g, 0.4, epsilon = F32_EPSILON);
        assert_relative_eq!(dimmed.b, 0.6, epsilon = F32_EPSILON);
    }

    #[test]
    fn natural_and_left_alignment_share_an_origin() {
        assert_eq!(
            line_x(10.0, 240.0, 100.0, TextAlignment::Natural),
            line_x(10.0, 240.0, 100.0, TextAlignment::Left)
        );
    }

    #[test]
    fn center_alignment_splits_the_leftover_space() {
        let x = line_x(10.0, 240.0, 100.0, TextAlignment::Center);
        assert_relative_eq!(x, 80.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn right_alignment_hugs_the_trailing_edge() {
        let x = line_x(10.0, 240.0, 100.0, TextAlignment::Right);
        assert_relative_eq!(x, 150.0, epsilon = F32_EPSILON);
    }
}
