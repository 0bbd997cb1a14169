// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn state icon glyphs.
//!
//! Icons are stroked directly into the overlay canvas frame, so the crate
//! ships no image assets and glyphs tint to any color.

use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced_core::{Color, Point};

use crate::toast::Icon;

const STROKE_WIDTH: f32 = 2.0;

/// Draws `icon` centered on `center`, fitting a `size`-by-`size` box.
pub fn draw(frame: &mut Frame, icon: Icon, center: Point, size: f32, color: Color) {
    match icon {
        Icon::Success => draw_checkmark(frame, center, size, color),
        Icon::Error => draw_cross(frame, center, size, color),
        Icon::Warning => draw_triangle(frame, center, size, color),
        Icon::Info => draw_info(frame, center, size, color),
    }
}

fn stroke(color: Color) -> Stroke<'static> {
    Stroke::default()
        .with_width(STROKE_WIDTH)
        .with_color(color)
        .with_line_cap(canvas::LineCap::Round)
}

fn draw_checkmark(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let half = size / 2.0;
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(center.x - half * 0.6, center.y + half * 0.05));
    builder.line_to(Point::new(center.x - half * 0.15, center.y + half * 0.5));
    builder.line_to(Point::new(center.x + half * 0.6, center.y - half * 0.45));
    frame.stroke(&builder.build(), stroke(color));
}

fn draw_cross(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let arm = size * 0.3;
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(center.x - arm, center.y - arm));
    builder.line_to(Point::new(center.x + arm, center.y + arm));
    builder.move_to(Point::new(center.x + arm, center.y - arm));
    builder.line_to(Point::new(center.x - arm, center.y + arm));
    frame.stroke(&builder.build(), stroke(color));
}

fn draw_triangle(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let half = size / 2.0;
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(center.x, center.y - half * 0.8));
    builder.line_to(Point::new(center.x + half * 0.85, center.y + half * 0.7));
    builder.line_to(Point::new(center.x - half * 0.85, center.y + half * 0.7));
    builder.close();
    frame.stroke(&builder.build(), stroke(color));

    // Exclamation mark inside the triangle.
    let mut mark = canvas::path::Builder::new();
    mark.move_to(Point::new(center.x, center.y - half * 0.3));
    mark.line_to(Point::new(center.x, center.y + half * 0.15));
    frame.stroke(&mark.build(), stroke(color));
    frame.fill(
        &Path::circle(Point::new(center.x, center.y + half * 0.45), STROKE_WIDTH * 0.75),
        color,
    );
}

fn draw_info(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let half = size / 2.0;
    frame.stroke(&Path::circle(center, half * 0.85), stroke(color));

    frame.fill(
        &Path::circle(Point::new(center.x, center.y - half * 0.4), STROKE_WIDTH * 0.75),
        color,
    );
    let mut stem = canvas::path::Builder::new();
    stem.move_to(Point::new(center.x, center.y - half * 0.1));
    stem.line_to(Point::new(center.x, center.y + half * 0.5));
    frame.stroke(&stem.build(), stroke(color));
}
