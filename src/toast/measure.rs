// SPDX-License-Identifier: MPL-2.0
//! Text measurement estimation for toast sizing.
//!
//! The coordinator needs a view's height before the view is ever laid out
//! by the renderer, so the message is wrapped here with a deterministic
//! greedy algorithm against an estimated uniform glyph advance. The
//! estimate targets the default UI font; exotic scripts may wrap slightly
//! differently than the renderer, which only affects how much padding the
//! text gets inside the card.

/// Line height as a multiple of the font size, matching the renderer's
/// default text layout.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Average glyph advance as a multiple of the font size.
const AVG_ADVANCE_FACTOR: f32 = 0.54;

/// Greedily wraps `message` into lines no wider than `max_width`.
///
/// Words longer than a whole line are hard-broken at the character that
/// would overflow. An empty message still produces one (empty) line, so a
/// toast never measures to zero text height.
pub fn wrap_lines(message: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let advance = font_size * AVG_ADVANCE_FACTOR;
    let max_chars = ((max_width / advance).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in message.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // Hard-break words that cannot fit on a line of their own.
        let mut rest: Vec<char> = word.chars().collect();
        while rest.len() > max_chars {
            lines.push(rest.drain(..max_chars).collect());
        }
        current = rest.into_iter().collect();
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Estimated height of `message` wrapped against `max_width`.
pub fn measured_height(message: &str, font_size: f32, max_width: f32) -> f32 {
    let lines = wrap_lines(message, font_size, max_width).len();
    lines as f32 * line_height(font_size)
}

/// Height of a single text line.
#[must_use]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Estimated rendered width of a single already-wrapped line.
#[must_use]
pub fn line_width(line: &str, font_size: f32) -> f32 {
    line.chars().count() as f32 * font_size * AVG_ADVANCE_FACTOR
}
