//! Terminal rendering for schedule-core types.
//!
//! Event colors are `#RRGGBB` strings; they are drawn as truecolor when
//! they parse and left plain otherwise.

use chrono::Datelike;
use owo_colors::OwoColorize;
use schedule_core::Event;
use schedule_core::layout::time_range_label;
use schedule_core::view::MonthCell;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{:>13}", time_range_label(self));
        let category = format!("[{}]", self.category);
        format!(
            "{}  {} {}",
            time,
            paint(&self.title, &self.color),
            category.dimmed()
        )
    }
}

impl Render for MonthCell {
    /// Fixed-width grid cell: day number plus a dot when it has events.
    fn render(&self) -> String {
        let marker = if self.has_events() { "•" } else { " " };
        let text = format!("{:>3}{} ", self.date.day(), marker);

        if self.is_today {
            text.reversed().to_string()
        } else if !self.in_current_month {
            text.dimmed().to_string()
        } else {
            text
        }
    }
}

/// Draw `text` in a `#RRGGBB` color.
pub fn paint(text: &str, hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
