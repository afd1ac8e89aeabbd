//! ui/helpers.rs
//!
//! Shared UI helper utilities.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::state::{LogLevel, Step, WizardState};

pub fn spinner(frame: usize) -> &'static str {
    const FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
    FRAMES[frame % FRAMES.len()]
}

pub fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn value_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn success_style() -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn key_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Color mapping for log levels.
pub fn level_color(level: &LogLevel) -> Color {
    match level {
        LogLevel::Success => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Info => Color::Gray,
    }
}

/// Tail of the input that fits `max_width` terminal cells (char-safe).
pub fn clip_input(input: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(input) <= max_width {
        return input.to_string();
    }

    input
        .chars()
        .rev()
        .scan(0, |w, c| {
            *w += UnicodeWidthStr::width(c.to_string().as_str());
            if *w <= max_width {
                Some(c)
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Footer key hints for the current state.
pub fn key_hints(state: &WizardState) -> Vec<Span<'static>> {
    let mut hints: Vec<(&str, &str)> = Vec::new();

    match state.step {
        Step::Lookup => {
            hints.push(("[enter]", " look up  "));
            if state.candidate.is_some() {
                hints.push(("[→]", " continue  "));
            }
        }
        Step::Jobs => {
            hints.push(("[↑↓]", " choose  "));
            if state.candidate.is_some() {
                hints.push(("[enter]", " select  "));
            }
            hints.push(("[←]", " back  "));
        }
        Step::Repo => {
            hints.push(("[enter]", " continue  "));
            hints.push(("[←]", " back  "));
        }
        Step::Review => {
            if state.submit_success {
                hints.push(("[r]", " new application  "));
            } else {
                hints.push(("[enter]", " submit  "));
                hints.push(("[←]", " back  "));
            }
        }
    }

    hints.push(("[esc]", " quit"));

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (k, label) in hints {
        spans.push(Span::styled(k, key_style()));
        spans.push(Span::styled(label, dim_style()));
    }
    spans
}
