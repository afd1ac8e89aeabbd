use std::io;
use std::time::Duration;

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::state::{Step, WizardState};
use crate::ui::helpers::{error_style, key_hints, level_color, spinner, success_style};
use crate::ui::{status, steps, summary};

const FOOTER_LOG_TTL: Duration = Duration::from_secs(8);

pub fn draw_ui<B: Backend>(terminal: &mut Terminal<B>, state: &WizardState) -> io::Result<()> {
    terminal.draw(|f| {
        let show_summary = matches!(state.step, Step::Jobs | Step::Repo);
        let banner = submit_banner(state);

        let mut constraints = vec![Constraint::Length(10)];
        if show_summary {
            constraints.push(Constraint::Length(7));
        }
        constraints.push(Constraint::Min(8));
        if banner.is_some() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(f.size());

        let mut idx = 0;
        status::render_status(f, chunks[idx], state);
        idx += 1;

        if show_summary {
            summary::render_summary(f, chunks[idx], state);
            idx += 1;
        }

        steps::render_step(f, chunks[idx], state);
        idx += 1;

        if let Some((text, style)) = banner {
            render_banner(f, chunks[idx], text, style);
            idx += 1;
        }

        render_footer(f, chunks[idx], state);
    })?;

    Ok(())
}

/// Submission outcome shown beneath the step body on every step until the
/// next action clears it.
fn submit_banner(state: &WizardState) -> Option<(String, Style)> {
    if state.submit_success {
        return Some((
            "Application submitted successfully.".to_string(),
            success_style(),
        ));
    }
    state
        .submit_error
        .as_ref()
        .map(|error| (error.clone(), error_style()))
}

fn render_banner(f: &mut ratatui::Frame, area: Rect, text: String, style: Style) {
    let banner = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    f.render_widget(banner, area);
}

/// Key hints on the left, most recent activity-log line on the right.
/// Stale log lines fade out; a spinner marks any outstanding request.
fn render_footer(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let mut spans = key_hints(state);

    if state.request_in_flight() {
        let frame = (state.ui.started_at.elapsed().as_millis() / 120) as usize;
        spans.push(Span::raw("  "));
        spans.push(Span::styled(spinner(frame), Style::default().fg(Color::Green)));
    }

    if let Some(log) = state.last_log() {
        if log.at.elapsed() < FOOTER_LOG_TTL {
            let left_width: usize = spans.iter().map(|s| s.content.len()).sum();
            let spacing = area
                .width
                .saturating_sub(left_width as u16 + log.text.len() as u16)
                .max(1) as usize;

            spans.push(Span::raw(" ".repeat(spacing)));
            spans.push(Span::styled(
                log.text.clone(),
                Style::default().fg(level_color(&log.level)),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
