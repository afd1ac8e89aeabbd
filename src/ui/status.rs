//! ui/status.rs
//!
//! Banner + progress renderer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::state::{WizardState, TOTAL_STEPS};

const HEADER: [&str; 6] = [
    " █████╗ ██████╗ ██████╗ ██╗     ██╗   ██╗",
    "██╔══██╗██╔══██╗██╔══██╗██║     ╚██╗ ██╔╝",
    "███████║██████╔╝██████╔╝██║      ╚████╔╝ ",
    "██╔══██║██╔═══╝ ██╔═══╝ ██║       ╚██╔╝  ",
    "██║  ██║██║     ██║     ███████╗   ██║   ",
    "╚═╝  ╚═╝╚═╝     ╚═╝     ╚══════╝   ╚═╝   ",
];

pub fn render_status(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3)])
        .split(area);

    render_header(f, chunks[0]);
    render_progress(f, chunks[1], state);
}

fn render_header(f: &mut ratatui::Frame, area: Rect) {
    let header = Paragraph::new(
        HEADER
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    *l,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(header, area);
}

fn render_progress(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let step = state.step;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("PROGRESS")
                .title_alignment(Alignment::Center),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(step.number() as f64 / TOTAL_STEPS as f64)
        .label(format!(
            "Step {} of {} · {}",
            step.number(),
            TOTAL_STEPS,
            step.title()
        ));

    f.render_widget(gauge, area);
}
