//! ui/steps.rs
//!
//! The four step views. Each renders the body area for its step; all of
//! them are pure projections of the wizard state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{Step, WizardState};
use crate::ui::helpers::{
    clip_input, dim_style, error_style, hint_style, label_style, spinner, success_style,
    value_style,
};
use crate::ui::summary;

const INPUT_PROMPT: &str = ">_ ";

pub fn render_step(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    match state.step {
        Step::Lookup => render_lookup(f, area, state),
        Step::Jobs => render_jobs(f, area, state),
        Step::Repo => render_repo(f, area, state),
        Step::Review => render_review(f, area, state),
    }
}

/* ---------- step 1: candidate lookup ---------- */

fn render_lookup(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_step_header(
        f,
        chunks[0],
        "Fetch your details",
        "Enter your email to pull your candidate record.",
    );

    render_input_box(f, chunks[1], "EMAIL", &state.ui.email_input, "you@email.com");

    if state.lookup_loading {
        let frame = (state.ui.started_at.elapsed().as_millis() / 120) as usize;
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Searching... ", dim_style()),
                Span::styled(spinner(frame), Style::default().fg(Color::Green)),
            ])),
            chunks[2],
        );
    } else if let Some(error) = &state.lookup_error {
        f.render_widget(
            Paragraph::new(Span::styled(error.clone(), error_style())),
            chunks[2],
        );
    }

    if let Some(candidate) = &state.candidate {
        let lines = vec![
            labeled("Candidate: ", candidate.full_name()),
            labeled("Email: ", candidate.email.clone()),
            labeled("UUID: ", candidate.uuid.clone()),
            labeled("Candidate ID: ", candidate.candidate_id.clone()),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("CANDIDATE")
                .title_alignment(Alignment::Center),
        );

        let height = chunks[3].height.min(6);
        let card_area = Rect {
            height,
            ..chunks[3]
        };
        f.render_widget(card, card_area);
    }
}

/* ---------- step 2: open positions ---------- */

fn render_jobs(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_step_header(
        f,
        chunks[0],
        "Open positions",
        "Choose a position to continue.",
    );

    // loading, error, empty, and populated states are mutually exclusive,
    // in that priority order
    let mut lines: Vec<Line> = Vec::new();

    if state.jobs_loading {
        let frame = (state.ui.started_at.elapsed().as_millis() / 120) as usize;
        lines.push(Line::from(vec![
            Span::styled("Loading positions... ", dim_style()),
            Span::styled(spinner(frame), Style::default().fg(Color::Green)),
        ]));
    } else if let Some(error) = &state.jobs_error {
        lines.push(Line::from(Span::styled(error.clone(), error_style())));
    } else if state.jobs.is_empty() {
        lines.push(Line::from(Span::styled(
            "No open positions right now.",
            dim_style(),
        )));
    } else {
        if state.candidate.is_none() {
            lines.push(Line::from(Span::styled(
                "Fetch your candidate record first to apply.",
                hint_style(),
            )));
            lines.push(Line::from(""));
        }

        for (i, job) in state.jobs.iter().enumerate() {
            let under_cursor = i == state.ui.job_cursor;
            let selected = state.selected_job.as_ref().map(|j| j.id.as_str()) == Some(&job.id);

            let marker = if under_cursor { "▸ " } else { "  " };
            let title_style = if state.candidate.is_none() {
                dim_style()
            } else if under_cursor {
                value_style().add_modifier(Modifier::BOLD)
            } else {
                value_style()
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(job.title.clone(), title_style),
                Span::styled(format!("  ID: {}", job.id), dim_style()),
            ];

            if selected {
                spans.push(Span::styled("  ✓ selected", success_style()));
            }

            lines.push(Line::from(spans));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

/* ---------- step 3: repository ---------- */

fn render_repo(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_step_header(
        f,
        chunks[0],
        "Add repository",
        "Paste the URL of your source repository to continue.",
    );

    render_input_box(
        f,
        chunks[1],
        "REPO URL",
        &state.repo_url,
        "https://github.com/you/your-repo",
    );
}

/* ---------- step 4: review ---------- */

fn render_review(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    render_step_header(
        f,
        chunks[0],
        "Review and submit",
        "Check the details before the final submission.",
    );

    summary::render_summary(f, chunks[1], state);
}

/* ---------- shared pieces ---------- */

fn render_step_header(f: &mut ratatui::Frame, area: Rect, title: &str, description: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(description.to_string(), label_style())),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

/// Bordered single-line input with the cursor parked after the last
/// character; the tail of an overlong value stays visible.
fn render_input_box(
    f: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    input: &str,
    placeholder: &str,
) {
    let max_width = area
        .width
        .saturating_sub(INPUT_PROMPT.len() as u16 + 2) as usize;
    let visible = clip_input(input, max_width);

    let mut spans = vec![Span::styled(INPUT_PROMPT, Style::default().fg(Color::Cyan))];
    if visible.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), dim_style()));
    } else {
        spans.push(Span::styled(visible.clone(), value_style()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title_alignment(Alignment::Center),
    );

    f.render_widget(paragraph, area);

    let offset = UnicodeWidthStr::width(visible.as_str());
    let cursor_x = area.x + 1 + INPUT_PROMPT.len() as u16 + offset as u16;
    let cursor_y = area.y + 1;
    f.set_cursor(cursor_x, cursor_y);
}

fn labeled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, label_style()),
        Span::styled(value, value_style()),
    ])
}
