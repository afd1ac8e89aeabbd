//! ui/summary.rs
//!
//! Read-only projection of the accumulated form data. Rendered as the
//! progress summary during the job and repository steps and again on the
//! review step; rows with no value yet are omitted.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::WizardState;
use crate::ui::helpers::{label_style, value_style};

pub fn render_summary(f: &mut ratatui::Frame, area: Rect, state: &WizardState) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(candidate) = &state.candidate {
        let name = candidate.full_name();
        if !name.is_empty() {
            lines.push(row("Candidate: ", name));
        }
        if !candidate.uuid.is_empty() {
            lines.push(row("UUID: ", candidate.uuid.clone()));
        }
        if !candidate.candidate_id.is_empty() {
            lines.push(row("Candidate ID: ", candidate.candidate_id.clone()));
        }
    }

    if let Some(job) = &state.selected_job {
        lines.push(row("Position: ", format!("{} ({})", job.title, job.id)));
    }

    if !state.repo_url.trim().is_empty() {
        lines.push(row("Repo URL: ", state.repo_url.clone()));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing collected yet.",
            label_style(),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("SUMMARY")
            .title_alignment(Alignment::Center),
    );

    f.render_widget(panel, area);
}

fn row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, label_style()),
        Span::styled(value, value_style()),
    ])
}
