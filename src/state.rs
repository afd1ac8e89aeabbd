use std::collections::VecDeque;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::fetch::CancelToken;

pub const MAX_LOGS: usize = 200;
pub const TOTAL_STEPS: usize = 4;

/* ---------- wire types ---------- */

/// Identity record returned by the candidate lookup endpoint. Fetched once
/// per email lookup and replaced wholesale on a new lookup or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub uuid: String,
    pub candidate_id: String,
    pub application_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Open position listing. Read-only; one set is fetched at wizard start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
}

/* ---------- steps ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Lookup,
    Jobs,
    Repo,
    Review,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS] = [Step::Lookup, Step::Jobs, Step::Repo, Step::Review];

    /// 1-based step number.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Lookup => "Fetch your details",
            Step::Jobs => "Open positions",
            Step::Repo => "Add repository",
            Step::Review => "Review and submit",
        }
    }

    /// Following step, clamped at the last one.
    pub fn next(self) -> Step {
        match self {
            Step::Lookup => Step::Jobs,
            Step::Jobs => Step::Repo,
            Step::Repo | Step::Review => Step::Review,
        }
    }

    /// Preceding step, clamped at the first one.
    pub fn previous(self) -> Step {
        match self {
            Step::Lookup | Step::Jobs => Step::Lookup,
            Step::Repo => Step::Jobs,
            Step::Review => Step::Repo,
        }
    }
}

/* ---------- logging ---------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
    pub at: Instant,
}

/* ---------- ui ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Lookup,
    Submit,
}

pub struct UiState {
    pub email_input: String,
    pub job_cursor: usize,
    pub pending_action: Option<PendingAction>,
    pub should_exit: bool,
    pub started_at: Instant,
}

/* ---------- wizard state ---------- */

pub struct WizardState {
    pub step: Step,
    pub candidate: Option<Candidate>,

    /* job list, fetched once at wizard start */
    pub jobs: Vec<Job>,
    pub jobs_loading: bool,
    pub jobs_error: Option<String>,

    /* accumulated form data */
    pub selected_job: Option<Job>,
    pub repo_url: String,

    /* candidate lookup */
    pub lookup_loading: bool,
    pub lookup_error: Option<String>,

    /* submission */
    pub submit_loading: bool,
    pub submit_error: Option<String>,
    pub submit_success: bool,

    /* in-flight request tokens; a missing or cancelled token means the
    result must not mutate state */
    pub jobs_cancel: Option<CancelToken>,
    pub lookup_cancel: Option<CancelToken>,
    pub submit_cancel: Option<CancelToken>,

    pub ui: UiState,

    /* activity log (ring buffer) */
    pub logs: VecDeque<LogLine>,
}

/* ---------- helpers ---------- */

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::Lookup,
            candidate: None,
            jobs: Vec::new(),
            jobs_loading: false,
            jobs_error: None,
            selected_job: None,
            repo_url: String::new(),
            lookup_loading: false,
            lookup_error: None,
            submit_loading: false,
            submit_error: None,
            submit_success: false,
            jobs_cancel: None,
            lookup_cancel: None,
            submit_cancel: None,
            ui: UiState {
                email_input: String::new(),
                job_cursor: 0,
                pending_action: None,
                should_exit: false,
                started_at: Instant::now(),
            },
            logs: VecDeque::new(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.active_input_mut() {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.active_input_mut() {
            input.pop();
        }
    }

    /// The text field edited on the current step, if the step has one.
    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.step {
            Step::Lookup => Some(&mut self.ui.email_input),
            Step::Repo => Some(&mut self.repo_url),
            Step::Jobs | Step::Review => None,
        }
    }

    pub fn push_log(&mut self, level: LogLevel, text: impl Into<String>) {
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }

        self.logs.push_back(LogLine {
            level,
            text: text.into(),
            at: Instant::now(),
        });
    }

    pub fn last_log(&self) -> Option<&LogLine> {
        self.logs.back()
    }

    /// True while any remote call is outstanding; drives the spinner.
    pub fn request_in_flight(&self) -> bool {
        self.jobs_loading || self.lookup_loading || self.submit_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_follow_wizard_order() {
        assert_eq!(Step::Lookup.number(), 1);
        assert_eq!(Step::Jobs.number(), 2);
        assert_eq!(Step::Repo.number(), 3);
        assert_eq!(Step::Review.number(), 4);
    }

    #[test]
    fn step_next_clamps_at_review() {
        assert_eq!(Step::Repo.next(), Step::Review);
        assert_eq!(Step::Review.next(), Step::Review);
    }

    #[test]
    fn step_previous_clamps_at_lookup() {
        assert_eq!(Step::Jobs.previous(), Step::Lookup);
        assert_eq!(Step::Lookup.previous(), Step::Lookup);
    }

    #[test]
    fn typing_edits_email_on_lookup_step() {
        let mut state = WizardState::new();
        state.push_char('a');
        state.push_char('b');
        assert_eq!(state.ui.email_input, "ab");
        assert!(state.repo_url.is_empty());

        state.backspace();
        assert_eq!(state.ui.email_input, "a");
    }

    #[test]
    fn typing_edits_repo_url_on_repo_step() {
        let mut state = WizardState::new();
        state.step = Step::Repo;
        state.push_char('h');
        assert_eq!(state.repo_url, "h");
        assert!(state.ui.email_input.is_empty());
    }

    #[test]
    fn typing_is_ignored_on_steps_without_an_input() {
        let mut state = WizardState::new();
        state.step = Step::Jobs;
        state.push_char('x');
        state.backspace();
        assert!(state.ui.email_input.is_empty());
        assert!(state.repo_url.is_empty());
    }

    #[test]
    fn log_ring_is_bounded() {
        let mut state = WizardState::new();
        for i in 0..(MAX_LOGS + 10) {
            state.push_log(LogLevel::Info, format!("line {}", i));
        }
        assert_eq!(state.logs.len(), MAX_LOGS);
        assert_eq!(state.logs.front().map(|l| l.text.as_str()), Some("line 10"));
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let candidate = Candidate {
            uuid: "u1".into(),
            candidate_id: "c1".into(),
            application_id: "a1".into(),
            first_name: "Ada".into(),
            last_name: String::new(),
            email: "ada@example.com".into(),
        };
        assert_eq!(candidate.full_name(), "Ada");
    }
}
