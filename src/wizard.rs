//! wizard.rs
//!
//! Wizard controller. Every transition of the application flow happens
//! through the functions here: step gating, the candidate cascade, the
//! submission guard, and the token-checked application of worker results.

use std::sync::mpsc::Sender;

use crate::api::{ApiClient, ApplyRequest};
use crate::fetch::{self, CancelToken, FetchEvent};
use crate::state::{Candidate, Job, LogLevel, Step, WizardState};

/// Replaces the candidate and cascades a reset of everything downstream of
/// it: selected job, repository URL, and submission status.
pub fn set_candidate(state: &mut WizardState, candidate: Option<Candidate>) {
    state.candidate = candidate;
    state.selected_job = None;
    state.repo_url.clear();
    clear_submit_status(state);
}

/// Silent no-op while no candidate is set. Otherwise records the selection,
/// clears stale submission status, and advances to the repository step.
pub fn select_job(state: &mut WizardState, job: Job) {
    if state.candidate.is_none() {
        return;
    }

    state.push_log(LogLevel::Info, format!("Selected position: {}", job.title));
    state.selected_job = Some(job);
    clear_submit_status(state);
    state.step = Step::Repo;
}

/// Step-advance gate: true when the step's required field is populated.
pub fn can_advance(state: &WizardState, step: Step) -> bool {
    match step {
        Step::Lookup => state.candidate.is_some(),
        Step::Jobs => state.selected_job.is_some(),
        Step::Repo => !state.repo_url.trim().is_empty(),
        Step::Review => {
            state.candidate.is_some()
                && state.selected_job.is_some()
                && !state.repo_url.trim().is_empty()
        }
    }
}

pub fn go_next(state: &mut WizardState) {
    if state.submit_loading || state.step == Step::Review || !can_advance(state, state.step) {
        return;
    }
    state.step = state.step.next();
}

pub fn go_previous(state: &mut WizardState) {
    if state.submit_loading {
        return;
    }
    state.step = state.step.previous();
}

/* ---------- remote operations ---------- */

pub fn start_jobs_fetch(state: &mut WizardState, api: &ApiClient, tx: &Sender<FetchEvent>) {
    cancel(&mut state.jobs_cancel);
    state.jobs_loading = true;
    state.jobs_error = None;

    let token = CancelToken::new();
    state.jobs_cancel = Some(token.clone());
    fetch::spawn_jobs_fetch(api.clone(), tx.clone(), token);
}

/// Validates the email locally, then spawns a lookup worker. A lookup that
/// is already running is not re-triggered; a superseded one is cancelled.
pub fn start_lookup(state: &mut WizardState, api: &ApiClient, tx: &Sender<FetchEvent>) {
    if state.lookup_loading {
        return;
    }

    let email = state.ui.email_input.trim().to_string();
    if email.is_empty() {
        state.lookup_error = Some("Enter a valid email.".to_string());
        return;
    }

    cancel(&mut state.lookup_cancel);
    state.lookup_loading = true;
    state.lookup_error = None;
    state.push_log(LogLevel::Info, format!("Looking up {}", email));

    let token = CancelToken::new();
    state.lookup_cancel = Some(token.clone());
    fetch::spawn_candidate_lookup(api.clone(), email, tx.clone(), token);
}

/// Guarded submission: all three required fields must be present, else a
/// validation error is shown and the network is never touched. Re-submission
/// after success is a no-op; restart with [`reset`].
pub fn start_submit(state: &mut WizardState, api: &ApiClient, tx: &Sender<FetchEvent>) {
    if state.submit_loading || state.submit_success {
        return;
    }

    state.submit_error = None;
    state.submit_success = false;

    let Some(request) = build_apply_request(state) else {
        state.submit_error = Some("Missing details to submit the application.".to_string());
        return;
    };

    state.submit_loading = true;
    state.push_log(LogLevel::Info, "Submitting application...");

    let token = CancelToken::new();
    state.submit_cancel = Some(token.clone());
    fetch::spawn_submit(api.clone(), request, tx.clone(), token);
}

/// Submission body for the current state, `None` when a required field is
/// missing. The repository URL is sent trimmed.
pub fn build_apply_request(state: &WizardState) -> Option<ApplyRequest> {
    let candidate = state.candidate.as_ref()?;
    let job = state.selected_job.as_ref()?;
    let repo_url = state.repo_url.trim();
    if repo_url.is_empty() {
        return None;
    }

    Some(ApplyRequest {
        uuid: candidate.uuid.clone(),
        job_id: job.id.clone(),
        candidate_id: candidate.candidate_id.clone(),
        repo_url: repo_url.to_string(),
    })
}

/* ---------- worker results ---------- */

/// Single entry point for worker results. The operation's token is checked
/// first, so a result arriving after cancellation changes nothing.
pub fn apply_event(state: &mut WizardState, event: FetchEvent) {
    match event {
        FetchEvent::Jobs(result) => {
            if !take_live(&mut state.jobs_cancel) {
                return;
            }
            state.jobs_loading = false;

            match result {
                Ok(jobs) => {
                    state.push_log(
                        LogLevel::Success,
                        format!("Loaded {} open position(s).", jobs.len()),
                    );
                    state.jobs = jobs;
                }
                Err(message) => {
                    state.push_log(LogLevel::Error, message.clone());
                    state.jobs_error = Some(message);
                }
            }
        }

        FetchEvent::Candidate(result) => {
            if !take_live(&mut state.lookup_cancel) {
                return;
            }
            state.lookup_loading = false;

            match result {
                Ok(candidate) => {
                    state.push_log(
                        LogLevel::Success,
                        format!("Candidate found: {}", candidate.full_name()),
                    );
                    set_candidate(state, Some(candidate));
                }
                Err(message) => {
                    // a failed lookup leaves the current candidate alone
                    state.push_log(LogLevel::Error, message.clone());
                    state.lookup_error = Some(message);
                }
            }
        }

        FetchEvent::Submitted(result) => {
            if !take_live(&mut state.submit_cancel) {
                return;
            }
            state.submit_loading = false;

            match result {
                Ok(()) => {
                    state.submit_success = true;
                    state.push_log(LogLevel::Success, "Application submitted successfully.");
                }
                Err(message) => {
                    state.push_log(LogLevel::Error, message.clone());
                    state.submit_error = Some(message);
                }
            }
        }
    }
}

/* ---------- lifecycle ---------- */

/// Post-success restart: back to step 1 with the candidate cascade cleared.
/// The job list was fetched once at wizard start and is kept.
pub fn reset(state: &mut WizardState) {
    cancel(&mut state.lookup_cancel);
    cancel(&mut state.submit_cancel);

    set_candidate(state, None);
    state.ui.email_input.clear();
    state.ui.job_cursor = 0;
    state.lookup_loading = false;
    state.lookup_error = None;
    state.step = Step::Lookup;
    state.push_log(LogLevel::Info, "Starting a new application.");
}

/// Cancels every outstanding request; called on exit.
pub fn cancel_all(state: &mut WizardState) {
    cancel(&mut state.jobs_cancel);
    cancel(&mut state.lookup_cancel);
    cancel(&mut state.submit_cancel);
}

fn cancel(slot: &mut Option<CancelToken>) {
    if let Some(token) = slot.take() {
        token.cancel();
    }
}

/// Takes the operation's token; true when the operation is still live.
fn take_live(slot: &mut Option<CancelToken>) -> bool {
    match slot.take() {
        Some(token) => !token.is_cancelled(),
        None => false,
    }
}

fn clear_submit_status(state: &mut WizardState) {
    state.submit_error = None;
    state.submit_success = false;
}
