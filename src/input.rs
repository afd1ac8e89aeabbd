// src/input.rs

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{PendingAction, Step, WizardState};
use crate::wizard;

/// Key dispatch. Pure transitions (navigation, job selection, restart) are
/// applied directly; actions that reach the network only raise a pending
/// flag the main loop acts on.
pub fn handle_event(state: &mut WizardState, event: Event) {
    if let Event::Key(key) = event {
        if key.kind != KeyEventKind::Press {
            return;
        }
        handle_key(state, key);
    }
}

fn handle_key(state: &mut WizardState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.ui.should_exit = true;
            return;
        }
        KeyCode::Left => {
            wizard::go_previous(state);
            return;
        }
        KeyCode::Right => {
            wizard::go_next(state);
            return;
        }
        _ => {}
    }

    match state.step {
        Step::Lookup => handle_lookup_key(state, key),
        Step::Jobs => handle_jobs_key(state, key),
        Step::Repo => handle_repo_key(state, key),
        Step::Review => handle_review_key(state, key),
    }
}

fn handle_lookup_key(state: &mut WizardState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.push_char(c);
        }
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => {
            if state.ui.pending_action.is_none() {
                state.ui.pending_action = Some(PendingAction::Lookup);
            }
        }
        _ => {}
    }
}

fn handle_jobs_key(state: &mut WizardState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            state.ui.job_cursor = state.ui.job_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if state.ui.job_cursor + 1 < state.jobs.len() {
                state.ui.job_cursor += 1;
            }
        }
        KeyCode::Enter => {
            // selection is blocked until a candidate exists, matching the
            // inline hint; the controller guard no-ops independently
            if state.candidate.is_none() {
                return;
            }
            if let Some(job) = state.jobs.get(state.ui.job_cursor).cloned() {
                wizard::select_job(state, job);
            }
        }
        _ => {}
    }
}

fn handle_repo_key(state: &mut WizardState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.push_char(c);
        }
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => wizard::go_next(state),
        _ => {}
    }
}

fn handle_review_key(state: &mut WizardState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if state.ui.pending_action.is_none() {
                state.ui.pending_action = Some(PendingAction::Submit);
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if state.submit_success {
                wizard::reset(state);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Candidate, Job};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn candidate() -> Candidate {
        Candidate {
            uuid: "u1".into(),
            candidate_id: "c1".into(),
            application_id: "a1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "a@b.com".into(),
        }
    }

    fn jobs() -> Vec<Job> {
        vec![
            Job {
                id: "j1".into(),
                title: "Engineer".into(),
            },
            Job {
                id: "j2".into(),
                title: "Designer".into(),
            },
        ]
    }

    #[test]
    fn esc_requests_exit() {
        let mut state = WizardState::new();
        handle_event(&mut state, key(KeyCode::Esc));
        assert!(state.ui.should_exit);
    }

    #[test]
    fn typing_an_email_then_enter_queues_a_lookup() {
        let mut state = WizardState::new();
        for c in "a@b.com".chars() {
            handle_event(&mut state, key(KeyCode::Char(c)));
        }
        handle_event(&mut state, key(KeyCode::Enter));

        assert_eq!(state.ui.email_input, "a@b.com");
        assert_eq!(state.ui.pending_action, Some(PendingAction::Lookup));
    }

    #[test]
    fn job_cursor_clamps_to_the_list() {
        let mut state = WizardState::new();
        state.candidate = Some(candidate());
        state.jobs = jobs();
        state.step = Step::Jobs;

        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.ui.job_cursor, 0);

        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.ui.job_cursor, 1);
    }

    #[test]
    fn enter_on_jobs_without_candidate_is_blocked() {
        let mut state = WizardState::new();
        state.jobs = jobs();
        state.step = Step::Jobs;

        handle_event(&mut state, key(KeyCode::Enter));

        assert!(state.selected_job.is_none());
        assert_eq!(state.step, Step::Jobs);
    }

    #[test]
    fn enter_on_jobs_selects_the_job_under_the_cursor() {
        let mut state = WizardState::new();
        state.candidate = Some(candidate());
        state.jobs = jobs();
        state.step = Step::Jobs;

        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Enter));

        assert_eq!(state.selected_job.as_ref().map(|j| j.id.as_str()), Some("j2"));
        assert_eq!(state.step, Step::Repo);
    }

    #[test]
    fn arrow_navigation_respects_the_advance_gate() {
        let mut state = WizardState::new();
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.step, Step::Lookup);

        state.candidate = Some(candidate());
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.step, Step::Jobs);

        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.step, Step::Lookup);
    }

    #[test]
    fn enter_on_review_queues_a_submission() {
        let mut state = WizardState::new();
        state.step = Step::Review;

        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.ui.pending_action, Some(PendingAction::Submit));
    }

    #[test]
    fn restart_key_only_acts_after_success() {
        let mut state = WizardState::new();
        state.step = Step::Review;

        handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.step, Step::Review);

        state.submit_success = true;
        handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.step, Step::Lookup);
        assert!(!state.submit_success);
    }
}
