//! fetch.rs
//!
//! One-shot request workers.
//!
//! Every remote call runs on its own thread and reports back over the
//! shared `mpsc` channel drained by the main loop. Each worker carries a
//! `CancelToken`; a cancelled worker drops its result instead of sending
//! it, and the event-application path checks the token again before
//! touching state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{ApiClient, ApplyRequest};
use crate::state::{Candidate, Job};

#[derive(Debug)]
pub enum FetchEvent {
    Jobs(Result<Vec<Job>, String>),
    Candidate(Result<Candidate, String>),
    Submitted(Result<(), String>),
}

#[derive(Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub fn spawn_jobs_fetch(api: ApiClient, tx: Sender<FetchEvent>, cancel: CancelToken) {
    thread::spawn(move || {
        let result = api.fetch_jobs();
        if cancel.is_cancelled() {
            return;
        }
        let _ = tx.send(FetchEvent::Jobs(result));
    });
}

pub fn spawn_candidate_lookup(
    api: ApiClient,
    email: String,
    tx: Sender<FetchEvent>,
    cancel: CancelToken,
) {
    thread::spawn(move || {
        let result = api.candidate_by_email(&email);
        if cancel.is_cancelled() {
            return;
        }
        let _ = tx.send(FetchEvent::Candidate(result));
    });
}

pub fn spawn_submit(
    api: ApiClient,
    request: ApplyRequest,
    tx: Sender<FetchEvent>,
    cancel: CancelToken,
) {
    thread::spawn(move || {
        let result = api.apply_to_job(&request);
        if cancel.is_cancelled() {
            return;
        }
        let _ = tx.send(FetchEvent::Submitted(result));
    });
}
