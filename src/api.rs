// src/api.rs

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::state::{Candidate, Job};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of the application submission. Field order is part of the wire
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub uuid: String,
    pub job_id: String,
    pub candidate_id: String,
    pub repo_url: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self { http, base_url })
    }

    pub fn fetch_jobs(&self) -> Result<Vec<Job>, String> {
        let url = format!("{}/api/jobs/get-list", self.base_url);
        let resp = self.http.get(url).send().map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(read_error_response(resp));
        }

        resp.json::<Vec<Job>>().map_err(|e| e.to_string())
    }

    pub fn candidate_by_email(&self, email: &str) -> Result<Candidate, String> {
        let url = format!("{}/api/candidate/get-by-email", self.base_url);
        let resp = self
            .http
            .get(url)
            .query(&[("email", email)])
            .send()
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(read_error_response(resp));
        }

        resp.json::<Candidate>().map_err(|e| e.to_string())
    }

    /// A 2xx response signals acceptance; the body is ignored.
    pub fn apply_to_job(&self, request: &ApplyRequest) -> Result<(), String> {
        let url = format!("{}/api/candidate/apply-to-job", self.base_url);
        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            return Err(read_error_response(resp));
        }

        Ok(())
    }
}

fn read_error_response(resp: Response) -> String {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    match resp.text() {
        Ok(body) => read_error_message(status, &content_type, &body),
        Err(_) => status_text(status),
    }
}

/// Shared error-message extraction rule, identical for every endpoint.
///
/// JSON responses: a string payload is used verbatim; a payload with a
/// non-empty `message` (or `error`) field uses that field; anything else is
/// stringified whole. Unparseable JSON degrades to the HTTP status text.
/// Non-JSON responses fall back to the raw body, then the status text.
pub(crate) fn read_error_message(status: StatusCode, content_type: &str, body: &str) -> String {
    if content_type.contains("application/json") {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return status_text(status);
        };

        if let Value::String(message) = value {
            return message;
        }

        for key in ["message", "error"] {
            match value.get(key) {
                Some(Value::String(message)) => {
                    if !message.is_empty() {
                        return message.clone();
                    }
                }
                Some(Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }
        }

        return value.to_string();
    }

    if body.is_empty() {
        status_text(status)
    } else {
        body.to_string()
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = "application/json";

    #[test]
    fn json_message_field_is_used_verbatim() {
        let msg = read_error_message(
            StatusCode::BAD_REQUEST,
            JSON,
            r#"{"message":"bad input"}"#,
        );
        assert_eq!(msg, "bad input");
    }

    #[test]
    fn json_string_payload_is_used_verbatim() {
        let msg = read_error_message(StatusCode::BAD_REQUEST, JSON, r#""nope""#);
        assert_eq!(msg, "nope");
    }

    #[test]
    fn json_error_field_is_a_fallback_for_message() {
        let msg = read_error_message(
            StatusCode::NOT_FOUND,
            JSON,
            r#"{"error":"candidate not found"}"#,
        );
        assert_eq!(msg, "candidate not found");
    }

    #[test]
    fn json_without_known_fields_is_stringified_whole() {
        let msg = read_error_message(StatusCode::BAD_REQUEST, JSON, r#"{"code":42}"#);
        assert_eq!(msg, r#"{"code":42}"#);
    }

    #[test]
    fn unparseable_json_degrades_to_status_text() {
        let msg = read_error_message(StatusCode::BAD_GATEWAY, JSON, "{not json");
        assert_eq!(msg, "Bad Gateway");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let msg = read_error_message(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", "oops");
        assert_eq!(msg, "oops");
    }

    #[test]
    fn empty_body_degrades_to_status_text() {
        let msg = read_error_message(StatusCode::SERVICE_UNAVAILABLE, "text/plain", "");
        assert_eq!(msg, "Service Unavailable");
    }

    #[test]
    fn content_type_with_charset_still_counts_as_json() {
        let msg = read_error_message(
            StatusCode::BAD_REQUEST,
            "application/json; charset=utf-8",
            r#"{"message":"bad input"}"#,
        );
        assert_eq!(msg, "bad input");
    }

    #[test]
    fn apply_request_encodes_camel_case_in_contract_order() {
        let request = ApplyRequest {
            uuid: "u1".into(),
            job_id: "j1".into(),
            candidate_id: "c1".into(),
            repo_url: "https://github.com/x/y".into(),
        };

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"uuid":"u1","jobId":"j1","candidateId":"c1","repoUrl":"https://github.com/x/y"}"#
        );
    }

    #[test]
    fn candidate_decodes_camel_case_fields() {
        let candidate: Candidate = serde_json::from_str(
            r#"{
                "uuid": "u1",
                "candidateId": "c1",
                "applicationId": "a1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "a@b.com"
            }"#,
        )
        .unwrap();

        assert_eq!(candidate.uuid, "u1");
        assert_eq!(candidate.candidate_id, "c1");
        assert_eq!(candidate.application_id, "a1");
        assert_eq!(candidate.full_name(), "Ada Lovelace");
    }
}
