//! HTTP client for the Q&A backend.
//!
//! One async function per remote operation; every call is a single attempt
//! with no retry. Failures are returned to the caller, which decides whether
//! they are user-visible (submission) or log-only (secondary flows).

use crate::state::GENERIC_SUBMIT_ERROR;
use crate::types::{ExampleSet, HistoryCleared, HistoryItem, QueryResponse};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Structured failure from the service: non-2xx status with a `detail`
    /// payload (or the generic fallback when the payload is unusable).
    #[error("{0}")]
    Service(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Ask a question. The caller is expected to pass an already-trimmed,
/// non-empty question; the service enforces the 1..=500 length bound again.
pub async fn submit_question(base_url: &str, question: &str) -> ApiResult<QueryResponse> {
    #[derive(Serialize)]
    struct QueryRequest<'a> {
        question: &'a str,
    }

    let res = HTTP
        .post(format!("{base_url}/api/query"))
        .json(&QueryRequest { question })
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(ApiError::Service(error_message(&body)))
    }
}

pub async fn fetch_examples(base_url: &str) -> ApiResult<ExampleSet> {
    let res = HTTP
        .get(format!("{base_url}/api/examples"))
        .send()
        .await?
        .error_for_status()?;
    Ok(res.json::<ExampleSet>().await?)
}

pub async fn fetch_history(base_url: &str) -> ApiResult<Vec<HistoryItem>> {
    #[derive(Deserialize)]
    struct HistoryEnvelope {
        history: Vec<HistoryItem>,
    }

    let res = HTTP
        .get(format!("{base_url}/api/history"))
        .send()
        .await?
        .error_for_status()?;
    Ok(res.json::<HistoryEnvelope>().await?.history)
}

/// Clear the server-held history.
///
/// Succeeds once the request settles at the transport level, mirroring the
/// service contract where any settled DELETE counts as cleared. The
/// acknowledgement body is parsed opportunistically for the confirmation
/// notice and ignored when absent or unrecognized.
pub async fn clear_history(base_url: &str) -> ApiResult<Option<HistoryCleared>> {
    let res = HTTP
        .delete(format!("{base_url}/api/history"))
        .send()
        .await?;
    let body = res.text().await?;
    Ok(serde_json::from_str(&body).ok())
}

/// Pull the user-facing message out of a non-2xx body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        detail: String,
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.detail.trim().is_empty() => envelope.detail,
        _ => GENERIC_SUBMIT_ERROR.to_string(),
    }
}
