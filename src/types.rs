use serde::Deserialize;

/// One answered question, as returned by `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub question: String,
    pub answer: String,
    /// ISO-8601 string as emitted by the service (naive or RFC 3339).
    pub timestamp: String,
    pub ai_model_used: String,
    pub response_time_ms: u64,
}

/// A past query as retained by the service; `QueryResponse` plus a stable id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub timestamp: String,
    pub ai_model_used: String,
    pub response_time_ms: u64,
}

/// Example questions from `GET /api/examples`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExampleSet {
    pub examples: Vec<String>,
    #[serde(default)]
    pub usage_tip: Option<String>,
}

/// Acknowledgement body of `DELETE /api/history`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryCleared {
    pub message: String,
    pub cleared_count: u64,
}
