use std::env;

/// Local development backend, matching the service's default bind address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the Q&A backend.
///
/// Reads `VIONGOZI_API_URL` at call time so a `.env` or bundled config loaded
/// at startup is honored; falls back to the local development URL.
pub fn api_base_url() -> String {
    let url = env::var("VIONGOZI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}
