/// API base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:1001";

/// Normalize the public base URL that client scripts fetch assets from.
///
/// Empty input falls back to [`DEFAULT_API_URL`]; input without a scheme is
/// assumed to be served over https. A trailing slash is dropped.
pub fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
