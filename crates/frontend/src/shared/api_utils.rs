//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override for the backend base URL (set by the build environment).
const API_URL_OVERRIDE: Option<&str> = option_env!("SCHOLARSIGHT_API_URL");

/// Default backend address when no override is supplied.
const API_URL_DEFAULT: &str = "http://localhost:5000";

/// Get the base URL for API requests
///
/// Taken from the `SCHOLARSIGHT_API_URL` environment variable at build time,
/// falling back to the local development address. A trailing slash is stripped
/// so paths can always start with "/".
pub fn api_base() -> String {
    let base = API_URL_OVERRIDE.unwrap_or(API_URL_DEFAULT);
    base.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/query");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(api_url("/api/upload"), format!("{}/api/upload", api_base()));
    }
}
