//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::client_config;

/// Get the base URL for API requests
///
/// Empty by default: the catalogue API is served from the same origin as the
/// page. Set `[api] base_url` in the client config to point elsewhere.
pub fn api_base() -> String {
    client_config()
        .api
        .base_url
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/catalogues/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/catalogues"), "/api/catalogues");
        assert_eq!(
            join_url("http://localhost:5000", "api/catalogues"),
            "http://localhost:5000/api/catalogues"
        );
    }
}
