//! API utilities for frontend-backend communication
//!
//! Resolves the base URL of the suggestion proxy and builds request URLs.

use leptos::prelude::*;

/// Base URL of the suggestion proxy, carried through Leptos context.
///
/// `App` provides this once; components read it with `use_context` instead
/// of reaching for process-wide globals.
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionsConfig {
    pub endpoint: String,
}

impl SuggestionsConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for SuggestionsConfig {
    /// Resolves the compile-time `CHAT_PROXY_ENDPOINT` override, falling
    /// back to a URL derived from the current window location.
    fn default() -> Self {
        match option_env!("CHAT_PROXY_ENDPOINT") {
            Some(endpoint) => Self::new(endpoint),
            None => Self::new(api_base()),
        }
    }
}

/// Read the configured proxy endpoint from context.
///
/// Falls back to `Default` when no `SuggestionsConfig` was provided, so a
/// component mounted outside `App` still resolves a usable base URL.
pub fn suggestion_endpoint() -> String {
    use_context::<SuggestionsConfig>()
        .unwrap_or_default()
        .endpoint
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_is_kept_verbatim() {
        let config = SuggestionsConfig::new("https://proxy.example.com");
        assert_eq!(config.endpoint, "https://proxy.example.com");
    }
}
