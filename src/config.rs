//! Endpoint configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled:
//! - `AGENT_CHAT_WS_PATH`: socket path on the page origin (default `/ws/chat/`)
//! - `AGENT_CHAT_POST_ENDPOINT`: absolute URL for the request/response variant
//!   (default `http://localhost:8000/chat/`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WS_PATH: &str = "/ws/chat/";
pub const DEFAULT_POST_ENDPOINT: &str = "http://localhost:8000/chat/";
pub const SESSION_STORAGE_KEY: &str = "sessionId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub ws_path: String,
    pub post_endpoint: String,
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ws_path: DEFAULT_WS_PATH.to_owned(),
            post_endpoint: DEFAULT_POST_ENDPOINT.to_owned(),
            session_key: SESSION_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time overrides, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("AGENT_CHAT_WS_PATH"), option_env!("AGENT_CHAT_POST_ENDPOINT"))
    }

    fn from_overrides(ws_path: Option<&str>, post_endpoint: Option<&str>) -> Self {
        let defaults = Self::default();
        let ws_path = ws_path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map_or(defaults.ws_path, normalize_ws_path);
        let post_endpoint = post_endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map_or(defaults.post_endpoint, ToOwned::to_owned);
        Self { ws_path, post_endpoint, session_key: defaults.session_key }
    }

    /// Socket URL on the page's own origin; `wss` when the page is `https:`.
    pub fn websocket_url(&self, page_protocol: &str, host: &str) -> String {
        let scheme = if page_protocol.trim_end_matches(':') == "https" { "wss" } else { "ws" };
        format!("{scheme}://{host}{}", self.ws_path)
    }
}

fn normalize_ws_path(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    format!("/{trimmed}/")
}
