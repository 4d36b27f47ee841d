use super::*;

#[test]
fn default_config_matches_backend_routes() {
    let config = ClientConfig::default();
    assert_eq!(config.ws_path, "/ws/chat/");
    assert_eq!(config.post_endpoint, "http://localhost:8000/chat/");
    assert_eq!(config.session_key, "sessionId");
}

#[test]
fn websocket_url_uses_ws_for_plain_http() {
    let config = ClientConfig::default();
    assert_eq!(config.websocket_url("http:", "localhost:3000"), "ws://localhost:3000/ws/chat/");
}

#[test]
fn websocket_url_uses_wss_for_secure_origin() {
    let config = ClientConfig::default();
    assert_eq!(config.websocket_url("https:", "chat.example.com"), "wss://chat.example.com/ws/chat/");
}

#[test]
fn websocket_url_accepts_protocol_without_colon() {
    let config = ClientConfig::default();
    assert_eq!(config.websocket_url("https", "h"), "wss://h/ws/chat/");
}

#[test]
fn overrides_replace_defaults() {
    let config = ClientConfig::from_overrides(Some("agent/ws"), Some("https://api.example.com/chat/"));
    assert_eq!(config.ws_path, "/agent/ws/");
    assert_eq!(config.post_endpoint, "https://api.example.com/chat/");
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let config = ClientConfig::from_overrides(Some("   "), Some(""));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn normalize_ws_path_handles_root() {
    assert_eq!(normalize_ws_path("/"), "/");
    assert_eq!(normalize_ws_path("/ws/chat"), "/ws/chat/");
}
