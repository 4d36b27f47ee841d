use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    assert_eq!(serde_json::to_string(&Role::Function).unwrap(), "\"function\"");
}

#[test]
fn role_preserves_unknown_values() {
    let role: Role = serde_json::from_str("\"tool\"").unwrap();
    assert_eq!(role, Role::Other("tool".to_owned()));
    assert_eq!(role.as_str(), "tool");
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"tool\"");
}

#[test]
fn role_is_case_sensitive() {
    let role: Role = serde_json::from_str("\"Assistant\"").unwrap();
    assert_eq!(role, Role::Other("Assistant".to_owned()));
}

// =============================================================
// ChatMessage
// =============================================================

#[test]
fn chat_message_decodes_minimal_payload() {
    let msg: ChatMessage = serde_json::from_str(r#"{"role":"assistant","content":"hi there"}"#).unwrap();
    assert_eq!(msg, ChatMessage::new(Role::Assistant, "hi there"));
    assert!(!msg.is_function_call);
}

#[test]
fn chat_message_decodes_function_call_payload() {
    let msg: ChatMessage = serde_json::from_str(
        r#"{"role":"assistant","content":null,"is_function_call":true,"func_name":"lookup","func_arguments":{"q":"x"}}"#,
    )
    .unwrap();
    assert!(msg.is_function_call);
    assert_eq!(msg.func_name.as_deref(), Some("lookup"));
    assert_eq!(msg.content, None);
    assert_eq!(msg.content_str(), "");
    assert_eq!(msg.func_arguments, Some(serde_json::json!({"q": "x"})));
}

#[test]
fn chat_message_ignores_unknown_fields() {
    let msg: ChatMessage =
        serde_json::from_str(r#"{"role":"user","content":"a","extra":42,"author":"User"}"#).unwrap();
    assert_eq!(msg.author.as_deref(), Some("User"));
    assert_eq!(msg.content_str(), "a");
}

#[test]
fn chat_message_requires_role() {
    assert!(serde_json::from_str::<ChatMessage>(r#"{"content":"a"}"#).is_err());
}

#[test]
fn chat_message_omits_absent_optionals() {
    let json = serde_json::to_value(ChatMessage::new(Role::User, "q")).unwrap();
    assert_eq!(json, serde_json::json!({"role": "user", "content": "q", "is_function_call": false}));
}

// =============================================================
// Request / response bodies
// =============================================================

#[test]
fn stream_request_serializes_expected_shape() {
    let req = StreamRequest { question: "hello".to_owned(), session_id: "abc".to_owned() };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"question":"hello","session_id":"abc"}"#);
}

#[test]
fn post_chat_response_decodes_responses() {
    let resp: PostChatResponse =
        serde_json::from_str(r#"{"responses":[{"role":"user","content":"q"},{"role":"assistant","content":"ok"}]}"#)
            .unwrap();
    assert_eq!(resp.responses.len(), 2);
    assert_eq!(resp.responses[1].role, Role::Assistant);
}
