use super::*;

#[test]
fn renders_paragraph_and_emphasis() {
    assert_eq!(render_markdown_html("hi *there*"), "<p>hi <em>there</em></p>\n");
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<th>a</th>"));
    assert!(html.contains("<td>2</td>"));
}

#[test]
fn renders_strikethrough() {
    assert!(render_markdown_html("~~gone~~").contains("<del>gone</del>"));
}

#[test]
fn renders_task_lists() {
    let html = render_markdown_html("- [x] done\n- [ ] todo\n");
    assert!(html.contains("checked"));
    assert!(html.contains("type=\"checkbox\""));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn drops_block_html() {
    let html = render_markdown_html("<div onclick=\"x()\">\nhidden\n</div>\n\nvisible");
    assert!(!html.contains("onclick"));
    assert!(html.contains("visible"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

// =============================================================
// Link and image destinations
// =============================================================

#[test]
fn drops_javascript_links() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie)) <javascript:alert(1)>");
    assert!(!html.contains("href=\"javascript:"), "{html}");
    assert_eq!(html.matches("href=\"#\"").count(), 2, "{html}");
    assert!(html.contains(">click</a>"));
}

#[test]
fn drops_mixed_case_script_scheme() {
    let html = render_markdown_html("[x](JaVaScRiPt:alert(1))");
    assert!(!html.to_ascii_lowercase().contains("href=\"javascript:"), "{html}");
}

#[test]
fn drops_data_image_source() {
    let html = render_markdown_html("![pic](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(html.contains("src=\"#\""), "{html}");
    assert!(!html.contains("data:"));
}

#[test]
fn keeps_web_mail_and_relative_links() {
    let html = render_markdown_html(
        "[a](https://example.com/x) [b](http://example.com) [c](mailto:me@example.com) [d](/docs?q=1) [e](#top)",
    );
    assert!(html.contains("href=\"https://example.com/x\""));
    assert!(html.contains("href=\"http://example.com\""));
    assert!(html.contains("href=\"mailto:me@example.com\""));
    assert!(html.contains("href=\"/docs?q=1\""));
    assert!(html.contains("href=\"#top\""));
}

#[test]
fn safe_url_ignores_whitespace_and_controls_in_scheme() {
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url(" \u{1}javascript:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
}

#[test]
fn safe_url_treats_colon_after_path_as_relative() {
    assert!(is_safe_url("docs/a:b"));
    assert!(is_safe_url("?next=javascript:x"));
    assert!(is_safe_url("plain"));
    assert!(is_safe_url("HTTPS://EXAMPLE.COM"));
}
