//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render tags as `<span class="tag">` elements
///
/// # Examples
/// ```ignore
/// tag_spans(&["rust".into()]) // -> <span class="tag">rust</span>
/// ```
pub fn tag_spans(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect()
}

/// Generate a `<time>` element; `datetime` keeps the raw value
pub fn time_tag(raw: &str, display: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        html_escape(raw),
        html_escape(display)
    )
}
