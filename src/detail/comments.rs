//! giscus comment widget embed

use crate::config::CommentsConfig;
use crate::helpers::html_escape;

/// Build the giscus `<script>` tag, or `None` when comments are off
pub fn giscus_script(config: &CommentsConfig) -> Option<String> {
    if !config.enable {
        return None;
    }

    for (name, value) in [
        ("repo", &config.repo),
        ("repo_id", &config.repo_id),
        ("category_id", &config.category_id),
    ] {
        if is_placeholder(value) {
            tracing::warn!("comments.{} is not set, the comment widget will not load", name);
        }
    }

    let flag = |on: bool| if on { "1" } else { "0" };
    let attrs = [
        ("data-repo", config.repo.as_str()),
        ("data-repo-id", config.repo_id.as_str()),
        ("data-category", config.category.as_str()),
        ("data-category-id", config.category_id.as_str()),
        ("data-mapping", config.mapping.as_str()),
        ("data-strict", flag(config.strict)),
        ("data-reactions-enabled", flag(config.reactions_enabled)),
        ("data-emit-metadata", flag(config.emit_metadata)),
        ("data-input-position", config.input_position.as_str()),
        ("data-theme", config.theme.as_str()),
        ("data-lang", config.lang.as_str()),
        ("data-loading", config.loading.as_str()),
    ];

    let mut html = format!(r#"<script src="{}""#, html_escape(&config.script));
    for (name, value) in attrs {
        html.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
    }
    html.push_str(r#" crossorigin="anonymous" async></script>"#);
    Some(html)
}

fn is_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value.starts_with("YOUR_")
}
