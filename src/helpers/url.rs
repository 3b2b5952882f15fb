//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a single URL component
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Link from the list page to a post's detail page
///
/// # Examples
/// ```ignore
/// post_url("post.html", "hello world.md") // -> "post.html?file=hello%20world.md"
/// ```
pub fn post_url(post_page: &str, file: &str) -> String {
    format!("{}?file={}", post_page, encode_component(file))
}

/// Read a query parameter from a URL or a bare query string
///
/// Empty values count as missing.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let query = match url.split_once('?') {
        Some((_, query)) => query,
        None => url,
    };
    let query = query.split('#').next().unwrap_or("");

    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_form(key) == name).then(|| decode_form(value))
        })
        .next()
        .filter(|value| !value.is_empty())
}

/// The `file` parameter of a detail page URL
pub fn file_param(url: &str) -> Option<String> {
    query_param(url, "file")
}

fn decode_form(s: &str) -> String {
    percent_decode_str(&s.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
