//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Header between two `---` lines, then the rest of the file
    static ref FRONT_MATTER: Regex =
        Regex::new(r"^---\r?\n([\s\S]*?)\r?\n---\r?\n([\s\S]*)$").unwrap();
}

const BOM: char = '\u{FEFF}';

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    /// Only produced for the `tags` key written as `[...]`
    List(Vec<String>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::Text(_) => None,
            MetaValue::List(items) => Some(items),
        }
    }
}

/// Front-matter of a markdown post, in the order keys first appear
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    pub fields: IndexMap<String, MetaValue>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a well-formed header yields empty front-matter and
    /// the whole text as the body.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix(BOM).unwrap_or(content);

        let Some(caps) = FRONT_MATTER.captures(content) else {
            return (FrontMatter::default(), content);
        };
        let header = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mut fields = IndexMap::new();
        for line in header.lines() {
            let Some(colon) = line.find(':').filter(|&i| i > 0) else {
                continue;
            };
            let key = line[..colon].trim();
            let value = unquote(line[colon + 1..].trim());

            let value = if key == "tags" && value.starts_with('[') && value.ends_with(']') {
                MetaValue::List(parse_tag_list(value))
            } else {
                MetaValue::Text(value.to_string())
            };
            fields.insert(key.to_string(), value);
        }

        (FrontMatter { fields }, body)
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// Non-empty text value of a key
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(MetaValue::as_text)
            .filter(|s| !s.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.text("date")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    /// Tags, when the header declared them as a list
    pub fn tags(&self) -> Option<&[String]> {
        self.get("tags").and_then(MetaValue::as_list)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Strip one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character counts as both ends
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}

/// Parse `[...]` as a JSON array, falling back to a loose comma split
fn parse_tag_list(value: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<serde_json::Value>>(value) {
        Ok(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Err(_) => value[1..value.len() - 1]
            .split(',')
            .map(|tag| strip_one_quote(tag.trim()).to_string())
            .collect(),
    }
}

fn strip_one_quote(tag: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let tag = tag.strip_prefix(is_quote).unwrap_or(tag);
    tag.strip_suffix(is_quote).unwrap_or(tag)
}
