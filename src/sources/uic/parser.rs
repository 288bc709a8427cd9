use crate::types::TagKind;
use regex::Regex;
use std::sync::LazyLock;

static TAG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<\??/?([a-zA-Z0-9:_-]+)").expect("TAG_NAME_RE should compile")
});

static INNER_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<.*?>(.*?)</.*?>").expect("INNER_TEXT_RE should compile"));

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z0-9:_-]+)="(.*?)""#).expect("ATTRIBUTE_RE should compile")
});

static QUOTED_ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"=\s*""#).expect("QUOTED_ASSIGNMENT_RE should compile"));

/// Separator used when rendering `key=value` pairs into a line's content.
pub const ATTRIBUTE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub tag_kind: TagKind,
    pub tag_name: String,
    pub content: String,
    pub extended_content: Vec<String>,
}

/// Classifies one line. Leading whitespace is ignored; a line matching no
/// structural pattern comes back as `Text`.
pub fn classify_line(line: &str) -> ClassifiedLine {
    let stripped = line.trim_start();
    let content = extract_content(stripped);
    let extended_content = extract_extended_content(&content);
    ClassifiedLine {
        tag_kind: detect_tag_kind(stripped),
        tag_name: extract_tag_name(stripped),
        content,
        extended_content,
    }
}

pub fn detect_tag_kind(line: &str) -> TagKind {
    let line = line.trim();
    if line.starts_with("<?xml") {
        TagKind::Declaration
    } else if line.starts_with("</") {
        TagKind::ClosingTag
    } else if line.contains("/>") {
        TagKind::SelfClosingTag
    } else if line.contains('=') && line.contains('<') && line.contains('>') {
        TagKind::OpeningTagWithAttributes
    } else if line.starts_with('<') && line.contains('>') {
        TagKind::OpeningTag
    } else {
        TagKind::Text
    }
}

pub fn extract_tag_name(line: &str) -> String {
    TAG_NAME_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Inner text of `<a>...</a>`, else every `key="value"` pair as `key=value`.
pub fn extract_content(line: &str) -> String {
    if let Some(inner) = INNER_TEXT_RE.captures(line).and_then(|caps| caps.get(1)) {
        return inner.as_str().trim().to_string();
    }

    let pairs = ATTRIBUTE_RE
        .captures_iter(line)
        .map(|caps| format!("{}={}", &caps[1], &caps[2]))
        .collect::<Vec<_>>();
    pairs.join(ATTRIBUTE_SEPARATOR)
}

/// Bare values of an unquoted `key=value, key=value` content string.
pub fn extract_extended_content(content: &str) -> Vec<String> {
    if !content.contains('=') || QUOTED_ASSIGNMENT_RE.is_match(content) {
        return Vec::new();
    }

    let values = content
        .split(ATTRIBUTE_SEPARATOR)
        .filter_map(|part| part.split_once('=').map(|(_, value)| value.to_string()))
        .collect::<Vec<_>>();

    if values.is_empty() {
        vec![String::new()]
    } else {
        values
    }
}
