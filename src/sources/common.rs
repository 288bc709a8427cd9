use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

/// Separator for every rendered list column.
pub const LIST_SEPARATOR: &str = " | ";

pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Drops repeated items, keeping the first occurrence of each.
pub fn dedupe_preserving_order<T: Clone + Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Lower-cased, trimmed search token; `None` for values that must never match.
pub fn normalize_token(value: &str) -> Option<String> {
    let token = value.trim().to_lowercase();
    if token.is_empty() || token == "nan" {
        None
    } else {
        Some(token)
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn directory_of(path: &Path) -> String {
    path.parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Basename of a path written inside a document, accepting either separator.
pub fn referenced_basename(value: &str) -> &str {
    value.rsplit(['/', '\\']).next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_seen_order() {
        let deduped = dedupe_preserving_order(vec!["b", "a", "b", "c", "a"]);
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }

    #[test]
    fn normalize_rejects_blank_and_nan() {
        assert_eq!(normalize_token("  Foo "), Some("foo".to_string()));
        assert_eq!(normalize_token("   "), None);
        assert_eq!(normalize_token("NaN"), None);
    }

    #[test]
    fn referenced_basename_handles_both_separators() {
        assert_eq!(referenced_basename(r"forms\sub/Main.uic"), "Main.uic");
        assert_eq!(referenced_basename(r"C:\x\Tools.uic"), "Tools.uic");
        assert_eq!(referenced_basename("Plain.uic"), "Plain.uic");
    }

    #[test]
    fn join_uses_pipe_separator() {
        assert_eq!(join_values(&["a.xml", "b.xml"]), "a.xml | b.xml");
        assert_eq!(join_values::<&str>(&[]), "");
    }
}
