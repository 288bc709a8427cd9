use crate::runtime::text_source::TextSource;
use crate::sources::common::{file_name_of, join_values, referenced_basename};
use rayon::prelude::*;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Maps a lower-cased document basename to the reference files naming it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

pub struct ReferenceScan {
    pub index: ReferenceIndex,
    /// Files that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// `<attribute>="<anything>.<extension>"`, case-insensitive.
pub fn reference_pattern(attribute: &str, extension: &str) -> Result<Regex, String> {
    let pattern = format!(
        r#"{}\s*=\s*"([^"]+\.{})""#,
        regex::escape(attribute),
        regex::escape(extension.trim_start_matches('.'))
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| format!("Invalid reference pattern {pattern}: {e}"))
}

/// Lower-cased basenames of every document referenced in `text`.
pub fn extract_document_references(text: &str, pattern: &Regex) -> BTreeSet<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| referenced_basename(m.as_str()).to_lowercase())
        .collect()
}

impl ReferenceIndex {
    pub fn build(
        files: &[PathBuf],
        source: &dyn TextSource,
        pattern: &Regex,
    ) -> ReferenceScan {
        let scanned = files
            .par_iter()
            .map(|path| {
                source
                    .read(path)
                    .map(|text| extract_document_references(&text, pattern))
            })
            .collect::<Vec<_>>();

        let mut index = ReferenceIndex::default();
        let mut skipped = Vec::new();
        for (path, result) in files.iter().zip(scanned) {
            match result {
                Ok(hits) => index.insert_hits(path, hits),
                Err(err) => skipped.push((path.clone(), err)),
            }
        }

        ReferenceScan { index, skipped }
    }

    fn insert_hits(&mut self, referencing_file: &Path, hits: BTreeSet<String>) {
        if hits.is_empty() {
            return;
        }
        let file_name = file_name_of(referencing_file);
        for hit in hits {
            self.entries
                .entry(hit)
                .or_default()
                .insert(file_name.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Referencing file names for a lower-cased document basename, sorted.
    pub fn lookup(&self, document_key: &str) -> Vec<&str> {
        self.entries
            .get(document_key)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn render(&self, document_key: &str) -> String {
        join_values(&self.lookup(document_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_basenames_case_insensitively() {
        let pattern = reference_pattern("Path", "uic").expect("pattern should compile");
        let text = r#"<Addin Path = "Forms\Main.UIC" /><Other path="x/Tools.uic"/><Skip Path="a.xml"/>"#;
        let hits = extract_document_references(text, &pattern);
        assert_eq!(
            hits.into_iter().collect::<Vec<_>>(),
            vec!["main.uic".to_string(), "tools.uic".to_string()]
        );
    }

    #[test]
    fn attribute_suffix_also_matches() {
        let pattern = reference_pattern("Path", "uic").expect("pattern should compile");
        let hits = extract_document_references(r#"<a ImagePath="menus.uic"/>"#, &pattern);
        assert!(hits.contains("menus.uic"));
    }
}
