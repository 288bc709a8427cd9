use crate::runtime::text_source::TextSource;
use crate::sources::common::{directory_of, file_name_of};
use crate::sources::uic::blocks::{namespace_of_file, Blocks};
use crate::sources::uic::outline::{count_leading_whitespace, OutlineCounters};
use crate::sources::uic::parser::classify_line;
use crate::types::{LineRecord, UicDocument};
use std::path::Path;

/// Classifies and addresses every line of one document.
///
/// Indentation is measured on the line with its `\n` still attached, so a
/// blank line counts 1 and `"    \n"` counts 5. Both are odd and leave the
/// counters untouched.
pub fn parse_document(text: &str) -> Vec<LineRecord> {
    let mut counters = OutlineCounters::new();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    text.split_inclusive('\n')
        .enumerate()
        .map(|(position, line)| {
            let leading_space_count = count_leading_whitespace(line);
            let raw = line.strip_suffix('\n').unwrap_or(line);
            let classified = classify_line(raw);
            let address = counters.encode(leading_space_count);
            LineRecord {
                index: position + 1,
                raw: raw.to_string(),
                leading_space_count,
                tag_kind: classified.tag_kind,
                tag_name: classified.tag_name,
                content: classified.content,
                extended_content: classified.extended_content,
                group_key: address.group_key(),
                address,
            }
        })
        .collect()
}

/// Builds the enriched document for already-read text.
pub fn build_document(path: &Path, text: &str) -> UicDocument {
    let records = parse_document(text);
    let blocks = Blocks::new(&records);
    let resolved = blocks.resolve_all();

    let attributes = records
        .iter()
        .map(|record| resolved.get(&record.group_key).cloned().unwrap_or_default())
        .collect();
    let namespace = namespace_of_file(&records);

    UicDocument {
        path: path.to_path_buf(),
        file_name: file_name_of(path),
        directory: directory_of(path),
        namespace,
        records,
        attributes,
    }
}

/// Reads and processes one document. Read failures are returned to the
/// caller, which skips the file.
pub fn process_document(source: &dyn TextSource, path: &Path) -> Result<UicDocument, String> {
    let text = source.read(path)?;
    let document = build_document(path, &text);
    tracing::debug!(
        "[Uic] {}: {} lines",
        document.file_name,
        document.records.len()
    );
    Ok(document)
}
