use crate::sources::command::token_index::{CommandMatch, TokenIndex};
use crate::sources::common::{dedupe_preserving_order, join_values, normalize_token};
use crate::sources::uic::discover::document_key;
use crate::sources::xml::cross_references::ReferenceIndex;
use crate::types::{EnrichedRow, UicDocument};

/// Joins denormalized rows against the frozen indices.
pub struct Resolver<'a> {
    pub tokens: &'a TokenIndex,
    /// One index per configured root, in root order.
    pub references: &'a [ReferenceIndex],
}

impl<'a> Resolver<'a> {
    pub fn new(tokens: &'a TokenIndex, references: &'a [ReferenceIndex]) -> Self {
        Self { tokens, references }
    }

    /// Command files matching a row's name then key, first-seen order, as
    /// parallel `(files, paths)` lists.
    pub fn command_matches(&self, name: &str, key: &str) -> (String, String) {
        let found = [name, key]
            .into_iter()
            .filter_map(normalize_token)
            .flat_map(|token| self.tokens.lookup(&token).to_vec())
            .collect::<Vec<CommandMatch>>();
        let found = dedupe_preserving_order(found);

        let files = found
            .iter()
            .map(|m| m.file_name.as_str())
            .collect::<Vec<_>>();
        let paths = found
            .iter()
            .map(|m| m.directory.as_str())
            .collect::<Vec<_>>();
        (join_values(&files), join_values(&paths))
    }

    pub fn references_for(&self, document: &UicDocument) -> Vec<String> {
        let key = document_key(&document.path);
        self.references
            .iter()
            .map(|index| index.render(&key))
            .collect()
    }

    /// One row per line; `block_ordinal` is left at zero for [`assign_block_ordinals`].
    pub fn resolve_document(&self, document: &UicDocument) -> Vec<EnrichedRow> {
        let references = self.references_for(document);

        document
            .records
            .iter()
            .zip(&document.attributes)
            .map(|(record, block)| {
                let (command_files, command_paths) = self.command_matches(&block.name, &block.key);
                EnrichedRow {
                    group_key: record.group_key.to_string(),
                    block_ordinal: 0,
                    references: references.clone(),
                    file_name: document.file_name.clone(),
                    namespace: document.namespace.clone(),
                    directory: document.directory.clone(),
                    block: block.clone(),
                    tag_name: record.tag_name.clone(),
                    primary_value: record.primary_value().to_string(),
                    rank: record.rank(),
                    tag_kind: record.tag_kind,
                    command_files,
                    command_paths,
                    code: record.code(),
                    index: record.index,
                    leading_space_count: record.leading_space_count,
                    raw_line: record.raw.clone(),
                    stripped_line: record.stripped().to_string(),
                    content: record.content.clone(),
                    extended_content: record.extended_content.clone(),
                }
            })
            .collect()
    }
}

/// Tokens from every row's name and key, in first-seen order.
pub fn collect_tokens(documents: &[UicDocument]) -> Vec<String> {
    let tokens = documents
        .iter()
        .flat_map(|document| &document.attributes)
        .flat_map(|block| [block.name.as_str(), block.key.as_str()])
        .filter_map(normalize_token);
    dedupe_preserving_order(tokens)
}

/// Numbers runs of consecutive rows sharing a group key, starting at 1.
pub fn assign_block_ordinals(rows: &mut [EnrichedRow]) {
    let mut ordinal = 0;
    let mut previous: Option<String> = None;
    for row in rows.iter_mut() {
        if previous.as_deref() != Some(row.group_key.as_str()) {
            ordinal += 1;
            previous = Some(row.group_key.clone());
        }
        row.block_ordinal = ordinal;
    }
}
