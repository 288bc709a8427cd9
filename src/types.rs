use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Number of indentation buckets (0, 2, ..., 40 leading spaces).
pub const BUCKET_COUNT: usize = 21;

/// Width of one indentation step, in leading whitespace characters.
pub const BUCKET_STEP: usize = 2;

/// Number of leading address components that identify a block.
pub const GROUP_KEY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Declaration,
    ClosingTag,
    SelfClosingTag,
    OpeningTagWithAttributes,
    OpeningTag,
    Text,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Declaration => "declaration",
            TagKind::ClosingTag => "closing_tag",
            TagKind::SelfClosingTag => "self_closing_tag",
            TagKind::OpeningTagWithAttributes => "opening_tag_with_attributes",
            TagKind::OpeningTag => "opening_tag",
            TagKind::Text => "text",
        }
    }
}

/// Per-bucket outline counters captured for one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address {
    pub ranks: [u32; BUCKET_COUNT],
}

impl Address {
    pub fn group_key(&self) -> GroupKey {
        let mut key = [0u32; GROUP_KEY_LEN];
        key.copy_from_slice(&self.ranks[..GROUP_KEY_LEN]);
        GroupKey(key)
    }

    /// Dotted code `{index}.{a0}.{a1}...{a20}`.
    pub fn dotted(&self, index: usize) -> String {
        let mut code = index.to_string();
        for rank in &self.ranks {
            code.push('.');
            code.push_str(&rank.to_string());
        }
        code
    }
}

/// First three address components; identifies the enclosing block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey(pub [u32; GROUP_KEY_LEN]);

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a0, a1, a2] = self.0;
        write!(f, "{a0}.{a1}.{a2}")
    }
}

/// One line of a UIC document, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// 1-based line number.
    pub index: usize,
    /// The line without its terminator.
    pub raw: String,
    pub leading_space_count: usize,
    pub tag_kind: TagKind,
    pub tag_name: String,
    pub content: String,
    pub extended_content: Vec<String>,
    pub address: Address,
    pub group_key: GroupKey,
}

impl LineRecord {
    pub fn stripped(&self) -> &str {
        self.raw.trim_start()
    }

    /// Rank at the line's own indentation depth.
    pub fn rank(&self) -> usize {
        self.leading_space_count / BUCKET_STEP
    }

    pub fn code(&self) -> String {
        self.address.dotted(self.index)
    }

    /// First extended value, or the whole content when there is none.
    pub fn primary_value(&self) -> &str {
        self.extended_content
            .first()
            .map(String::as_str)
            .unwrap_or(self.content.as_str())
    }
}

/// Attribute values hoisted onto every row of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAttributes {
    /// Tag name of the block's rank-2 head line.
    pub control_type: String,
    /// Value carried by the head line's tag.
    pub name: String,
    pub caption: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub key: String,
    pub category: String,
    pub command_bar_display_style: String,
    pub form_key: String,
}

/// An addressed and enriched UIC document, before cross-reference resolution.
#[derive(Debug, Clone)]
pub struct UicDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub directory: String,
    pub namespace: String,
    pub records: Vec<LineRecord>,
    /// Parallel to `records`.
    pub attributes: Vec<BlockAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub group_key: String,
    pub block_ordinal: usize,
    /// Referencing files, one rendered list per configured root.
    pub references: Vec<String>,
    pub file_name: String,
    pub namespace: String,
    pub directory: String,
    #[serde(flatten)]
    pub block: BlockAttributes,
    pub tag_name: String,
    pub primary_value: String,
    pub rank: usize,
    pub tag_kind: TagKind,
    pub command_files: String,
    pub command_paths: String,
    pub code: String,
    pub index: usize,
    pub leading_space_count: usize,
    pub raw_line: String,
    pub stripped_line: String,
    pub content: String,
    pub extended_content: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    UnreadableFile,
    EmptyCorpus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub path: Option<PathBuf>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub documents_found: usize,
    pub documents_processed: usize,
    pub rows: usize,
    /// Number of keys in each reference index, in root order.
    pub reference_keys: Vec<usize>,
    pub command_files: usize,
    pub tokens: usize,
    pub matched_tokens: usize,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone)]
pub struct IngestOutput {
    pub rows: Vec<EnrichedRow>,
    pub summary: RunSummary,
}
