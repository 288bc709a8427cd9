use crate::types::{BlockAttributes, GroupKey, LineRecord};
use std::collections::BTreeMap;

/// Rank whose tag names the block it heads.
pub const KIND_TAG_RANK: usize = 2;

/// Tag holding the per-file namespace.
pub const NAMESPACE_TAG: &str = "Namespace";

/// Child tags whose value is hoisted onto every row of their block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignatedTag {
    Caption,
    Type,
    Key,
    Category,
    CommandBarDisplayStyle,
    FormKey,
}

impl DesignatedTag {
    pub const ALL: [DesignatedTag; 6] = [
        DesignatedTag::Caption,
        DesignatedTag::Type,
        DesignatedTag::Key,
        DesignatedTag::Category,
        DesignatedTag::CommandBarDisplayStyle,
        DesignatedTag::FormKey,
    ];

    pub fn tag_name(self) -> &'static str {
        match self {
            DesignatedTag::Caption => "Caption",
            DesignatedTag::Type => "Type",
            DesignatedTag::Key => "Key",
            DesignatedTag::Category => "Category",
            DesignatedTag::CommandBarDisplayStyle => "CommandBarDisplayStyle",
            DesignatedTag::FormKey => "FormKey",
        }
    }

    fn slot(self, attributes: &mut BlockAttributes) -> &mut String {
        match self {
            DesignatedTag::Caption => &mut attributes.caption,
            DesignatedTag::Type => &mut attributes.type_,
            DesignatedTag::Key => &mut attributes.key,
            DesignatedTag::Category => &mut attributes.category,
            DesignatedTag::CommandBarDisplayStyle => &mut attributes.command_bar_display_style,
            DesignatedTag::FormKey => &mut attributes.form_key,
        }
    }
}

/// Read-only view of a document's records grouped by block.
pub struct Blocks<'a> {
    records: &'a [LineRecord],
    members: BTreeMap<GroupKey, Vec<usize>>,
}

impl<'a> Blocks<'a> {
    pub fn new(records: &'a [LineRecord]) -> Self {
        let mut members: BTreeMap<GroupKey, Vec<usize>> = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            members.entry(record.group_key).or_default().push(position);
        }
        Self { records, members }
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.members.keys()
    }

    /// Members of a block, in file order.
    pub fn members(&self, key: &GroupKey) -> impl Iterator<Item = &'a LineRecord> + '_ {
        let records = self.records;
        self.members
            .get(key)
            .into_iter()
            .flatten()
            .map(move |&position| &records[position])
    }

    /// Tag name of the first member sitting at rank 2, or empty.
    pub fn kind_tag(&self, key: &GroupKey) -> &'a str {
        self.members(key)
            .find(|record| record.rank() == KIND_TAG_RANK)
            .map(|record| record.tag_name.as_str())
            .unwrap_or("")
    }

    /// Primary value of the first member tagged `name`, or empty.
    pub fn attribute(&self, key: &GroupKey, name: &str) -> &'a str {
        if name.is_empty() {
            return "";
        }
        first_value_for(self.members(key), name)
    }

    pub fn attributes(&self, key: &GroupKey) -> BlockAttributes {
        let control_type = self.kind_tag(key);
        let mut attributes = BlockAttributes {
            control_type: control_type.to_string(),
            name: self.attribute(key, control_type).to_string(),
            ..BlockAttributes::default()
        };

        for tag in DesignatedTag::ALL {
            *tag.slot(&mut attributes) = self.attribute(key, tag.tag_name()).to_string();
        }

        attributes
    }

    /// Block attributes resolved once per block.
    pub fn resolve_all(&self) -> BTreeMap<GroupKey, BlockAttributes> {
        self.keys()
            .map(|key| (*key, self.attributes(key)))
            .collect()
    }
}

/// Namespace of the whole file, looked up across every record.
pub fn namespace_of_file(records: &[LineRecord]) -> String {
    first_value_for(records.iter(), NAMESPACE_TAG).to_string()
}

fn first_value_for<'a>(mut records: impl Iterator<Item = &'a LineRecord>, name: &str) -> &'a str {
    records
        .find(|record| record.tag_name == name)
        .map(|record| record.primary_value())
        .unwrap_or("")
}
