//! Rich-text entry types.

use serde::{Deserialize, Serialize};

/// One entry in an item's rules text: either a plain line or a typed block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A plain text line
    Text(String),
    /// A structured content block
    Block(ContentBlock),
}

impl Entry {
    /// Convenience constructor for a text entry.
    pub fn text(s: impl Into<String>) -> Self {
        Entry::Text(s.into())
    }
}

/// A tagged rich-text block.
///
/// The catalog uses exactly six block kinds. The enum is closed on purpose:
/// an unrecognized `type` value is a defect in the source document and fails
/// at deserialization rather than being papered over at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Generic grouping of entries, optionally titled
    Entries {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        entries: Vec<Entry>,
    },

    /// Boxed aside with a title line between horizontal rules
    Inset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        entries: Vec<Entry>,
    },

    /// Bullet list of flat strings
    List {
        #[serde(default)]
        items: Vec<String>,
    },

    /// Titled subsection; nested `entries` blocks are promoted to headings
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        entries: Vec<Entry>,
    },

    /// Tabular data with a caption, column labels, and string-cell rows
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(rename = "colLabels", default)]
        col_labels: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },

    /// Block quotation
    Quote {
        #[serde(default)]
        entries: Vec<Entry>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_untagged_forms() {
        let e: Entry = serde_json::from_str(r#""plain line""#).unwrap();
        assert_eq!(e, Entry::text("plain line"));

        let e: Entry =
            serde_json::from_str(r#"{"type": "list", "items": ["a", "b"]}"#).unwrap();
        assert_eq!(
            e,
            Entry::Block(ContentBlock::List {
                items: vec!["a".to_string(), "b".to_string()]
            })
        );
    }

    #[test]
    fn test_nested_blocks() {
        let json = r#"{
            "type": "section",
            "name": "Keystone",
            "entries": [
                "intro",
                {"type": "entries", "name": "Inner", "entries": ["body"]}
            ]
        }"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Section { name, entries } => {
                assert_eq!(name.as_deref(), Some("Keystone"));
                assert_eq!(entries.len(), 2);
            }
            other => panic!("expected section, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<ContentBlock, _> =
            serde_json::from_str(r#"{"type": "sidebar", "entries": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_defaults() {
        let block: ContentBlock = serde_json::from_str(r#"{"type": "table"}"#).unwrap();
        match block {
            ContentBlock::Table {
                caption,
                col_labels,
                rows,
            } => {
                assert!(caption.is_none());
                assert!(col_labels.is_empty());
                assert!(rows.is_empty());
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
