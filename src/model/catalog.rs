//! Catalog document types.
//!
//! These mirror the shape of the external item-catalog JSON: a document with
//! optional `baseitem` and `item` arrays, each entry carrying a name, trade
//! attributes, classifier codes, and a tree of rich-text entries.

use super::Entry;
use serde::{Deserialize, Serialize};

/// The top-level catalog document.
///
/// Both arrays are optional; [`CatalogDocument::all_items`] concatenates them
/// (base items first) into the single working sequence the pipeline consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Base (mundane) items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseitem: Option<Vec<CatalogItem>>,

    /// Items (usually magic or named variants)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<CatalogItem>>,
}

impl CatalogDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of items across both arrays.
    pub fn item_count(&self) -> usize {
        self.baseitem.as_deref().map_or(0, |v| v.len())
            + self.item.as_deref().map_or(0, |v| v.len())
    }

    /// Check if the document has no items.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Iterate over all items in processing order: `baseitem` then `item`.
    pub fn all_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.baseitem
            .iter()
            .flatten()
            .chain(self.item.iter().flatten())
    }
}

/// A single catalog entry.
///
/// Only `name` and `entries` are mandatory; everything else is attribute
/// data that may or may not be present depending on the item kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Item name
    pub name: String,

    /// Source book abbreviation (e.g. "XPHB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Page number in the source book
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Attunement requirement: `true`, or a free-text condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_attune: Option<Attunement>,

    /// Weight in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Item-type classifier code (e.g. "M|XPHB")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,

    /// Armor class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac: Option<u32>,

    /// Ammunition type identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo_type: Option<String>,

    /// Primary damage dice (e.g. "1d8")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmg1: Option<String>,

    /// Secondary (versatile) damage dice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmg2: Option<String>,

    /// Damage-type classifier code (e.g. "S")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmg_type: Option<String>,

    /// Weapon mastery names, listed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastery: Option<Vec<String>>,

    /// Weapon/armor property classifier codes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<Vec<String>>,

    /// Range (e.g. "30/120")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Reload count for firearms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<u32>,

    /// Rich-text rules entries
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl CatalogItem {
    /// Create a minimal item with a name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            page: None,
            req_attune: None,
            weight: None,
            value: None,
            type_code: None,
            ac: None,
            ammo_type: None,
            dmg1: None,
            dmg2: None,
            dmg_type: None,
            mastery: None,
            property: None,
            range: None,
            reload: None,
            entries: Vec::new(),
        }
    }
}

/// Attunement requirement for an item.
///
/// The catalog encodes this as either the boolean `true` or a free-text
/// condition like `"by a spellcaster"`. Absence suppresses the attunement
/// line in the rendered description entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attunement {
    /// Plain attunement requirement (`"reqAttune": true`)
    Required(bool),
    /// Conditional requirement (`"reqAttune": "by a cleric"`)
    Conditional(String),
}
