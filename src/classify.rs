//! Classifier tables: short catalog codes to human-readable categories.
//!
//! Three disjoint static tables cover item types, damage types, and
//! weapon/armor properties. All of them share one lookup policy: resolve
//! the code, and on a miss report a diagnostic and fall back to `"Other"`.
//! A miss is never fatal.

use std::collections::HashMap;

use crate::sink::DiagnosticSink;

/// Category returned for any code the tables do not know.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Key used when an item carries no code at all.
const ABSENT_KEY: &str = "undefined";

/// Item-type codes, keyed by compound code (`"M|XPHB"`) or bare code (`"M"`).
const ITEM_TYPES: &[(&str, &str)] = &[
    ("undefined", "Other"),
    ("$A|DMG", "Treasure (art object)"),
    ("$A|XDMG", "Treasure (art object)"),
    ("$C", "Treasure (coinage)"),
    ("$G|DMG", "Treasure (gemstone)"),
    ("$G|XDMG", "Treasure (gemstone)"),
    ("A", "Ammunition"),
    ("AIR|DMG", "Vehicle (air)"),
    ("AIR|XPHB", "Vehicle (air)"),
    ("AT", "Artisan's tools"),
    ("AT|XPHB", "Artisan's tools"),
    ("EXP|DMG", "Explosive"),
    ("EXP|XDMG", "Explosive"),
    ("FD", "Food and drink"),
    ("FD|XPHB", "Food and drink"),
    ("G", "Adventuring gear"),
    ("GS", "Gaming set"),
    ("GS|XPHB", "Gaming set"),
    ("G|XPHB", "Adventuring gear"),
    ("HA", "Heavy Armor"),
    ("HA|XPHB", "Heavy Armor"),
    ("IDG|TDCSR", "Illegal drug"),
    ("INS", "Instrument"),
    ("LA", "Light Armor"),
    ("LA|XPHB", "Light Armor"),
    ("M", "Martial weapon"),
    ("MA", "Medium Armor"),
    ("MA|XPHB", "Medium Armor"),
    ("MNT", "Mount"),
    ("MNT|XPHB", "Mount"),
    ("M|XPHB", "Martial Weapon"),
    ("OTH", "Other"),
    ("P", "Potion"),
    ("P|XPHB", "Potion"),
    ("R", "Ranged weapon"),
    ("RD|DMG", "Rod"),
    ("RD|XDMG", "Rod"),
    ("RG|DMG", "Ring"),
    ("RG|XDMG", "Ring"),
    ("S", "Shield"),
    ("SCF", "Spellcasting Focus"),
    ("SCF|XPHB", "Spellcasting Focus"),
    ("SC|DMG", "Scroll"),
    ("SC|XPHB", "Scroll"),
    ("SHP", "Vehicle (water)"),
    ("SHP|XPHB", "Vehicle (water)"),
    ("SPC|AAG", "Vehicle (space)"),
    ("S|XPHB", "Shield"),
    ("T", "Tools"),
    ("TAH", "Tack and harness"),
    ("TAH|XPHB", "Tack and harness"),
    ("TB|XDMG", "Trade Bar"),
    ("TG", "Trade good"),
    ("TG|XDMG", "Trade good"),
    ("T|XPHB", "Tools"),
    ("VEH", "Vehicle (land)"),
    ("VEH|XPHB", "Vehicle (land)"),
    ("WD|DMG", "Wand"),
    ("WD|XDMG", "Wand"),
];

/// Damage-type codes.
const DAMAGE_TYPES: &[(&str, &str)] = &[
    ("A", "Acid"),
    ("B", "Bludgeoning"),
    ("C", "Cold"),
    ("F", "Fire"),
    ("O", "Force"),
    ("L", "Lightning"),
    ("N", "Necrotic"),
    ("P", "Piercing"),
    ("I", "Poison"),
    ("Y", "Psychic"),
    ("R", "Radiant"),
    ("S", "Slashing"),
    ("T", "Thunder"),
];

/// Weapon and armor property codes.
const PROPERTIES: &[(&str, &str)] = &[
    ("2H", "Two-Handed"),
    ("2H|XPHB", "Two-Handed"),
    ("A", "Ammunition"),
    ("A|XPHB", "Ammunition"),
    ("AF|DMG", "Ammunition (futuristic)"),
    ("BF|DMG", "Burst Fire"),
    ("F", "Finesse"),
    ("F|XPHB", "Finesse"),
    ("H", "Heavy"),
    ("H|XPHB", "Heavy"),
    ("L", "Light"),
    ("LD", "Loading"),
    ("LD|XPHB", "Loading"),
    ("L|XPHB", "Light"),
    ("R", "Reach"),
    ("RLD|DMG", "Reload"),
    ("R|XPHB", "Reach"),
    ("S", "Special"),
    ("S|XPHB", "Special"),
    ("T", "Thrown"),
    ("T|XPHB", "Thrown"),
    ("V", "Versatile"),
    ("V|XPHB", "Versatile"),
];

/// Table-driven classifier with miss diagnostics.
pub struct Classifier {
    item_types: HashMap<&'static str, &'static str>,
    damage_types: HashMap<&'static str, &'static str>,
    properties: HashMap<&'static str, &'static str>,
}

impl Classifier {
    /// Create a classifier over the built-in static tables.
    pub fn new() -> Self {
        Self {
            item_types: ITEM_TYPES.iter().copied().collect(),
            damage_types: DAMAGE_TYPES.iter().copied().collect(),
            properties: PROPERTIES.iter().copied().collect(),
        }
    }

    /// Resolve an item-type code.
    pub fn item_type(
        &self,
        code: Option<&str>,
        item_name: &str,
        sink: &dyn DiagnosticSink,
    ) -> String {
        classify(code, &self.item_types, "item type", item_name, sink)
    }

    /// Resolve a damage-type code.
    pub fn damage_type(
        &self,
        code: Option<&str>,
        item_name: &str,
        sink: &dyn DiagnosticSink,
    ) -> String {
        classify(code, &self.damage_types, "damage type", item_name, sink)
    }

    /// Resolve a weapon/armor property code.
    pub fn property(
        &self,
        code: Option<&str>,
        item_name: &str,
        sink: &dyn DiagnosticSink,
    ) -> String {
        classify(code, &self.properties, "property", item_name, sink)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared classify-or-default policy.
///
/// Looks up `code` (or the literal `"undefined"` key when absent). A miss
/// reports the code and the item name to the sink and yields
/// [`FALLBACK_CATEGORY`].
fn classify(
    code: Option<&str>,
    table: &HashMap<&'static str, &'static str>,
    kind: &str,
    item_name: &str,
    sink: &dyn DiagnosticSink,
) -> String {
    let key = code.unwrap_or(ABSENT_KEY);
    match table.get(key) {
        Some(category) => (*category).to_string(),
        None => {
            sink.warn(&format!(
                "unknown {} code '{}' on item '{}', defaulting to {}",
                kind, key, item_name, FALLBACK_CATEGORY
            ));
            FALLBACK_CATEGORY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_item_type_hit() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        assert_eq!(classifier.item_type(Some("M"), "Dagger", &sink), "Martial weapon");
        assert_eq!(
            classifier.item_type(Some("M|XPHB"), "Dagger", &sink),
            "Martial Weapon"
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_absent_code_uses_undefined_key() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        assert_eq!(classifier.item_type(None, "Mystery Box", &sink), "Other");
        // "undefined" is a table hit, not a miss
        assert!(sink.is_empty());
    }

    #[test]
    fn test_miss_emits_one_diagnostic() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        assert_eq!(classifier.item_type(Some("ZZ|??"), "Weird Thing", &sink), "Other");
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("ZZ|??"));
        assert!(sink.messages()[0].contains("Weird Thing"));
    }

    #[test]
    fn test_miss_is_deterministic() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        for _ in 0..3 {
            assert_eq!(classifier.property(Some("XYZ"), "Oddity", &sink), "Other");
        }
        // one diagnostic per occurrence
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_damage_type_hit() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        assert_eq!(classifier.damage_type(Some("S"), "Longsword", &sink), "Slashing");
        assert_eq!(classifier.damage_type(Some("P"), "Dagger", &sink), "Piercing");
    }

    #[test]
    fn test_property_hit() {
        let classifier = Classifier::new();
        let sink = MemorySink::new();
        assert_eq!(classifier.property(Some("V"), "Longsword", &sink), "Versatile");
        assert_eq!(classifier.property(Some("2H|XPHB"), "Maul", &sink), "Two-Handed");
    }
}
