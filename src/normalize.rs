//! Item normalization: catalog entries to backend-ready records.
//!
//! For each catalog item the normalizer resolves the classifier tables,
//! synthesizes the attribute lines (attunement, armor class, damage,
//! properties, and so on), renders the rich-text entry tree, strips
//! reference macros, and emits one [`NormalizedRecord`] in input order.

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::classify::Classifier;
use crate::model::{Attunement, CatalogDocument, CatalogItem, NormalizedRecord};
use crate::render::{render_entry, MacroNormalizer};
use crate::sink::{DiagnosticSink, LogSink};

/// Per-item normalization pipeline.
pub struct Normalizer {
    classifier: Classifier,
    macros: MacroNormalizer,
    creator: String,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Normalizer {
    /// Create a normalizer with the built-in tables and the log-backed sink.
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            macros: MacroNormalizer::new(),
            creator: crate::model::IMPORT_CREATOR.to_string(),
            diagnostics: Arc::new(LogSink),
        }
    }

    /// Use a custom diagnostics sink for classifier misses.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Override the creator marker stamped on every record.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Normalize a whole document: `baseitem` entries first, then `item`,
    /// one record per catalog item, in input order.
    pub fn normalize_document(&self, doc: &CatalogDocument) -> Vec<NormalizedRecord> {
        doc.all_items().map(|item| self.normalize_item(item)).collect()
    }

    /// Normalize a single catalog item.
    pub fn normalize_item(&self, item: &CatalogItem) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(self.display_name(item));
        record.creator = self.creator.clone();
        record.price = item.value.unwrap_or(0.0).round() as i32;
        record.weight = item.weight.unwrap_or(0.0) as f32;
        record.item_type = self.classifier.item_type(
            item.type_code.as_deref(),
            &item.name,
            self.diagnostics.as_ref(),
        );
        record.description = self.description(item);
        record
    }

    fn display_name(&self, item: &CatalogItem) -> String {
        match &item.source {
            Some(source) => format!("{} ({})", item.name, source),
            None => item.name.clone(),
        }
    }

    /// Assemble the description sections in their fixed order, then strip
    /// macros and NFC-normalize the result.
    fn description(&self, item: &CatalogItem) -> String {
        let mut sections: Vec<String> = Vec::new();

        match &item.req_attune {
            Some(Attunement::Required(true)) => {
                sections.push("*Requires Attunement*".to_string());
            }
            Some(Attunement::Conditional(condition)) => {
                sections.push(format!("*Requires Attunement {}*", condition));
            }
            _ => {}
        }

        if let Some(ac) = item.ac {
            sections.push(format!("Armor Class: {}", ac));
        }

        if let Some(ammo) = &item.ammo_type {
            sections.push(format!("Ammunition: {}", ammo));
        }

        if let Some(dmg1) = &item.dmg1 {
            let mut damage = format!("Damage: {}", dmg1);
            if let Some(dmg2) = &item.dmg2 {
                damage.push('/');
                damage.push_str(dmg2);
            }
            if item.dmg_type.is_some() {
                let kind = self.classifier.damage_type(
                    item.dmg_type.as_deref(),
                    &item.name,
                    self.diagnostics.as_ref(),
                );
                damage.push(' ');
                damage.push_str(&kind);
            }
            sections.push(damage);
        }

        if let Some(codes) = item.property.as_deref().filter(|p| !p.is_empty()) {
            let mut lines = vec!["Properties:".to_string()];
            for code in codes {
                lines.push(format!(
                    "- {}",
                    self.classifier.property(
                        Some(code),
                        &item.name,
                        self.diagnostics.as_ref()
                    )
                ));
            }
            sections.push(lines.join("\n"));
        }

        if let Some(masteries) = item.mastery.as_deref().filter(|m| !m.is_empty()) {
            let mut lines = vec!["Masteries:".to_string()];
            for mastery in masteries {
                lines.push(format!("- {}", mastery));
            }
            sections.push(lines.join("\n"));
        }

        if let Some(range) = &item.range {
            sections.push(format!("Range: {}", range));
        }

        if let Some(reload) = item.reload {
            sections.push(format!("Reload: {}", reload));
        }

        if !item.entries.is_empty() {
            let rendered: Vec<String> = item.entries.iter().map(render_entry).collect();
            sections.push(rendered.join("\n\n"));
        }

        if let Some(source) = &item.source {
            match item.page {
                Some(page) => sections.push(format!("*From {} p.{}*", source, page)),
                None => sections.push(format!("*From {}*", source)),
            }
        }

        let text = sections.join("\n\n");
        self.macros.process(&text).nfc().collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
