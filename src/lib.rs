//! # itempress
//!
//! Catalog-import pipeline for item-catalog JSON documents.
//!
//! itempress converts a third-party catalog document (nested, tagged JSON
//! describing items and their rich-text rules) into normalized preset
//! records, packs them into size-bounded transfer batches, and drives them
//! through a pluggable submission collaborator.
//!
//! ## Quick Start
//!
//! ```no_run
//! use itempress::{parse_file, Importer, MemorySubmission};
//!
//! fn main() -> itempress::Result<()> {
//!     let doc = parse_file("items.json")?;
//!
//!     let submission = MemorySubmission::new();
//!     let report = Importer::new().run(&doc, &submission)?;
//!     println!("{} records in {} batches", report.records, report.batches);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline stages
//!
//! - **Parse**: [`parse_str`] / [`parse_reader`] / [`parse_file`] read a
//!   [`CatalogDocument`]; an unrecognized block kind fails here, loudly.
//! - **Normalize**: [`Normalizer`] renders each item's block tree, resolves
//!   classifier codes (misses degrade to `"Other"` with a diagnostic), and
//!   strips `{@...}` reference macros.
//! - **Partition**: [`partition`] packs records into batches between
//!   [`LOWER_BOUND`] and [`UPPER_BOUND`] serialized bytes.
//! - **Submit**: [`submit_all`] hands batches to a [`Submission`]
//!   sequentially; failures are reported and skipped, never retried.

pub mod batch;
pub mod classify;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;
pub mod sink;
pub mod submit;

// Re-export commonly used types
pub use batch::{
    partition, partition_with_options, PartitionOptions, TransferBatch, CHUNK_SIZE, LOWER_BOUND,
    UPPER_BOUND,
};
pub use classify::Classifier;
pub use error::{Error, Result};
pub use model::{
    Attunement, CatalogDocument, CatalogItem, ContentBlock, Entry, NormalizedRecord,
    IMPORT_CREATOR,
};
pub use normalize::Normalizer;
pub use render::{render_block, render_entry, MacroNormalizer};
pub use sink::{DiagnosticSink, LogSink, MemorySink, NullSink};
pub use submit::{submit_all, MemorySubmission, SubmitReport, Submission};

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Parse a catalog document from a JSON string.
pub fn parse_str(json: &str) -> Result<CatalogDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a catalog document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<CatalogDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a catalog document from a file.
///
/// # Example
///
/// ```no_run
/// use itempress::parse_file;
///
/// let doc = parse_file("items.json").unwrap();
/// println!("items: {}", doc.item_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<CatalogDocument> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Normalize a document with the default configuration.
pub fn normalize_document(doc: &CatalogDocument) -> Vec<NormalizedRecord> {
    Normalizer::new().normalize_document(doc)
}

/// Summary of one import run.
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Records produced by normalization
    pub records: usize,

    /// Batches created by the partitioner
    pub batches: usize,

    /// Batches accepted by the submission collaborator
    pub submitted: usize,

    /// Batches rejected by the submission collaborator
    pub failed: usize,

    /// Total serialized payload size across all batches, in bytes
    pub total_bytes: usize,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl ImportReport {
    /// Check if every batch was accepted.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Builder for a configured import run.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use itempress::{Importer, MemorySink, MemorySubmission, PartitionOptions};
///
/// # fn main() -> itempress::Result<()> {
/// let doc = itempress::parse_file("items.json")?;
/// let diagnostics = Arc::new(MemorySink::new());
///
/// let report = Importer::new()
///     .with_creator("public-import")
///     .with_diagnostics(diagnostics.clone())
///     .with_partition_options(PartitionOptions::new())
///     .run(&doc, &MemorySubmission::new())?;
///
/// assert!(report.is_complete());
/// # Ok(())
/// # }
/// ```
pub struct Importer {
    creator: String,
    partition_options: PartitionOptions,
    diagnostics: Arc<dyn DiagnosticSink>,
    errors: Arc<dyn DiagnosticSink>,
}

impl Importer {
    /// Create an importer with default configuration.
    pub fn new() -> Self {
        Self {
            creator: IMPORT_CREATOR.to_string(),
            partition_options: PartitionOptions::default(),
            diagnostics: Arc::new(LogSink),
            errors: Arc::new(LogSink),
        }
    }

    /// Override the creator marker stamped on every record.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Set the sink receiving classifier-miss diagnostics.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Set the sink receiving submission failure reports.
    pub fn with_error_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.errors = sink;
        self
    }

    /// Set partition thresholds.
    pub fn with_partition_options(mut self, options: PartitionOptions) -> Self {
        self.partition_options = options;
        self
    }

    /// Normalize a document without batching or submitting.
    pub fn normalize(&self, doc: &CatalogDocument) -> Vec<NormalizedRecord> {
        self.normalizer().normalize_document(doc)
    }

    /// Normalize and partition a document without submitting.
    pub fn plan(&self, doc: &CatalogDocument) -> Result<Vec<TransferBatch>> {
        let records = self.normalize(doc);
        partition_with_options(records.into(), &self.partition_options)
    }

    /// Run the full pipeline: normalize, partition, submit.
    pub fn run(
        &self,
        doc: &CatalogDocument,
        submission: &dyn Submission,
    ) -> Result<ImportReport> {
        let records = self.normalize(doc);
        let record_count = records.len();
        log::info!("normalized {} catalog items", record_count);

        let batches = partition_with_options(records.into(), &self.partition_options)?;
        let mut total_bytes = 0;
        for batch in &batches {
            total_bytes += batch.byte_size()?;
        }
        log::info!(
            "partitioned into {} batches ({} bytes)",
            batches.len(),
            total_bytes
        );

        let outcome = submit_all(&batches, submission, self.errors.as_ref());

        Ok(ImportReport {
            records: record_count,
            batches: batches.len(),
            submitted: outcome.submitted,
            failed: outcome.failed,
            total_bytes,
            finished_at: Utc::now(),
        })
    }

    fn normalizer(&self) -> Normalizer {
        Normalizer::new()
            .with_creator(self.creator.clone())
            .with_diagnostics(self.diagnostics.clone())
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
