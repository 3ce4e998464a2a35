//! Data model for the catalog-import pipeline.
//!
//! This module defines both sides of the pipeline: the catalog input shape
//! (a document of items carrying a tree of tagged rich-text blocks) and the
//! normalized output record the backend store ingests.

mod block;
mod catalog;
mod record;

pub use block::{ContentBlock, Entry};
pub use catalog::{Attunement, CatalogDocument, CatalogItem};
pub use record::{NormalizedRecord, IMPORT_CREATOR};
