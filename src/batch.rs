//! Size-bounded batching of normalized records for transfer.
//!
//! Records are packed greedily from the front of an owned pending queue in
//! chunks of up to [`CHUNK_SIZE`], until a batch's serialized payload
//! reaches [`LOWER_BOUND`]. A batch that overshoots [`UPPER_BOUND`] gives
//! its last chunk back to the queue before being finalized. Batches only
//! split the sequence; relative record order is never changed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::NormalizedRecord;

/// Target minimum serialized size of a batch, in bytes.
pub const LOWER_BOUND: usize = 100_000;

/// Hard maximum serialized size of a batch, in bytes.
pub const UPPER_BOUND: usize = 200_000;

/// Number of records moved per packing step.
pub const CHUNK_SIZE: usize = 100;

/// One transfer payload: the exact JSON body the backend ingests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferBatch {
    /// Records in this batch, in original input order
    pub presets: Vec<NormalizedRecord>,
}

impl TransferBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Serialized payload size in bytes (UTF-8 JSON).
    pub fn byte_size(&self) -> Result<usize> {
        let bytes = serde_json::to_vec(self).map_err(|source| Error::BatchSerialize {
            count: self.presets.len(),
            source,
        })?;
        Ok(bytes.len())
    }
}

/// Tunable partition thresholds.
#[derive(Debug, Clone, Copy)]
pub struct PartitionOptions {
    /// Stop filling a batch once its payload reaches this size
    pub lower_bound: usize,

    /// Undo the last chunk if the payload exceeds this size
    pub upper_bound: usize,

    /// Records moved per packing step
    pub chunk_size: usize,
}

impl PartitionOptions {
    /// Create options with the default transfer thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override both size thresholds.
    pub fn with_bounds(mut self, lower: usize, upper: usize) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    /// Override the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            lower_bound: LOWER_BOUND,
            upper_bound: UPPER_BOUND,
            chunk_size: CHUNK_SIZE,
        }
    }
}

/// Partition records into size-bounded batches using the default thresholds.
pub fn partition(records: Vec<NormalizedRecord>) -> Result<Vec<TransferBatch>> {
    partition_with_options(records.into(), &PartitionOptions::default())
}

/// Partition a pending queue into batches, consuming it destructively.
pub fn partition_with_options(
    mut pending: VecDeque<NormalizedRecord>,
    options: &PartitionOptions,
) -> Result<Vec<TransferBatch>> {
    let mut batches = Vec::new();

    while !pending.is_empty() {
        let mut batch = TransferBatch::new();
        let mut last_chunk = 0;

        while !pending.is_empty() && batch.byte_size()? < options.lower_bound {
            last_chunk = options.chunk_size.min(pending.len());
            for _ in 0..last_chunk {
                if let Some(record) = pending.pop_front() {
                    batch.presets.push(record);
                }
            }
        }

        // Undo the final over-shoot. A batch holding a single chunk is kept
        // as-is: giving it back would make no progress.
        if batch.len() > last_chunk && batch.byte_size()? > options.upper_bound {
            let split = batch.presets.len() - last_chunk;
            for record in batch.presets.drain(split..).rev() {
                pending.push_front(record);
            }
        }

        log::debug!(
            "finalized batch of {} records ({} bytes)",
            batch.len(),
            batch.byte_size()?
        );
        batches.push(batch);
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description_len: usize) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(name);
        record.item_type = "Other".to_string();
        record.description = "x".repeat(description_len);
        record
    }

    fn names(batches: &[TransferBatch]) -> Vec<String> {
        batches
            .iter()
            .flat_map(|b| b.presets.iter().map(|r| r.name.clone()))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_batches() {
        let batches = partition(Vec::new()).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_small_input_single_batch() {
        let records: Vec<_> = (0..5).map(|i| record(&format!("r{}", i), 10)).collect();
        let batches = partition(records).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 5);
        // final batch may be under the lower bound
        assert!(batches[0].byte_size().unwrap() < LOWER_BOUND);
    }

    #[test]
    fn test_concatenation_preserves_order() {
        let records: Vec<_> = (0..37).map(|i| record(&format!("r{:03}", i), 40)).collect();
        let expected: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        let options = PartitionOptions::new().with_bounds(500, 1_000).with_chunk_size(4);
        let batches = partition_with_options(records.into(), &options).unwrap();
        assert!(batches.len() > 1);
        assert_eq!(names(&batches), expected);
    }

    #[test]
    fn test_overshoot_chunk_is_returned() {
        // Two records serialize to well under 1,000 bytes, four to well over
        // 1,001, so every batch fills to four, overshoots, and gives the
        // second chunk back.
        let records: Vec<_> = (0..12).map(|i| record(&format!("r{:02}", i), 200)).collect();
        let expected: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        let options = PartitionOptions::new().with_bounds(1_000, 1_001).with_chunk_size(2);
        let batches = partition_with_options(records.into(), &options).unwrap();
        assert_eq!(batches.len(), 6);
        for batch in &batches {
            assert_eq!(batch.len(), 2);
            assert!(batch.byte_size().unwrap() <= 1_001);
        }
        assert_eq!(names(&batches), expected);
    }

    #[test]
    fn test_default_bounds_scenario() {
        // 250 records around 675 serialized bytes each: the first batch
        // packs two chunks (~135 KB), the second takes the remaining 50.
        let records: Vec<_> = (0..250).map(|i| record(&format!("r{:03}", i), 560)).collect();
        let expected: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        let batches = partition(records).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 200);
        assert_eq!(batches[1].len(), 50);
        let first_size = batches[0].byte_size().unwrap();
        assert!(first_size >= LOWER_BOUND);
        assert!(first_size <= UPPER_BOUND);
        assert_eq!(names(&batches), expected);
    }

    #[test]
    fn test_single_chunk_over_upper_bound_still_emitted() {
        // One chunk alone exceeds the upper bound; the partitioner must not
        // loop forever, it emits the oversized chunk.
        let records: Vec<_> = (0..3).map(|i| record(&format!("r{}", i), 600)).collect();
        let options = PartitionOptions::new().with_bounds(100, 200).with_chunk_size(3);
        let batches = partition_with_options(records.into(), &options).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
    }

    #[test]
    fn test_byte_size_matches_wire_payload() {
        let batch = TransferBatch {
            presets: vec![record("a", 10)],
        };
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(batch.byte_size().unwrap(), json.len());
        assert!(json.starts_with("{\"presets\":["));
    }
}
