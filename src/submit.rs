//! Batch submission seam.
//!
//! The pipeline does not talk to the backend itself; it hands each
//! [`TransferBatch`] to a [`Submission`] collaborator. Batches are submitted
//! sequentially, in creation order. A failed batch is reported to the error
//! sink and processing continues with the next batch; the batch path never
//! retries.

use crate::batch::TransferBatch;
use crate::error::Result;
use crate::sink::DiagnosticSink;

/// Collaborator that accepts one transfer batch.
///
/// Implement this to wire the pipeline to an actual backend (HTTP, file,
/// message queue). Implementations report transport or status failures
/// through the returned `Result`.
pub trait Submission: Send + Sync {
    /// Submit a single batch, reporting success or failure.
    fn submit(&self, batch: &TransferBatch) -> Result<()>;
}

/// Outcome of driving a batch sequence through a submission collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Batches accepted by the collaborator
    pub submitted: usize,

    /// Batches rejected with an error
    pub failed: usize,

    /// Records inside accepted batches
    pub records: usize,
}

impl SubmitReport {
    /// Check if every batch was accepted.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Submit batches one at a time, in order.
///
/// Failures go to the error sink with the batch context and do not abort
/// the remaining batches.
pub fn submit_all(
    batches: &[TransferBatch],
    submission: &dyn Submission,
    errors: &dyn DiagnosticSink,
) -> SubmitReport {
    let mut report = SubmitReport::default();

    for (index, batch) in batches.iter().enumerate() {
        match submission.submit(batch) {
            Ok(()) => {
                report.submitted += 1;
                report.records += batch.len();
            }
            Err(err) => {
                report.failed += 1;
                errors.error(&format!(
                    "batch {}/{} ({} records) rejected: {}",
                    index + 1,
                    batches.len(),
                    batch.len(),
                    err
                ));
            }
        }
    }

    report
}

/// Submission double that records batches in memory.
#[derive(Debug, Default)]
pub struct MemorySubmission {
    batches: std::sync::Mutex<Vec<TransferBatch>>,
}

impl MemorySubmission {
    /// Create a new empty submission sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches received so far.
    pub fn batches(&self) -> Vec<TransferBatch> {
        self.batches.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Submission for MemorySubmission {
    fn submit(&self, batch: &TransferBatch) -> Result<()> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(batch.clone());
        }
        Ok(())
    }
}
