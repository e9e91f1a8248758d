//! Snapshot classification pipeline
//!
//! Fetches every snapshot the account owns, classifies each one by whether
//! any machine image still references it, partitions the outcomes and
//! writes them as CSV tables.

pub mod classify;
pub mod partition;
pub mod report;
pub mod source;

// Re-export key types
pub use classify::{classify_all, Classification, ClassificationOutcome, LOOKUP_WORKERS};
pub use partition::{partition, AttachedRow, Partition};
pub use report::{output_filename, write_attached_table, write_unattached_table};
pub use source::{SnapshotRecord, SnapshotSource};
