//! Per-snapshot classification and the bounded parallel dispatcher.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use snapaudit_core::audit_warning;
use tracing::warn;

use crate::source::{SnapshotRecord, SnapshotSource};

/// Fixed cap on concurrent image lookups, independent of snapshot count.
pub const LOOKUP_WORKERS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Referenced by at least one image, in lookup-return order.
    Attached(Vec<String>),
    /// Referenced by no image.
    Unattached,
    /// The lookup call itself failed.
    LookupFailed(String),
}

/// Produced exactly once per fetched snapshot, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationOutcome {
    pub snapshot_id: String,
    pub result: Classification,
}

/// Classify one snapshot. A lookup error is captured in the outcome rather
/// than propagated, so one bad snapshot never aborts the run.
pub async fn classify_snapshot(
    source: &dyn SnapshotSource,
    snapshot_id: String,
) -> ClassificationOutcome {
    match source.images_referencing(&snapshot_id).await {
        Ok(images) if images.is_empty() => ClassificationOutcome {
            snapshot_id,
            result: Classification::Unattached,
        },
        Ok(images) => ClassificationOutcome {
            snapshot_id,
            result: Classification::Attached(images),
        },
        Err(e) => ClassificationOutcome {
            snapshot_id,
            result: Classification::LookupFailed(e.to_string()),
        },
    }
}

/// Run the classifier over every fetched snapshot with a fixed pool of
/// concurrent lookups, collecting outcomes as they complete.
///
/// Outcomes arrive in completion order and are drained on the single
/// awaiting task; the accumulator has no concurrent writers.
pub async fn classify_all(
    source: &dyn SnapshotSource,
    snapshots: &[SnapshotRecord],
) -> Vec<ClassificationOutcome> {
    let bar = ProgressBar::new(snapshots.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_message("Processing snapshots");

    let lookups = snapshots.iter().map(|snapshot| {
        let snapshot_id = snapshot.snapshot_id.clone();
        async move { classify_snapshot(source, snapshot_id).await }
    });

    let outcomes: Vec<ClassificationOutcome> = stream::iter(lookups)
        .buffer_unordered(LOOKUP_WORKERS)
        .inspect(|outcome| {
            if let Classification::LookupFailed(cause) = &outcome.result {
                warn!(snapshot_id = %outcome.snapshot_id, "image lookup failed");
                bar.suspend(|| {
                    audit_warning!(
                        "Error processing snapshot {}: {}",
                        outcome.snapshot_id,
                        cause
                    )
                });
            }
            bar.inc(1);
        })
        .collect()
        .await;

    bar.finish_with_message("done");
    outcomes
}
