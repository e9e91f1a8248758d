use async_trait::async_trait;
use snapaudit_core::error::Result;

/// One snapshot as returned by the provider's listing call. The provider
/// attaches plenty of other metadata; the pipeline only needs the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub snapshot_id: String,
}

/// The two read-only provider operations the pipeline runs against.
///
/// The production implementation wraps an EC2 session; tests substitute an
/// in-memory fake so the pipeline is exercised without network access.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Every snapshot owned by the authenticated account, all pages
    /// concatenated in delivery order.
    async fn list_owned_snapshots(&self) -> Result<Vec<SnapshotRecord>>;

    /// Ids of machine images whose block-device mapping references
    /// `snapshot_id`, in the order the lookup returns them.
    async fn images_referencing(&self, snapshot_id: &str) -> Result<Vec<String>>;
}
