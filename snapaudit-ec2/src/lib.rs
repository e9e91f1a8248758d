//! EC2-backed implementation of the snapshot source.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ec2::types::Filter;
use aws_sdk_ec2::Client;
use tracing::debug;

use snapaudit_core::error::{AuditError, Result};
use snapaudit_scan::{SnapshotRecord, SnapshotSource};

/// Filter matching images whose block-device mapping references a snapshot.
const IMAGE_SNAPSHOT_FILTER: &str = "block-device-mapping.snapshot-id";

/// An authenticated EC2 session scoped to one profile and region.
pub struct Ec2Session {
    client: Client,
}

impl Ec2Session {
    /// Builds a session for `profile` in `region`.
    ///
    /// Credentials are resolved eagerly so that missing or partial
    /// credentials fail here, before any listing call is attempted.
    pub async fn connect(profile: &str, region: &str) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let provider = config.credentials_provider().ok_or_else(|| {
            AuditError::Auth(
                "AWS credentials not found. Ensure you have configured your profile correctly."
                    .to_string(),
            )
        })?;
        provider.provide_credentials().await.map_err(|e| {
            AuditError::Auth(format!(
                "AWS credentials not found for profile '{profile}': {e}"
            ))
        })?;

        debug!(profile, region, "EC2 session established");
        Ok(Self {
            client: Client::new(&config),
        })
    }
}

#[async_trait]
impl SnapshotSource for Ec2Session {
    async fn list_owned_snapshots(&self) -> Result<Vec<SnapshotRecord>> {
        let mut records = Vec::new();
        let mut pages = self
            .client
            .describe_snapshots()
            .owner_ids("self")
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| {
                AuditError::Fetch(format!("describe_snapshots page failed: {e:?}"))
            })?;
            for snapshot in page.snapshots() {
                if let Some(id) = snapshot.snapshot_id() {
                    records.push(SnapshotRecord {
                        snapshot_id: id.to_string(),
                    });
                }
            }
            debug!(total = records.len(), "accumulated snapshot page");
        }
        Ok(records)
    }

    async fn images_referencing(&self, snapshot_id: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .describe_images()
            .filters(
                Filter::builder()
                    .name(IMAGE_SNAPSHOT_FILTER)
                    .values(snapshot_id)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| {
                AuditError::Fetch(format!("describe_images failed for {snapshot_id}: {e:?}"))
            })?;

        Ok(response
            .images()
            .iter()
            .filter_map(|image| image.image_id().map(ToString::to_string))
            .collect())
    }
}
