//! Fixed-config audit writing only the attached table.
//!
//! Snapshots with no referencing image are not reported in this mode.

use std::path::Path;

use chrono::Local;

use snapaudit_core::error::Result;
use snapaudit_core::{audit_println, audit_success};
use snapaudit_ec2::Ec2Session;
use snapaudit_scan::{
    classify_all, output_filename, partition, write_attached_table, SnapshotSource,
};

use crate::config::RunConfig;

pub async fn handle_attached() -> Result<()> {
    let config = RunConfig::fixed();

    let session = Ec2Session::connect(&config.profile, &config.region).await?;
    audit_println!(
        "AWS client initialized with profile '{}' and region '{}'.",
        config.profile,
        config.region
    );

    audit_println!("Fetching all snapshots...");
    let snapshots = session.list_owned_snapshots().await?;
    audit_println!("Found {} snapshots.", snapshots.len());

    audit_println!("Checking snapshot associations in parallel...");
    let outcomes = classify_all(&session, &snapshots).await;
    let split = partition(outcomes);
    audit_println!(
        "{} attached, {} failed lookups.",
        split.attached.len(),
        split.failed
    );

    let now = Local::now();
    let attached_file = output_filename("attached", &config.profile, &config.region, &now);
    write_attached_table(&split.attached, Path::new(&attached_file))?;
    audit_success!("Data saved to {}", attached_file);

    Ok(())
}
