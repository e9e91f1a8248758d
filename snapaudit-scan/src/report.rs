//! CSV table writing and output file naming.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use snapaudit_core::error::{AuditError, Result};

use crate::partition::AttachedRow;

const ATTACHED_COLUMNS: &str = "SnapshotId,AssociatedAMIs";
const UNATTACHED_COLUMNS: &str = "SnapshotId";

/// `{prefix}_snapshots_{profile}_{region}_{YYYY-MM-DD_HH-MM-SS}.csv`.
///
/// Pure in its arguments; callers read the clock once per run so both
/// tables share a timestamp. Repeat invocations within the same second
/// produce the same name.
pub fn output_filename(
    prefix: &str,
    profile: &str,
    region: &str,
    at: &DateTime<Local>,
) -> String {
    format!(
        "{}_snapshots_{}_{}_{}.csv",
        prefix,
        profile,
        region,
        at.format("%Y-%m-%d_%H-%M-%S")
    )
}

// Minimal quoting: only fields containing a delimiter, quote or line break
// are wrapped.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn create_table(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .map_err(|e| AuditError::Report(format!("create {}: {}", path.display(), e)))?;
    Ok(BufWriter::new(file))
}

/// Writes `SnapshotId,AssociatedAMIs` rows, overwriting `path`. The image
/// list renders as a `", "`-joined field, or the literal `None` when empty.
pub fn write_attached_table(rows: &[AttachedRow], path: &Path) -> Result<()> {
    let ctx = |e: std::io::Error| AuditError::Report(format!("write {}: {}", path.display(), e));

    let mut table = create_table(path)?;
    writeln!(table, "{}", ATTACHED_COLUMNS).map_err(ctx)?;
    for row in rows {
        let amis = if row.image_ids.is_empty() {
            Cow::Borrowed("None")
        } else {
            Cow::Owned(row.image_ids.join(", "))
        };
        writeln!(table, "{},{}", csv_field(&row.snapshot_id), csv_field(&amis)).map_err(ctx)?;
    }
    table.flush().map_err(ctx)?;
    Ok(())
}

/// Writes the single-column `SnapshotId` table, overwriting `path`.
pub fn write_unattached_table(snapshot_ids: &[String], path: &Path) -> Result<()> {
    let ctx = |e: std::io::Error| AuditError::Report(format!("write {}: {}", path.display(), e));

    let mut table = create_table(path)?;
    writeln!(table, "{}", UNATTACHED_COLUMNS).map_err(ctx)?;
    for snapshot_id in snapshot_ids {
        writeln!(table, "{}", csv_field(snapshot_id)).map_err(ctx)?;
    }
    table.flush().map_err(ctx)?;
    Ok(())
}
