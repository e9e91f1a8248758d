// Command handlers for snapshot audit operations

use tracing::debug;

use snapaudit_core::error::Result;

use crate::cli::{Args, Command};

pub mod attached;
pub mod scan;

/// Main command dispatcher
pub async fn execute_command(args: Args) -> Result<()> {
    match args.command {
        Command::Scan { profile, region } => {
            debug!("Handling scan command");
            scan::handle_scan(profile, region).await
        }
        Command::Attached => {
            debug!("Handling attached command");
            attached::handle_attached().await
        }
    }
}
