// CLI argument parsing and definitions

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "snapaudit")]
#[command(about = "Categorize EBS snapshots by AMI attachment")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Audit snapshots interactively and write attached + unattached tables
    Scan {
        /// AWS profile to use (prompted for when omitted)
        #[arg(long)]
        profile: Option<String>,

        /// AWS region to use (prompted for when omitted)
        #[arg(long)]
        region: Option<String>,
    },
    /// Audit with the built-in profile and region, writing only the attached table
    Attached,
}
