use crate::config::DEFAULT_LOCAL_MANIFEST;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ifwup",
    about = "Update checker for Qt Installer Framework applications",
    version
)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URL of the package server's component manifest
    #[arg(long, value_name = "URL")]
    pub remote_manifest: Option<String>,

    /// Owner of the vendor repository publishing the release feed
    #[arg(long, value_name = "OWNER", default_value = "")]
    pub feed_owner: String,

    /// Name of the vendor repository publishing the release feed
    #[arg(long, value_name = "REPO", default_value = "")]
    pub feed_repo: String,

    /// Version string of the installed application
    #[arg(long, value_name = "VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub app_version: String,

    /// Path to the installed component manifest
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOCAL_MANIFEST)]
    pub local_manifest: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a newer release or component set is available
    Check {
        #[command(flatten)]
        check: CheckArgs,

        /// Print the outcome as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Check for updates and start the maintenance tool when one is found
    Update {
        #[command(flatten)]
        check: CheckArgs,

        /// Path of the maintenance tool (defaults to the installer directory)
        #[arg(long, value_name = "PATH")]
        tool: Option<PathBuf>,
    },

    /// Start the maintenance tool in updater mode without checking first
    Launch {
        /// Path of the maintenance tool (defaults to the installer directory)
        #[arg(long, value_name = "PATH")]
        tool: Option<PathBuf>,
    },
}
