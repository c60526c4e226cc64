use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::check_s3_endpoint;
use crate::endpoint::Endpoint;

/// Register and run macOS right-click upload actions for S3 buckets.
#[derive(Parser, Debug, Clone, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, serde::Serialize)]
pub enum Command {
    /// Register the right-click "Upload to S3" service for a bucket
    Setup {
        /// Destination endpoint in s3://bucket-name form
        #[arg(value_name = "ENDPOINT", value_parser = check_s3_endpoint)]
        endpoint: Endpoint,
    },

    /// Upload a file to the bucket and fire a desktop notification
    Ship {
        /// Destination endpoint in s3://bucket-name form
        #[arg(value_name = "ENDPOINT", value_parser = check_s3_endpoint)]
        endpoint: Endpoint,

        /// Local file to upload
        #[arg(value_name = "FILE")]
        file_path: PathBuf,
    },
}
