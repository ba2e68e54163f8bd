//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SMS report connector CLI
#[derive(Parser, Debug)]
#[command(name = "sms-report-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short = 'S', long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authentication declaration
    AuthType,

    /// Show the configuration declaration
    Config,

    /// Show the field schema
    Schema,

    /// Fetch rows from the messaging API
    Fetch {
        /// Fields to fetch, in output order (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,

        /// Messaging account SID
        #[arg(long)]
        account_sid: String,

        /// First day of the range (YYYY-MM-DD), defaults to 28 days before yesterday
        #[arg(long)]
        start_date: Option<String>,

        /// Last day of the range (YYYY-MM-DD), defaults to yesterday
        #[arg(long)]
        end_date: Option<String>,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
