//! CLI module for Siste.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Siste - Latest CS50 Videos
///
/// A CLI tool and MCP server that fetches the most recent CS50 uploads from
/// YouTube. The name "Siste" comes from the Norwegian word for "latest."
#[derive(Parser, Debug)]
#[command(name = "siste")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the latest CS50 videos and print the report
    Latest {
        /// Maximum number of videos to fetch
        #[arg(short, long, default_value = "5")]
        limit: i64,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Check API key and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
