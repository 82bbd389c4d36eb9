//! Siste - Latest CS50 Videos
//!
//! A CLI tool and MCP server that fetches the most recent uploads from the
//! CS50 YouTube channel and formats them as a readable report.
//!
//! The name "Siste" comes from the Norwegian word for "latest."
//!
//! # Overview
//!
//! Siste allows you to:
//! - Fetch the latest CS50 videos from the YouTube Data API
//! - Print them as a numbered report with watch URLs
//! - Expose the same lookup as an MCP tool for AI assistants
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `youtube` - YouTube Data API client and wire model
//! - `report` - Report rendering
//! - `fetcher` - The fetch operation (request + render, never fails)
//! - `mcp` - MCP server exposing the tool
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use siste::config::Settings;
//! use siste::fetcher::VideoListFetcher;
//! use siste::youtube::YouTubeClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = YouTubeClient::new(settings.youtube.resolve_api_key());
//!     let fetcher = VideoListFetcher::new(client);
//!
//!     let report = fetcher.fetch(5).await;
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod mcp;
pub mod report;
pub mod youtube;

pub use error::{Result, SisteError};
