//! MCP (Model Context Protocol) server for Siste.
//!
//! Exposes the latest-videos lookup as a tool for AI assistants.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
