//! CLI command implementations.

mod config;
mod doctor;
mod latest;
mod mcp;

pub use config::run_config;
pub use doctor::run_doctor;
pub use latest::run_latest;
pub use mcp::run_mcp;
