//! Configuration module for Siste.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{Settings, YoutubeSettings};
