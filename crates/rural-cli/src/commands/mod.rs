//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `common` - Shared utilities (config layering, dataset loading, selection parsing)
//! - `export` - JSON export of dashboard outputs
//! - `serve` - Web server command
//! - `summary` - Terminal summary of totals

pub mod common;
pub mod export;
pub mod serve;
pub mod summary;

// Re-export command functions for main.rs
pub use common::*;
pub use export::*;
pub use serve::*;
pub use summary::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
