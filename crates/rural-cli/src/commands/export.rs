//! Export command implementation

use std::path::Path;

use anyhow::{Context, Result};
use rural_core::{Dashboard, Selection};

/// Write the full dashboard view (total, treemap, bar) as pretty JSON
pub fn cmd_export(
    dashboard: &Dashboard,
    selection: &Selection,
    output: Option<&Path>,
) -> Result<()> {
    let view = dashboard.view(selection)?;
    let json = serde_json::to_string_pretty(&view)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ Exported {} view to {}", selection.program, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
