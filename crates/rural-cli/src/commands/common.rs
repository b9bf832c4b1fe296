//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Layer the config file under CLI/env overrides
//! - `open_dashboard` - Load the dataset and build the view controller
//! - `parse_selection` - Parse tab/dimension arguments

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rural_core::{Dashboard, DashboardConfig, Dataset, Dimension, ProgramFilter, Selection};

/// Load the config file (explicit, or the default location if present) and
/// apply the dataset override
pub fn load_config(
    config_path: Option<&Path>,
    data_path: Option<&Path>,
) -> Result<DashboardConfig> {
    let mut config = DashboardConfig::load(config_path).with_context(|| match config_path {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to load default config".to_string(),
    })?;

    if let Some(path) = data_path {
        config.data_path = path.to_path_buf();
    }

    Ok(config)
}

/// Load and clean the dataset; any malformed row aborts
pub fn open_dashboard(config: &DashboardConfig) -> Result<Dashboard> {
    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("Failed to load dataset {}", config.data_path.display()))?;
    Ok(Dashboard::with_page(Arc::new(dataset), config.page.clone()))
}

/// Parse a tab name and a bar-chart dimension
pub fn parse_selection(program: &str, dimension: &str) -> Result<Selection> {
    let dimension: Dimension = dimension.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    if !dimension.is_bar_choice() {
        anyhow::bail!(
            "{} is not a bar chart dimension (valid: Program Area, Investment Type)",
            dimension
        );
    }
    Ok(Selection {
        program: ProgramFilter::from(program),
        dimension,
    })
}
