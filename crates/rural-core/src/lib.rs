//! Rural Investments Core Library
//!
//! Shared functionality for the rural investments dashboard:
//! - CSV loading and cleaning of the investment dataset
//! - Group-by-and-sum aggregation for the charts
//! - Reactive view controller (total metric, treemap, bar chart)
//! - Plotly figure builders
//! - Dashboard configuration

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod figure;
pub mod load;
pub mod models;

pub use aggregate::{aggregate_by, filter_records, hierarchical_aggregate, total_investment};
pub use config::DashboardConfig;
pub use dashboard::{format_dollars, format_millions, Dashboard};
pub use error::{Error, Result};
pub use figure::Figure;
pub use load::Dataset;
pub use models::{
    CategoryTotal, DashboardEvent, DashboardOptions, DashboardView, Dimension, EventOutcome,
    HierarchyRow, InvestmentRecord, PageText, ProgramFilter, Selection, ViewUpdate,
};
