//! Reactive view controller
//!
//! Every output is recomputed from scratch from the shared dataset and the
//! UI-held selection. Nothing is cached between calls, and the selection is
//! passed in rather than stored, so one `Dashboard` serves any number of
//! concurrent viewers.

use std::sync::Arc;

use tracing::debug;

use crate::aggregate::{aggregate_by, filter_records, hierarchical_aggregate, total_investment};
use crate::error::{Error, Result};
use crate::figure::{self, Figure};
use crate::load::Dataset;
use crate::models::{
    DashboardEvent, DashboardOptions, DashboardView, Dimension, EventOutcome, PageText,
    ProgramFilter, Selection, ViewUpdate,
};

/// Treemap title
pub const TREEMAP_TITLE: &str = "Investment by State and City";

/// Treemap nesting, outermost first
pub const TREEMAP_PATH: [Dimension; 2] = [Dimension::State, Dimension::City];

#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    page: PageText,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_page(dataset, PageText::default())
    }

    pub fn with_page(dataset: Arc<Dataset>, page: PageText) -> Self {
        Self { dataset, page }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Tab and dimension choices for the UI controls
    pub fn options(&self) -> DashboardOptions {
        let tabs = std::iter::once(ProgramFilter::ALL.to_string())
            .chain(self.dataset.program_areas().iter().cloned())
            .collect();
        DashboardOptions {
            tabs,
            dimensions: Dimension::BAR_CHOICES.to_vec(),
            initial: Selection::default(),
            page: self.page.clone(),
        }
    }

    /// Raw investment sum for a program filter
    pub fn total(&self, program: &ProgramFilter) -> u64 {
        total_investment(filter_records(self.dataset.records(), program))
    }

    /// Total investment formatted for the metric card, e.g. "$1.23M"
    pub fn total_investment(&self, program: &ProgramFilter) -> String {
        format_millions(self.total(program))
    }

    /// Treemap of investment by State and City
    pub fn treemap(&self, program: &ProgramFilter) -> Figure {
        let rows = hierarchical_aggregate(
            filter_records(self.dataset.records(), program),
            &TREEMAP_PATH,
        );
        figure::treemap(&rows, TREEMAP_TITLE)
    }

    /// Bar chart of investment by `dimension`, largest first
    pub fn bar_chart(&self, program: &ProgramFilter, dimension: Dimension) -> Figure {
        let totals = aggregate_by(filter_records(self.dataset.records(), program), dimension);
        figure::bar(&totals, dimension, &bar_title(dimension))
    }

    /// All three outputs for a selection
    pub fn view(&self, selection: &Selection) -> Result<DashboardView> {
        check_dimension(selection.dimension)?;
        Ok(DashboardView {
            selection: selection.clone(),
            total: self.total_investment(&selection.program),
            treemap: self.treemap(&selection.program),
            bar: self.bar_chart(&selection.program, selection.dimension),
        })
    }

    /// Apply a UI event and recompute the outputs that depend on it
    ///
    /// A tab change touches all three outputs; a dimension change only the
    /// bar chart.
    pub fn handle(&self, selection: Selection, event: DashboardEvent) -> Result<EventOutcome> {
        check_dimension(selection.dimension)?;
        debug!(?selection, ?event, "Handling dashboard event");

        let (selection, updates) = match event {
            DashboardEvent::TabSelected(program) => {
                let selection = Selection {
                    program,
                    ..selection
                };
                let updates = vec![
                    ViewUpdate::Total(self.total_investment(&selection.program)),
                    ViewUpdate::Treemap(self.treemap(&selection.program)),
                    ViewUpdate::Bar(self.bar_chart(&selection.program, selection.dimension)),
                ];
                (selection, updates)
            }
            DashboardEvent::DimensionSelected(dimension) => {
                check_dimension(dimension)?;
                let selection = Selection {
                    dimension,
                    ..selection
                };
                let updates = vec![ViewUpdate::Bar(
                    self.bar_chart(&selection.program, selection.dimension),
                )];
                (selection, updates)
            }
        };

        Ok(EventOutcome { selection, updates })
    }
}

/// Bar chart title for a dimension
pub fn bar_title(dimension: Dimension) -> String {
    format!("Investment by {}", dimension)
}

/// Reject dimensions the bar-chart control does not offer
fn check_dimension(dimension: Dimension) -> Result<()> {
    if dimension.is_bar_choice() {
        Ok(())
    } else {
        Err(Error::InvalidSelection(format!(
            "{} is not a bar chart dimension",
            dimension
        )))
    }
}

/// Format a dollar amount in millions with two decimals ("$1.23M")
pub fn format_millions(amount: u64) -> String {
    format!("${:.2}M", amount as f64 / 1e6)
}

/// Format a dollar amount with thousands separators ("$1,234,567")
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
