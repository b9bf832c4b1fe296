//! Summary command implementation

use anyhow::Result;
use rural_core::{aggregate_by, filter_records, format_dollars, Dashboard, Selection};

use super::truncate;

/// Render the total and the ranked category table for a selection
pub fn render_summary(dashboard: &Dashboard, selection: &Selection) -> String {
    let records = dashboard.dataset().records();
    let amount = dashboard.total(&selection.program);
    let totals = aggregate_by(filter_records(records, &selection.program), selection.dimension);

    let mut out = String::new();
    out.push_str(&format!("📊 Rural investments: {}\n\n", selection.program));
    out.push_str(&format!(
        "   Total Investment: {} ({})\n\n",
        dashboard.total_investment(&selection.program),
        format_dollars(amount)
    ));

    if totals.is_empty() {
        out.push_str("   No investments match this selection.\n");
        return out;
    }

    out.push_str(&format!(
        "   {:>3}  {:<40} {:>18} {:>7}\n",
        "#",
        selection.dimension.as_str(),
        "Investment",
        "Share"
    ));
    out.push_str(&format!("   {}\n", "-".repeat(71)));
    for (rank, total) in totals.iter().enumerate() {
        let share = if amount > 0 {
            total.value as f64 / amount as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "   {:>3}  {:<40} {:>18} {:>6.1}%\n",
            rank + 1,
            truncate(&total.label, 40),
            format_dollars(total.value),
            share
        ));
    }

    out
}

pub fn cmd_summary(dashboard: &Dashboard, selection: &Selection) -> Result<()> {
    print!("{}", render_summary(dashboard, selection));
    Ok(())
}
