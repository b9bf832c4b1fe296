//! Group-by-and-sum aggregation over investment records
//!
//! All functions are pure and keep first-seen order for groups, so results are
//! deterministic for a given input order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{CategoryTotal, Dimension, HierarchyRow, InvestmentRecord, ProgramFilter};

/// Records matching a program-area filter
pub fn filter_records<'a>(
    records: &'a [InvestmentRecord],
    filter: &'a ProgramFilter,
) -> impl Iterator<Item = &'a InvestmentRecord> + 'a {
    records.iter().filter(move |r| filter.matches(r))
}

/// Sum of the investment column
pub fn total_investment<'a, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
{
    records.into_iter().map(|r| r.investment).sum()
}

/// Sum investment per distinct combination of `dimensions` (outermost first)
///
/// Only combinations present in the input appear in the output.
pub fn hierarchical_aggregate<'a, I>(records: I, dimensions: &[Dimension]) -> Vec<HierarchyRow>
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
{
    debug_assert!(!dimensions.is_empty(), "at least one dimension required");

    let mut index: HashMap<Vec<&'a str>, usize> = HashMap::new();
    let mut rows: Vec<HierarchyRow> = Vec::new();

    for record in records {
        let key: Vec<&'a str> = dimensions.iter().map(|d| record.value_of(*d)).collect();
        match index.entry(key) {
            Entry::Occupied(e) => rows[*e.get()].value += record.investment,
            Entry::Vacant(e) => {
                let path = e.key().iter().map(|s| s.to_string()).collect();
                e.insert(rows.len());
                rows.push(HierarchyRow {
                    path,
                    value: record.investment,
                });
            }
        }
    }

    rows
}

/// Sum investment per distinct value of `dimension`, largest first
///
/// Equal sums keep first-seen order.
pub fn aggregate_by<'a, I>(records: I, dimension: Dimension) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        let label = record.value_of(dimension);
        match index.entry(label) {
            Entry::Occupied(e) => totals[*e.get()].value += record.investment,
            Entry::Vacant(e) => {
                e.insert(totals.len());
                totals.push(CategoryTotal {
                    label: label.to_string(),
                    value: record.investment,
                });
            }
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.value.cmp(&a.value));
    totals
}
