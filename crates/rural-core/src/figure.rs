//! Plotly figure builders
//!
//! Aggregates are handed to the browser as Plotly figure JSON (`data` +
//! `layout`); the front end passes them straight to `Plotly.react`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{CategoryTotal, Dimension, HierarchyRow};

/// Page background shared by both charts
pub const BACKGROUND_COLOR: &str = "#f5f6f7";

const TITLE_FONT_SIZE: u32 = 28;
const TITLE_FONT_FAMILY: &str = "sans-serif";
const TICK_FONT_SIZE: u32 = 18;
const AXIS_TITLE_FONT_SIZE: u32 = 20;
const BAR_Y_AXIS_TITLE: &str = "Investment USD ($)";

/// A Plotly figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

/// Plotly trace, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Treemap {
        ids: Vec<String>,
        labels: Vec<String>,
        parents: Vec<String>,
        values: Vec<u64>,
        /// Always "total": inner node values include their children
        branchvalues: String,
    },
    Bar {
        x: Vec<String>,
        y: Vec<u64>,
        /// Trace name: the grouping dimension
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    fn titled(text: &str) -> Self {
        Self {
            title: Title {
                text: text.to_string(),
                font: Font {
                    size: TITLE_FONT_SIZE,
                    family: Some(TITLE_FONT_FAMILY.to_string()),
                },
                x: 0.5,
            },
            plot_bgcolor: BACKGROUND_COLOR.to_string(),
            paper_bgcolor: BACKGROUND_COLOR.to_string(),
            xaxis: None,
            yaxis: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub tickfont: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

/// Build a treemap from hierarchy rows
///
/// Every path prefix becomes a node whose id is the prefix joined with "/";
/// inner nodes carry the sum of their leaves.
pub fn treemap(rows: &[HierarchyRow], title: &str) -> Figure {
    let mut ids: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut parents: Vec<String> = Vec::new();
    let mut values: Vec<u64> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let mut parent = String::new();
        for (depth, label) in row.path.iter().enumerate() {
            let id = if depth == 0 {
                label.clone()
            } else {
                format!("{}/{}", parent, label)
            };
            match index.get(&id) {
                Some(&i) => values[i] += row.value,
                None => {
                    index.insert(id.clone(), ids.len());
                    ids.push(id.clone());
                    labels.push(label.clone());
                    parents.push(parent.clone());
                    values.push(row.value);
                }
            }
            parent = id;
        }
    }

    Figure {
        data: vec![Trace::Treemap {
            ids,
            labels,
            parents,
            values,
            branchvalues: "total".to_string(),
        }],
        layout: Layout::titled(title),
    }
}

/// Build a bar chart from category totals, keeping their order
pub fn bar(totals: &[CategoryTotal], dimension: Dimension, title: &str) -> Figure {
    let mut layout = Layout::titled(title);
    layout.xaxis = Some(Axis {
        title: AxisTitle {
            text: String::new(),
            font: None,
        },
        tickfont: Font {
            size: TICK_FONT_SIZE,
            family: None,
        },
    });
    layout.yaxis = Some(Axis {
        title: AxisTitle {
            text: BAR_Y_AXIS_TITLE.to_string(),
            font: Some(Font {
                size: AXIS_TITLE_FONT_SIZE,
                family: None,
            }),
        },
        tickfont: Font {
            size: TICK_FONT_SIZE,
            family: None,
        },
    });

    Figure {
        data: vec![Trace::Bar {
            x: totals.iter().map(|t| t.label.clone()).collect(),
            y: totals.iter().map(|t| t.value).collect(),
            name: dimension.to_string(),
        }],
        layout,
    }
}
