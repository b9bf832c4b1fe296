//! Data models for the rural investments dashboard

use serde::{Deserialize, Serialize};

use crate::figure::Figure;

// ========== Dataset Models ==========

/// A single cleaned investment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    #[serde(rename = "Program Area")]
    pub program_area: String,
    #[serde(rename = "Investment Type")]
    pub investment_type: String,
    #[serde(rename = "State")]
    pub state: String,
    /// "Unknown" when the source withheld the city name
    #[serde(rename = "City")]
    pub city: String,
    /// Investment amount in whole US dollars
    #[serde(rename = "Investment")]
    pub investment: u64,
}

impl InvestmentRecord {
    /// Value of a categorical column for this record
    pub fn value_of(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::ProgramArea => &self.program_area,
            Dimension::InvestmentType => &self.investment_type,
            Dimension::State => &self.state,
            Dimension::City => &self.city,
        }
    }
}

/// Categorical column used for grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[default]
    #[serde(rename = "Program Area")]
    ProgramArea,
    #[serde(rename = "Investment Type")]
    InvestmentType,
    #[serde(rename = "State")]
    State,
    #[serde(rename = "City")]
    City,
}

impl Dimension {
    /// Dimensions offered for the bar chart, in display order
    pub const BAR_CHOICES: [Dimension; 2] = [Dimension::ProgramArea, Dimension::InvestmentType];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProgramArea => "Program Area",
            Self::InvestmentType => "Investment Type",
            Self::State => "State",
            Self::City => "City",
        }
    }

    pub fn is_bar_choice(&self) -> bool {
        Self::BAR_CHOICES.contains(self)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    /// Accepts column names as displayed ("Program Area") as well as
    /// kebab/snake forms ("program-area", "investment_type")
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "program area" => Ok(Self::ProgramArea),
            "investment type" => Ok(Self::InvestmentType),
            "state" => Ok(Self::State),
            "city" => Ok(Self::City),
            _ => Err(format!(
                "Unknown dimension: {} (valid: Program Area, Investment Type)",
                s
            )),
        }
    }
}

/// Program-area tab selection
///
/// Serialized as the tab id: "All" or the program area name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProgramFilter {
    #[default]
    All,
    Program(String),
}

impl ProgramFilter {
    /// Tab id for the unfiltered view
    pub const ALL: &'static str = "All";

    pub fn matches(&self, record: &InvestmentRecord) -> bool {
        match self {
            Self::All => true,
            Self::Program(name) => record.program_area == *name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Program(name) => name,
        }
    }
}

impl From<&str> for ProgramFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL {
            Self::All
        } else {
            Self::Program(s.to_string())
        }
    }
}

impl From<String> for ProgramFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL {
            Self::All
        } else {
            Self::Program(s)
        }
    }
}

impl From<ProgramFilter> for String {
    fn from(filter: ProgramFilter) -> Self {
        match filter {
            ProgramFilter::All => ProgramFilter::ALL.to_string(),
            ProgramFilter::Program(name) => name,
        }
    }
}

impl std::fmt::Display for ProgramFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========== Aggregate Models ==========

/// One node-path of a hierarchical aggregate (e.g. State -> City)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyRow {
    /// Dimension values, outermost first
    pub path: Vec<String>,
    pub value: u64,
}

/// One category of a single-dimension aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub label: String,
    pub value: u64,
}

// ========== View Models ==========

/// The two UI-held selections that drive every view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub program: ProgramFilter,
    #[serde(default)]
    pub dimension: Dimension,
}

/// Inbound UI event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DashboardEvent {
    TabSelected(ProgramFilter),
    DimensionSelected(Dimension),
}

/// One recomputed output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "output", content = "value", rename_all = "snake_case")]
pub enum ViewUpdate {
    /// Formatted total investment, e.g. "$1.23M"
    Total(String),
    Treemap(Figure),
    Bar(Figure),
}

/// Result of dispatching an event: the new selection and the outputs
/// that depend on what changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutcome {
    pub selection: Selection,
    pub updates: Vec<ViewUpdate>,
}

/// All three outputs for a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub total: String,
    pub treemap: Figure,
    pub bar: Figure,
}

/// Static page text shown around the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageText {
    pub title: String,
    pub subtitle: String,
    pub metric_label: String,
    pub author_name: String,
    pub author_url: String,
    pub source_url: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: "Rural Investments 2024".to_string(),
            subtitle: "Visualize investment in rural areas across USA".to_string(),
            metric_label: "Total Investment".to_string(),
            author_name: "Alfredo M.".to_string(),
            author_url: "https://github.com/Alfredomg7".to_string(),
            source_url: "https://github.com/plotly/Figure-Friday/blob/main/2024/week-30/rural-investments.csv".to_string(),
        }
    }
}

/// Selectable options for the UI controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Tab ids: "All" followed by program areas in first-seen order
    pub tabs: Vec<String>,
    pub dimensions: Vec<Dimension>,
    pub initial: Selection,
    pub page: PageText,
}
