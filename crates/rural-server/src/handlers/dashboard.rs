//! Dashboard view handlers
//!
//! Selections arrive as query parameters (`program`, `dimension`) or in the
//! event body; a missing program means "All" and a missing dimension means
//! "Program Area".

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppError, AppState};
use rural_core::{
    DashboardEvent, DashboardOptions, DashboardView, Dimension, EventOutcome, Figure,
    ProgramFilter, Selection,
};

/// Query parameters selecting a program-area tab
#[derive(Debug, Deserialize)]
pub struct ProgramQuery {
    pub program: Option<String>,
}

impl ProgramQuery {
    fn filter(&self) -> ProgramFilter {
        self.program
            .as_deref()
            .map(ProgramFilter::from)
            .unwrap_or_default()
    }
}

/// Query parameters selecting a tab and a bar-chart dimension
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub program: Option<String>,
    pub dimension: Option<String>,
}

impl SelectionQuery {
    fn selection(&self) -> Result<Selection, AppError> {
        Ok(Selection {
            program: self
                .program
                .as_deref()
                .map(ProgramFilter::from)
                .unwrap_or_default(),
            dimension: parse_dimension(self.dimension.as_deref())?,
        })
    }
}

/// Parse a bar-chart dimension, rejecting unknown names and non-bar columns
fn parse_dimension(value: Option<&str>) -> Result<Dimension, AppError> {
    let Some(value) = value else {
        return Ok(Dimension::default());
    };
    let dimension: Dimension = value.parse().map_err(|e: String| AppError::bad_request(&e))?;
    if !dimension.is_bar_choice() {
        return Err(AppError::bad_request(&format!(
            "{} is not a bar chart dimension (valid: Program Area, Investment Type)",
            dimension
        )));
    }
    Ok(dimension)
}

/// Map controller errors: bad selections are the client's fault
fn selection_error(err: rural_core::Error) -> AppError {
    match err {
        rural_core::Error::InvalidSelection(msg) => AppError::bad_request(&msg),
        other => AppError::from(other),
    }
}

/// GET /api/options - Tabs, dimensions and page text
pub async fn get_options(State(state): State<Arc<AppState>>) -> Json<DashboardOptions> {
    Json(state.dashboard.options())
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub program: ProgramFilter,
    /// Formatted total, e.g. "$1.23M"
    pub total: String,
    /// Unformatted sum in dollars
    pub amount: u64,
}

/// GET /api/total - Total investment for a tab
pub async fn get_total(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProgramQuery>,
) -> Json<TotalResponse> {
    let program = params.filter();
    let amount = state.dashboard.total(&program);
    Json(TotalResponse {
        total: rural_core::format_millions(amount),
        amount,
        program,
    })
}

/// GET /api/treemap - Investment by State and City for a tab
pub async fn get_treemap(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProgramQuery>,
) -> Json<Figure> {
    Json(state.dashboard.treemap(&params.filter()))
}

/// GET /api/bar - Investment by dimension for a tab, largest first
pub async fn get_bar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionQuery>,
) -> Result<Json<Figure>, AppError> {
    let selection = params.selection()?;
    Ok(Json(
        state
            .dashboard
            .bar_chart(&selection.program, selection.dimension),
    ))
}

/// GET /api/view - All three outputs for a selection
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let selection = params.selection()?;
    let view = state.dashboard.view(&selection).map_err(selection_error)?;
    Ok(Json(view))
}

/// Body for POST /api/events
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    /// Selection before the event
    #[serde(default)]
    pub selection: Selection,
    pub event: DashboardEvent,
}

/// POST /api/events - Apply a UI event and return the outputs it changes
pub async fn dispatch_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventRequest>,
) -> Result<Json<EventOutcome>, AppError> {
    debug!(event = ?request.event, "Dispatching dashboard event");
    let outcome = state
        .dashboard
        .handle(request.selection, request.event)
        .map_err(selection_error)?;
    Ok(Json(outcome))
}
