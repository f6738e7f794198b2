//! Menu routes — HTML pages and the JSON cell listing.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Deserialize;

use crate::grid::{Cell, GridError};
use crate::page::{Layout, PageView, RenderError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CellsQuery {
    #[serde(default)]
    pub layout: Layout,
}

pub(crate) fn grid_error_to_status(err: GridError) -> StatusCode {
    tracing::error!(error = %err, "cell population failed");
    match err {
        GridError::InvalidArgument(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn render_error_to_status(err: RenderError) -> StatusCode {
    tracing::error!(error = %err, "menu render failed");
    match err {
        RenderError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn render_layout(state: &AppState, layout: Layout) -> Result<Html<String>, StatusCode> {
    let cells = state.cells(layout).map_err(grid_error_to_status)?;
    let view = PageView::new(layout, &cells, state.config.matrix.columns);
    let html = state.renderer.render(&view).map_err(render_error_to_status)?;
    tracing::debug!(?layout, cells = cells.len(), "rendered menu");
    Ok(Html(html))
}

/// `GET /` — card layout, one card per concession.
pub async fn cards_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_layout(&state, Layout::Cards)
}

/// `GET /matriz` — fixed rows × columns matrix with reserved cells.
pub async fn matrix_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_layout(&state, Layout::Matrix)
}

/// `GET /api/cells?layout=cards|matrix` — populated cells as JSON.
pub async fn list_cells(
    State(state): State<AppState>,
    Query(query): Query<CellsQuery>,
) -> Result<Json<Vec<Cell>>, StatusCode> {
    let cells = state.cells(query.layout).map_err(grid_error_to_status)?;
    Ok(Json(cells))
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
