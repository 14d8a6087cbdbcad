use super::api::{ApiError, ApiSuccess};
use crate::domain::models::RenderMapError;
use crate::domain::ports::QuakeMapService;
use crate::inbound::AppState;

use quake_core::{LegendRow, MarkerDescriptor, error_page};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// A failed render pass, answered with a readable HTML page instead of a map.
#[derive(Debug, Error)]
#[error(transparent)]
pub(super) struct PageError(#[from] RenderMapError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RenderMapError::Feed(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::error!(status = status.as_u16(), "{}", self.0);

        (status, Html(error_page(&self.0.to_string()))).into_response()
    }
}

/// Render the interactive earthquake map.
///
/// # Responses
///
/// - 200 OK: the Leaflet page.
/// - 502 Bad Gateway: the feed could not be loaded; the body explains why.
pub(super) async fn map_page_handler<QS: QuakeMapService>(
    State(state): State<AppState<QS>>,
) -> Result<Html<String>, PageError> {
    let page = state.map_service.render_page().await?;

    Ok(Html(page.into_html()))
}

/// Render a static SVG snapshot of the earthquake map.
pub(super) async fn map_snapshot_handler<QS: QuakeMapService>(
    State(state): State<AppState<QS>>,
) -> Result<impl IntoResponse, PageError> {
    let snapshot = state.map_service.render_snapshot().await?;

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        snapshot.to_svg_string(),
    ))
}

/// List the markers of the current feed.
///
/// # Responses
///
/// - 200 OK: every marker descriptor.
/// - 502 Bad Gateway: the feed could not be loaded.
pub(super) async fn markers_handler<QS: QuakeMapService>(
    State(state): State<AppState<QS>>,
) -> Result<ApiSuccess<Vec<MarkerDescriptor>>, ApiError> {
    state
        .map_service
        .markers()
        .await
        .map_err(ApiError::from)
        .map(|markers| ApiSuccess::new(StatusCode::OK, markers))
}

/// List the depth legend rows.
pub(super) async fn legend_handler<QS: QuakeMapService>(
    State(state): State<AppState<QS>>,
) -> ApiSuccess<Vec<LegendRow>> {
    ApiSuccess::new(StatusCode::OK, state.map_service.legend())
}
