//! Update and read handlers.
//!
//! Updates are fully validated here (kind, value, name) before the store is
//! called; a rejected request never reaches it.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use memstat_core::render::{render_json, render_text};
use memstat_core::{MemstatError, UpdateRequest};

use crate::app_state::AppState;
use crate::transport::ApiError;

/// `POST /update/:type/:name/:value`
pub async fn update(
    State(app): State<AppState>,
    Path(req): Path<UpdateRequest>,
) -> Result<StatusCode, ApiError> {
    let metric = req
        .into_metric(app.cfg().server.max_name_len)
        .map_err(|e| {
            tracing::debug!(error = %e, "update rejected");
            ApiError::from(e)
        })?;

    app.store().add(metric);
    Ok(StatusCode::OK)
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    pub format: Option<String>,
}

/// `GET /metrics[?format=text|json]`
pub async fn metrics(
    State(app): State<AppState>,
    Query(q): Query<MetricsQuery>,
) -> Result<Response, ApiError> {
    let snapshot = app.store().get();

    match q.format.as_deref() {
        None | Some("text") => Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_text(&snapshot),
        )
            .into_response()),
        Some("json") => Ok((
            [(header::CONTENT_TYPE, "application/json")],
            render_json(&snapshot)?,
        )
            .into_response()),
        Some(other) => Err(MemstatError::BadRequest(format!("unknown format: {other}")).into()),
    }
}
