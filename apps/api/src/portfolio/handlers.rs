//! Read side of the API: the template catalog, published portfolios, and
//! the resume layout/export endpoints.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::find_template;
use crate::errors::AppError;
use crate::layout::{layout_resume, PositionedBlock};
use crate::models::record::UserRecord;
use crate::models::template::Template;
use crate::portfolio::{fetch_by_slug, record_from_row};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PortfolioView {
    pub id: Uuid,
    pub slug: String,
    pub template_id: String,
    /// The record as the public page shows it: placeholder rows that fail
    /// the display filter are removed.
    pub record: UserRecord,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub slug: String,
    pub blocks: Vec<PositionedBlock>,
}

/// GET /api/v1/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.catalog.to_vec())
}

/// GET /api/v1/templates/:id
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    find_template(&state.catalog, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no template with id '{id}'")))
}

/// GET /api/v1/portfolios/:slug
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PortfolioView>, AppError> {
    let row = fetch_by_slug(&state.db, &slug).await?;
    let record = record_from_row(&row)?;
    Ok(Json(PortfolioView {
        id: row.id,
        slug: row.slug,
        template_id: row.template_id,
        record: record.public_view(),
        created_at: row.created_at,
    }))
}

/// GET /api/v1/portfolios/:slug/resume/layout
///
/// The positioned-block preview: the same geometry the exporter renders,
/// exposed as JSON so clients can draw the document themselves.
pub async fn get_resume_layout(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LayoutResponse>, AppError> {
    let row = fetch_by_slug(&state.db, &slug).await?;
    let record = record_from_row(&row)?;
    let blocks = layout_resume(&record, &state.page_config);
    Ok(Json(LayoutResponse {
        slug: row.slug,
        blocks,
    }))
}

/// GET /api/v1/portfolios/:slug/resume
///
/// Renders the resume through the configured export backend and serves it
/// as a download named after the portfolio owner.
pub async fn download_resume(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let row = fetch_by_slug(&state.db, &slug).await?;
    let record = record_from_row(&row)?;
    let blocks = layout_resume(&record, &state.page_config);
    let body = state.exporter.render(&record, &blocks).await?;

    let filename = format!(
        "{}_Resume.{}",
        record.name.split_whitespace().collect::<Vec<_>>().join("_"),
        state.exporter.file_extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, state.exporter.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}
