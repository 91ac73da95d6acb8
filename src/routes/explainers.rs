//! Read-only JSON view of the explainer catalog.

#[cfg(test)]
#[path = "explainers_test.rs"]
mod explainers_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use content::catalog::Surface;
use content::{DisplayRecord, ExplainerKind};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExplainerSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub surface: Surface,
    pub keys: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TaggedRecord {
    pub tag: &'static str,
    #[serde(flatten)]
    pub record: DisplayRecord,
}

#[derive(Debug, Serialize)]
pub struct ExplainerDetail {
    pub slug: &'static str,
    pub title: &'static str,
    pub surface: Surface,
    pub records: Vec<TaggedRecord>,
}

/// `GET /api/explainers`: every explainer with its record keys.
pub async fn list_explainers(State(state): State<AppState>) -> Json<Vec<ExplainerSummary>> {
    let summaries = ExplainerKind::ALL
        .iter()
        .map(|kind| ExplainerSummary {
            slug: kind.slug(),
            title: kind.title(),
            surface: kind.surface(),
            keys: state.catalog.records(*kind).into_iter().map(|(tag, _)| tag).collect(),
        })
        .collect();
    Json(summaries)
}

/// `GET /api/explainers/:slug`: records in declaration order.
pub async fn get_explainer(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ExplainerDetail>, StatusCode> {
    let kind = ExplainerKind::from_slug(&slug).ok_or(StatusCode::NOT_FOUND)?;
    let records = state
        .catalog
        .records(kind)
        .into_iter()
        .map(|(tag, record)| TaggedRecord { tag, record })
        .collect();
    Ok(Json(ExplainerDetail { slug: kind.slug(), title: kind.title(), surface: kind.surface(), records }))
}

/// `GET /api/explainers/:slug/records/:tag`: one record, or 404 when absent.
pub async fn get_record(
    State(state): State<AppState>,
    Path((slug, tag)): Path<(String, String)>,
) -> Result<Json<DisplayRecord>, StatusCode> {
    let kind = ExplainerKind::from_slug(&slug).ok_or(StatusCode::NOT_FOUND)?;
    let record = state.catalog.lookup(kind, &tag).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(record))
}
