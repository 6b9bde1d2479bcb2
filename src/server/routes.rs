use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use crate::category::Category;
use crate::server::AppState;
use crate::Error;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct QuestionParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiResult = Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)>;

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidCategory(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    (status_for(&err), Json(ErrorResponse { error: err.to_string() }))
}

fn to_json<T: Serialize>(value: T) -> ApiResult {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() })))
}

pub async fn list_topics(State(state): State<Arc<AppState>>) -> ApiResult {
    to_json(state.catalog.entries())
}

pub async fn get_topic(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
    let entry = state.catalog.get_by_id(&id).map_err(reject)?;
    to_json(entry)
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult {
    to_json(state.catalog.categories())
}

pub async fn list_category(State(state): State<Arc<AppState>>, Path(category): Path<String>) -> ApiResult {
    let entries = state.catalog.list_by_category_name(&category).map_err(reject)?;
    to_json(entries)
}

pub async fn search(State(state): State<Arc<AppState>>, Query(params): Query<SearchParams>) -> ApiResult {
    let limit = params.limit.unwrap_or(state.search_limit);
    let hits: Vec<_> = state.catalog.search(params.q.as_deref().unwrap_or_default()).into_iter().take(limit).collect();
    to_json(hits)
}

pub async fn questions(State(state): State<Arc<AppState>>, Query(params): Query<QuestionParams>) -> ApiResult {
    let category = params
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(reject)?;

    let pairs: Vec<_> = state
        .catalog
        .questions(category)
        .into_iter()
        .map(|(entry, q)| {
            serde_json::json!({
                "id": entry.id,
                "title": entry.title,
                "category": entry.category,
                "question": q.question,
                "answer": q.answer,
            })
        })
        .collect();
    to_json(pairs)
}
