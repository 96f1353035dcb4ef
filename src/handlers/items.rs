//! Item CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::{ItemBody, NAME_MAX_LEN};
use crate::state::AppState;
use crate::store::{ItemStore, PER_PAGE_MAX};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const PER_PAGE_DEFAULT: u32 = 20;

/// Lenient request payload: absent or malformed bodies decode to all-None.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct ListBody {
    pub items: Vec<ItemBody>,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
}

#[derive(Serialize)]
pub struct DeleteBody {
    pub message: &'static str,
    pub id: i64,
}

/// The path converter: a non-integer id segment is an unmatched route, not
/// a bad request.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::RouteNotFound)
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("Field 'name' is required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Field 'name' must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(())
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListBody>, AppError> {
    // Malformed numeric params default silently rather than fail.
    let page: u32 = params
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
        .max(1);
    let per_page: u32 = params
        .get("per_page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(PER_PAGE_DEFAULT)
        .clamp(1, PER_PAGE_MAX);

    let (items, total) = ItemStore::list(&state.pool, page, per_page).await?;
    Ok(Json(ListBody {
        items: items.iter().map(|i| i.to_body()).collect(),
        total,
        page,
        pages: total.div_ceil(per_page as u64),
    }))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<ItemPayload>>,
) -> Result<(StatusCode, Json<ItemBody>), AppError> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    let name = payload.name.as_deref().unwrap_or("");
    validate_name(name)?;
    let description = payload.description.as_deref().unwrap_or("");

    let item = ItemStore::create(&state.pool, name, description).await?;
    Ok((StatusCode::CREATED, Json(item.to_body())))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<ItemBody>, AppError> {
    let id = parse_id(&id_str)?;
    let item = ItemStore::get(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Item"))?;
    Ok(Json(item.to_body()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<ItemPayload>>,
) -> Result<Json<ItemBody>, AppError> {
    let id = parse_id(&id_str)?;
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    if let Some(name) = payload.name.as_deref() {
        validate_name(name)?;
    }

    let item = ItemStore::update(
        &state.pool,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
    )
    .await?
    .ok_or(AppError::NotFound("Item"))?;
    Ok(Json(item.to_body()))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<DeleteBody>, AppError> {
    let id = parse_id(&id_str)?;
    if !ItemStore::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Item"));
    }
    Ok(Json(DeleteBody {
        message: "Deleted",
        id,
    }))
}
