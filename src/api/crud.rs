//! Generic CRUD handlers.
//!
//! Instantiated once per collection, e.g. `get(crud::list::<Films>)`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mongodb::bson::doc;
use serde_json::Value;
use tracing::{debug, info};

use super::error::{ApiError, ApiResult};
use super::params::{self, PageQuery};
use super::response::{self, Message};
use super::AppState;
use crate::database::Resource;
use crate::query::Page;

/// `GET /<collection>?page=N`
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Value>>> {
    let query = params::query(query)?;
    let page = Page::parse(query.page.as_deref())?;
    debug!("Listing {} page {}", R::COLLECTION, page.number());

    let docs = state
        .repository::<R>()
        .find(doc! {}, Some(page.find_options()))
        .await?;

    Ok(response::list(docs))
}

/// `GET /<collection>/:id`
pub async fn fetch<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = params::object_id::<R>(&id)?;

    let doc = state
        .repository::<R>()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound { label: R::LABEL })?;

    Ok(response::single(doc))
}

/// `POST /<collection>` with the full record (without `_id`).
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let fields = params::json_object(body)?;
    params::writable_fields(&fields)?;
    let document = params::to_document(&fields)?;

    let id = state.repository::<R>().insert(document).await?;
    info!("Created {} {}", R::LABEL, id);

    Ok(response::created(
        &format!("{} created successfully.", capitalized(R::LABEL)),
        &id,
        fields,
    ))
}

/// `PUT /<collection>/:id` with a subset of the record's existing fields.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Message>> {
    let id = params::object_id::<R>(&id)?;
    let fields = params::json_object(body)?;
    if fields.is_empty() {
        return Err(ApiError::InvalidBody("no fields to update".to_string()));
    }
    params::writable_fields(&fields)?;
    let changes = params::to_document(&fields)?;

    let repo = state.repository::<R>();
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound { label: R::LABEL })?;

    let unknown: Vec<String> = fields
        .keys()
        .filter(|key| !existing.contains_key(key.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ApiError::UnknownFields {
            label: R::LABEL,
            fields: unknown,
        });
    }

    if repo.set_fields(id, changes).await? == 0 {
        return Err(ApiError::NotFound { label: R::LABEL });
    }
    info!("Updated {} {}", R::LABEL, id);

    Ok(response::message(format!("{} updated successfully.", capitalized(R::LABEL))))
}

/// `DELETE /<collection>/:id`
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Message>> {
    let id = params::object_id::<R>(&id)?;

    if !state.repository::<R>().delete(id).await? {
        return Err(ApiError::NotFound { label: R::LABEL });
    }
    info!("Deleted {} {}", R::LABEL, id);

    Ok(response::message(format!("{} deleted successfully.", capitalized(R::LABEL))))
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
