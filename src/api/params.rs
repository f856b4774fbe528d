//! Request parameter parsing shared by the handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{ApiError, ApiResult};
use crate::database::Resource;

/// `?page=N`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// `?limit=N`
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

/// Unwrap a query string, turning a malformed one into a JSON 400.
pub fn query<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    let Query(value) = query?;
    Ok(value)
}

/// Parse a path identifier for `R`.
pub fn object_id<R: Resource>(raw: &str) -> ApiResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId {
        label: R::LABEL,
        id: raw.to_string(),
    })
}

/// Unwrap a JSON body that must be an object.
pub fn json_object(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Map<String, Value>> {
    match body? {
        Json(Value::Object(map)) => Ok(map),
        Json(other) => Err(ApiError::InvalidBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Reject field names the client may not write: `_id` and operator-like
/// names starting with `$`.
pub fn writable_fields(fields: &Map<String, Value>) -> ApiResult<()> {
    if fields.contains_key("_id") {
        return Err(ApiError::ImmutableField);
    }

    let reserved: Vec<String> = fields
        .keys()
        .filter(|key| key.starts_with('$'))
        .cloned()
        .collect();
    if !reserved.is_empty() {
        return Err(ApiError::ReservedFields(reserved));
    }

    Ok(())
}

/// Convert JSON fields to a BSON document.
pub fn to_document(fields: &Map<String, Value>) -> ApiResult<Document> {
    Ok(mongodb::bson::to_document(fields)?)
}

/// Split `a,b,c` into trimmed, non-empty items.
pub fn comma_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Treat empty or blank text as absent.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
