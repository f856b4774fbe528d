//! Success payloads.

use axum::http::StatusCode;
use axum::Json;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};

/// `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> Json<Message> {
    Json(Message {
        message: text.into(),
    })
}

/// Render a stored document as JSON.
///
/// Object ids become plain hex strings; everything else uses relaxed
/// extended JSON.
pub fn document(doc: Document) -> Value {
    Bson::Document(doc).into_relaxed_extjson()
}

/// Render an identifier: hex for object ids, relaxed extended JSON otherwise.
pub fn id(id: &Bson) -> Value {
    match id {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.clone().into_relaxed_extjson(),
    }
}

pub fn list(docs: Vec<Document>) -> Json<Vec<Value>> {
    Json(docs.into_iter().map(with_hex_id).map(document).collect())
}

pub fn single(doc: Document) -> Json<Value> {
    Json(document(with_hex_id(doc)))
}

/// 201 with a confirmation, the new identifier and the stored fields.
pub fn created(text: &str, new_id: &Bson, fields: Map<String, Value>) -> (StatusCode, Json<Value>) {
    let mut body = Map::with_capacity(fields.len() + 2);
    body.insert("message".to_string(), Value::String(text.to_string()));
    body.insert("id".to_string(), id(new_id));
    body.extend(fields);

    (StatusCode::CREATED, Json(Value::Object(body)))
}

fn with_hex_id(mut doc: Document) -> Document {
    if let Ok(oid) = doc.get_object_id("_id") {
        doc.insert("_id", oid.to_hex());
    }
    doc
}
