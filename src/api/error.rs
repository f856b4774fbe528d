//! API error type and its JSON rendering.
//!
//! Every failure becomes `{ "error": "<message>" }` with a 400, 404 or 500
//! status. Unknown update fields are listed under `invalidFields`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::query::ParamError;

/// Failure of a single request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid {label} id `{id}`.")]
    InvalidId { label: &'static str, id: String },

    #[error(transparent)]
    InvalidParameter(#[from] ParamError),

    #[error("Missing required parameter `{0}`.")]
    MissingParameter(&'static str),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Field names must not start with `$`: {0:?}")]
    ReservedFields(Vec<String>),

    #[error("The `_id` field is assigned by the database and cannot be set.")]
    ImmutableField,

    #[error("Some fields do not exist on this {label}.")]
    UnknownFields {
        label: &'static str,
        fields: Vec<String>,
    },

    #[error("No {label} found with this id.")]
    NotFound { label: &'static str },

    #[error("No route for {0}.")]
    NoRoute(String),

    #[error("{0}")]
    Store(#[from] mongodb::error::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::NoRoute(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl From<mongodb::bson::ser::Error> for ApiError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        Self::InvalidBody(e.to_string())
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    invalid_fields: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Store fault: {}", self);
        } else {
            debug!("Rejected request ({}): {}", status, self);
        }

        let error = self.to_string();
        let invalid_fields = match self {
            Self::UnknownFields { fields, .. } => Some(fields),
            _ => None,
        };

        (status, Json(ErrorBody { error, invalid_fields })).into_response()
    }
}
