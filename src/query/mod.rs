//! Query builders.
//!
//! Pure translation of request parameters into filter documents, find
//! options and aggregation pipelines. Nothing here touches the database.

pub mod filter;
pub mod pagination;
pub mod pipeline;

use thiserror::Error;

pub use pagination::Page;
pub use pipeline::TopN;

/// A numeric request parameter that is malformed or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter `{name}` must be a positive integer, got `{value}`.")]
pub struct ParamError {
    pub name: &'static str,
    pub value: String,
}

/// Parse a required positive integer.
pub fn positive_int(name: &'static str, raw: &str) -> Result<i64, ParamError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ParamError {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Parse an optional positive integer, falling back to `default` when the
/// parameter is absent or empty.
pub fn positive_int_or(name: &'static str, raw: Option<&str>, default: i64) -> Result<i64, ParamError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => positive_int(name, raw),
        None => Ok(default),
    }
}
