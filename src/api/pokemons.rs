//! Read-only pokemon queries.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use mongodb::bson::Bson;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::params::{self, LimitQuery};
use super::response;
use super::AppState;
use crate::database::models::pokemon::{
    ENGLISH_NAME, FRENCH_NAME, HEIGHT, HP, NEXT_EVOLUTIONS, TYPE, WEIGHT,
};
use crate::database::models::Pokemons;
use crate::query::{self, filter, pipeline, TopN};

const TOP_WEIGHT_LIMIT: i64 = 10;
const TOP_HEIGHT_LIMIT: i64 = 4;
const TOP_NAME_LENGTH_LIMIT: i64 = 5;
const TOP_TYPES_LIMIT: i64 = 10;

/// `?name=&type=`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `?types=a,b`
#[derive(Debug, Default, Deserialize)]
pub struct TypesQuery {
    pub types: Option<String>,
}

type ListResult = ApiResult<Json<Vec<Value>>>;

/// `GET /pokemons/type/:type` - exact type name.
pub async fn by_type(State(state): State<AppState>, Path(kind): Path<String>) -> ListResult {
    let docs = state
        .repository::<Pokemons>()
        .find(filter::equals(TYPE, kind), None)
        .await?;
    Ok(response::list(docs))
}

/// `GET /pokemons/with-min-types/:min`
pub async fn with_min_types(State(state): State<AppState>, Path(min): Path<String>) -> ListResult {
    let min = query::positive_int("min", &min)?;

    let docs = state
        .repository::<Pokemons>()
        .find(filter::min_array_len(TYPE, min), None)
        .await?;
    Ok(response::list(docs))
}

/// `GET /pokemons/filter?name=&type=`
///
/// `name` matches the English or French name. Both are substring matches,
/// case-insensitive; an absent parameter adds no constraint.
pub async fn search(State(state): State<AppState>, search: Result<Query<SearchQuery>, QueryRejection>) -> ListResult {
    let search = params::query(search)?;
    let mut filters = Vec::with_capacity(2);
    if let Some(name) = params::non_blank(search.name.as_deref()) {
        filters.push(filter::any_of(vec![
            filter::contains_ignore_case(ENGLISH_NAME, name),
            filter::contains_ignore_case(FRENCH_NAME, name),
        ]));
    }
    if let Some(kind) = params::non_blank(search.kind.as_deref()) {
        filters.push(filter::contains_ignore_case(TYPE, kind));
    }

    let docs = state
        .repository::<Pokemons>()
        .aggregate(pipeline::match_each(filters))
        .await?;
    Ok(response::list(docs))
}

/// `GET /pokemons/top-weight?limit=`
pub async fn top_weight(State(state): State<AppState>, q: Result<Query<LimitQuery>, QueryRejection>) -> ListResult {
    let q = params::query(q)?;
    top_by(state, TopN::by(WEIGHT), q.limit.as_deref(), TOP_WEIGHT_LIMIT).await
}

/// `GET /pokemons/top-height?limit=`
pub async fn top_height(State(state): State<AppState>, q: Result<Query<LimitQuery>, QueryRejection>) -> ListResult {
    let q = params::query(q)?;
    top_by(state, TopN::by(HEIGHT), q.limit.as_deref(), TOP_HEIGHT_LIMIT).await
}

/// `GET /pokemons/top-french-name-length?limit=`
pub async fn top_french_name_length(
    State(state): State<AppState>,
    q: Result<Query<LimitQuery>, QueryRejection>,
) -> ListResult {
    let q = params::query(q)?;
    let ranking = TopN::by_string_length(FRENCH_NAME, "frenchNameLength");
    top_by(state, ranking, q.limit.as_deref(), TOP_NAME_LENGTH_LIMIT).await
}

async fn top_by(state: AppState, ranking: TopN, limit: Option<&str>, default: i64) -> ListResult {
    let limit = query::positive_int_or("limit", limit, default)?;

    let docs = state
        .repository::<Pokemons>()
        .aggregate(ranking.limit(limit).build())
        .await?;
    Ok(response::list(docs))
}

/// `GET /pokemons/without-evolution?types=a,b`
///
/// Pokemon of any of the listed types with no next evolution.
pub async fn without_evolution(
    State(state): State<AppState>,
    q: Result<Query<TypesQuery>, QueryRejection>,
) -> ListResult {
    let q = params::query(q)?;
    let types = params::comma_list(q.types.as_deref());
    if types.is_empty() {
        return Err(ApiError::MissingParameter("types"));
    }

    let filter = filter::all_of(vec![
        filter::one_of(TYPE, types),
        filter::missing_or_empty(NEXT_EVOLUTIONS),
    ]);

    let docs = state.repository::<Pokemons>().find(filter, None).await?;
    Ok(response::list(docs))
}

/// `GET /pokemons/stats/hp/average` - `{ "averageHp": number | null }`
pub async fn hp_average(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    const OUTPUT: &str = "averageHp";

    let docs = state
        .repository::<Pokemons>()
        .aggregate(pipeline::rounded_average(HP, OUTPUT))
        .await?;

    let average = docs
        .into_iter()
        .next()
        .and_then(|mut doc| doc.remove(OUTPUT))
        .map(Bson::into_relaxed_extjson)
        .unwrap_or(Value::Null);

    Ok(Json(json!({ "averageHp": average })))
}

/// `GET /pokemons/stats/types/top?limit=` - `[{ "type", "count" }]`
pub async fn top_types(State(state): State<AppState>, q: Result<Query<LimitQuery>, QueryRejection>) -> ListResult {
    let q = params::query(q)?;
    let limit = query::positive_int_or("limit", q.limit.as_deref(), TOP_TYPES_LIMIT)?;

    let docs = state
        .repository::<Pokemons>()
        .aggregate(pipeline::frequency(TYPE, "type", limit))
        .await?;
    Ok(response::list(docs))
}
