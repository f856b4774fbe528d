//! Aggregation pipelines.

use mongodb::bson::{doc, Document};

use super::filter;

/// Ranking pipeline: keep documents with a numeric value, sort descending,
/// take N. Strings such as `"6.9 kg"` never outrank numbers.
///
/// With [`TopN::by_string_length`] the ranking key is the code-point length
/// of a string field, stored on each result under `output`.
#[derive(Debug, Clone)]
pub struct TopN {
    field: String,
    limit: i64,
    length_of: Option<String>,
}

impl TopN {
    /// Rank by a numeric field. Default limit is 10.
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            limit: 10,
            length_of: None,
        }
    }

    /// Rank by the length of `source`, written to the derived field `output`.
    pub fn by_string_length(source: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            field: output.into(),
            limit: 10,
            length_of: Some(source.into()),
        }
    }

    /// Set the number of documents to keep.
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(&self) -> Vec<Document> {
        let mut stages = Vec::with_capacity(4);

        match &self.length_of {
            Some(source) => {
                stages.push(doc! { "$match": filter::has_type(source, "string") });
                stages.push(doc! {
                    "$addFields": { self.field.as_str(): { "$strLenCP": format!("${source}") } }
                });
            }
            None => stages.push(doc! { "$match": filter::has_type(&self.field, "number") }),
        }

        stages.push(doc! { "$sort": { self.field.as_str(): -1, "_id": 1 } });
        stages.push(doc! { "$limit": self.limit });
        stages
    }
}

/// Most frequent values of an array field: `[{ <output>: value, count }]`,
/// most frequent first, ties broken by value.
pub fn frequency(field: &str, output: &str, limit: i64) -> Vec<Document> {
    vec![
        doc! { "$unwind": format!("${field}") },
        doc! { "$group": { "_id": format!("${field}"), "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1, "_id": 1 } },
        doc! { "$limit": limit },
        doc! { "$project": { "_id": 0, output: "$_id", "count": 1 } },
    ]
}

/// Mean of a numeric field over the whole collection, rounded to 2 decimals.
///
/// Produces a single `{ <output>: number }` document, or nothing on an empty
/// collection. Non-numeric and missing values are ignored by `$avg`.
pub fn rounded_average(field: &str, output: &str) -> Vec<Document> {
    let accumulated = format!("${output}");
    vec![
        doc! { "$group": { "_id": null, output: { "$avg": format!("${field}") } } },
        doc! { "$project": { "_id": 0, output: { "$round": [accumulated, 2] } } },
    ]
}

/// One `$match` stage per filter, so an absent parameter adds no stage.
pub fn match_each(filters: Vec<Document>) -> Vec<Document> {
    filters
        .into_iter()
        .map(|filter| doc! { "$match": filter })
        .collect()
}
