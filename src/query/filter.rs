//! Filter documents.

use mongodb::bson::{doc, Bson, Document};

/// Exact, case-sensitive match. On array fields this matches any element.
pub fn equals(field: &str, value: impl Into<Bson>) -> Document {
    let value: Bson = value.into();
    doc! { field: value }
}

/// Case-insensitive substring match. The text is matched literally.
pub fn contains_ignore_case(field: &str, text: &str) -> Document {
    doc! {
        field: {
            "$regex": regex::escape(text),
            "$options": "i",
        }
    }
}

/// Field value (or, on arrays, any element) is one of `values`.
pub fn one_of<I, S>(field: &str, values: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    doc! { field: { "$in": values } }
}

/// Field exists and holds a value of the BSON type alias `kind` (`"number"`,
/// `"string"`, ...). Missing and null values never match.
pub fn has_type(field: &str, kind: &str) -> Document {
    doc! { field: { "$type": kind } }
}

/// Field is missing, null, or an empty array.
pub fn missing_or_empty(field: &str) -> Document {
    doc! {
        "$or": [
            { field: null },
            { field: { "$size": 0 } },
        ]
    }
}

/// Array field holds at least `min` elements. A missing or non-array field
/// counts as empty.
pub fn min_array_len(field: &str, min: i64) -> Document {
    let path = format!("${field}");
    doc! {
        "$expr": {
            "$gte": [
                { "$cond": [{ "$isArray": path.as_str() }, { "$size": path.as_str() }, 0] },
                min,
            ]
        }
    }
}

/// At least one of `filters` matches.
pub fn any_of(filters: Vec<Document>) -> Document {
    doc! { "$or": filters }
}

/// Every one of `filters` matches. No filters matches everything.
pub fn all_of(mut filters: Vec<Document>) -> Document {
    match filters.len() {
        0 => Document::new(),
        1 => filters.remove(0),
        _ => doc! { "$and": filters },
    }
}
