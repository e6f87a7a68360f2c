use std::collections::HashMap;

use serde::Serialize;

use crate::parser::columns::{category_aliases, resolve_dynamic, resolve_value};
use crate::parser::types::Row;

/// Bucket name used when no source column yields a value for a row.
pub const UNKNOWN_BUCKET: &str = "Unknown";

/// One bucket of a category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPoint {
    pub name: String,
    pub value: usize,
}

/// Count rows grouped by a logical category.
///
/// The category resolves to source columns through the well-known alias
/// tables, or through literal/lowercase/capitalized lookups for any other
/// key. Values are trimmed but never case-folded, so "Acme" and "acme"
/// stay distinct buckets. Rows with no resolvable value land in the
/// "Unknown" bucket, so bucket counts always sum to the input length.
/// Output order is unspecified.
pub fn category_breakdown(rows: &[Row], category: &str) -> Vec<CategoryPoint> {
    if rows.is_empty() || category.is_empty() {
        return Vec::new();
    }

    let aliases = category_aliases(category);
    let mut buckets: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let value = match aliases {
            Some(candidates) => resolve_value(row, candidates),
            None => resolve_dynamic(row, category),
        };
        let name = match value {
            Some(v) => v.trim().to_string(),
            None => UNKNOWN_BUCKET.to_string(),
        };
        *buckets.entry(name).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(name, value)| CategoryPoint { name, value })
        .collect()
}
