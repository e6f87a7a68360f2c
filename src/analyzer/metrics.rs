use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::parser::columns::{resolve_value, STATUS_COLUMNS};
use crate::parser::types::Row;

/// Headline counters for an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub resolved_tickets: usize,
}

/// Classify every row by status with the default vocabularies.
pub fn compute_metrics(rows: &[Row]) -> Metrics {
    compute_metrics_with(rows, &AnalysisConfig::default())
}

/// Classify every row by status in one linear pass.
///
/// The status is the first non-empty `Status`/`status` cell. Rows whose
/// status is missing or matches neither vocabulary count toward the total
/// only, so `open + resolved <= total` always holds.
pub fn compute_metrics_with(rows: &[Row], config: &AnalysisConfig) -> Metrics {
    let mut metrics = Metrics {
        total_tickets: rows.len(),
        ..Metrics::default()
    };
    for row in rows {
        let status = resolve_value(row, STATUS_COLUMNS).unwrap_or("");
        if config.is_open(status) {
            metrics.open_tickets += 1;
        } else if config.is_resolved(status) {
            metrics.resolved_tickets += 1;
        }
    }
    metrics
}
