use serde::{Deserialize, Serialize};

/// Status vocabularies used by the metrics classification.
///
/// Defaults mirror the vocabulary of the ticket exports this crate was
/// built around; callers with a different workflow substitute their own
/// sets. Matching is ASCII case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    pub open_statuses: Vec<String>,
    pub resolved_statuses: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            open_statuses: vec![
                "open".into(),
                "in review".into(),
                "hold".into(),
                "in progress".into(),
            ],
            resolved_statuses: vec!["closed".into()],
        }
    }
}

impl AnalysisConfig {
    pub fn is_open(&self, status: &str) -> bool {
        self.open_statuses
            .iter()
            .any(|s| s.eq_ignore_ascii_case(status))
    }

    pub fn is_resolved(&self, status: &str) -> bool {
        self.resolved_statuses
            .iter()
            .any(|s| s.eq_ignore_ascii_case(status))
    }
}
