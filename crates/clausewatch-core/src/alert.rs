//! Alert types produced by an analysis run.
//!
//! Serialised as JSON by callers; dates use ISO 8601 (`YYYY-MM-DD`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extract::DeadlineKind;
use crate::status::DeadlineStatus;

/// Fixed confidence attached to every risk alert.
///
/// Placeholder: keyword matching produces no real probability.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.9;

/// A sentence that matched a risk category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub risk_type: String,
    pub source_sentence: String,
    pub confidence: f32,
}

/// A sentence carrying a time obligation, resolved to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineAlert {
    pub event_label: String,
    pub kind: DeadlineKind,
    pub deadline: NaiveDate,
    pub status: DeadlineStatus,
    pub days_remaining: i64,
    pub source_sentence: String,
}

/// A sentence whose deadline phrase could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSentence {
    pub source_sentence: String,
    pub reason: String,
}

/// Everything found in one document.
///
/// `risk_alerts` follow sentence order; `deadline_alerts` are sorted by
/// `deadline`, ties in sentence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_name: String,
    pub risk_alerts: Vec<RiskAlert>,
    pub deadline_alerts: Vec<DeadlineAlert>,
    #[serde(default)]
    pub skipped_sentences: Vec<SkippedSentence>,
}

impl AnalysisResult {
    pub fn empty(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            risk_alerts: Vec::new(),
            deadline_alerts: Vec::new(),
            skipped_sentences: Vec::new(),
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_sentences.len()
    }

    /// Deadline alerts with the given status, in deadline order.
    pub fn deadlines_with_status(
        &self,
        status: DeadlineStatus,
    ) -> impl Iterator<Item = &DeadlineAlert> {
        self.deadline_alerts.iter().filter(move |a| a.status == status)
    }
}
