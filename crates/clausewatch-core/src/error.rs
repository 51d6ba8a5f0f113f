use chrono::NaiveDate;
use thiserror::Error;

/// Rule-table validation failure. Fatal to engine construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule table is empty")]
    EmptyTable,

    #[error("risk type {0:?} must be non-empty and use only A-Z, 0-9 and '_'")]
    InvalidRiskType(String),

    #[error("risk type {0} appears more than once")]
    DuplicateRiskType(String),

    #[error("risk type {0} has no keywords")]
    NoKeywords(String),

    #[error("risk type {0} has a blank keyword")]
    BlankKeyword(String),

    #[error("rule table JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for RuleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// A deadline phrase was found in a sentence but could not be resolved to a date.
///
/// Scoped to one sentence: the engine records it and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid calendar date {day}/{month}/{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    #[error("count {0:?} is out of range")]
    CountOutOfRange(String),

    #[error("{count} {unit} from {from} is past the supported calendar range")]
    DateOverflow {
        from: NaiveDate,
        count: u32,
        unit: &'static str,
    },
}
