//! Risk and deadline alerts for free-form contract text.
//!
//! Text is split into sentences; each sentence is matched against a risk
//! keyword table and a small set of Portuguese deadline phrases. Relative
//! deadlines are resolved from a caller-supplied reference date and graded
//! against a caller-supplied "today". No I/O, no clock.

pub mod alert;
pub mod business_days;
pub mod classify;
pub mod engine;
pub mod error;
pub mod extract;
pub mod rules;
pub mod schema;
pub mod segment;
pub mod status;

pub use alert::{AnalysisResult, DeadlineAlert, PLACEHOLDER_CONFIDENCE, RiskAlert, SkippedSentence};
pub use engine::{Engine, EngineConfig, process_contract};
pub use error::{ExtractError, RuleError};
pub use extract::{Deadline, DeadlineKind};
pub use rules::{RiskRule, RiskRuleTable};
pub use schema::alerts;
pub use status::{DEFAULT_ALERT_WINDOW_DAYS, DeadlineStatus};
