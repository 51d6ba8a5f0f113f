//! Alert assembly: runs every sentence through classification and deadline
//! extraction and collects the results for one document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::alert::{
    AnalysisResult, DeadlineAlert, PLACEHOLDER_CONFIDENCE, RiskAlert, SkippedSentence,
};
use crate::classify::classify;
use crate::extract::extract;
use crate::rules::RiskRuleTable;
use crate::segment::segment;
use crate::status::{DEFAULT_ALERT_WINDOW_DAYS, evaluate};

/// Per-engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deadlines this many days away or fewer are `Upcoming`.
    pub alert_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alert_window_days: DEFAULT_ALERT_WINDOW_DAYS,
        }
    }
}

/// Contract analysis engine.
///
/// Holds a validated rule table and its configuration, both read-only.
/// `process_*` calls share no mutable state and may run concurrently.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RiskRuleTable,
    config: EngineConfig,
}

impl Engine {
    pub fn new(rules: RiskRuleTable, config: EngineConfig) -> Self {
        Self { rules, config }
    }

    /// Engine with the built-in Portuguese rule table and default settings.
    pub fn pt_br() -> Self {
        Self::new(RiskRuleTable::default_pt_br(), EngineConfig::default())
    }

    /// Same configuration, different rule table.
    pub fn with_rules(&self, rules: RiskRuleTable) -> Self {
        Self::new(rules, self.config)
    }

    pub fn rules(&self) -> &RiskRuleTable {
        &self.rules
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Analyse `text`, resolving relative deadlines from `today`.
    pub fn process_contract(
        &self,
        text: &str,
        document_name: &str,
        today: NaiveDate,
    ) -> AnalysisResult {
        self.process_contract_at(text, document_name, today, today)
    }

    /// Analyse `text` with separate anchors: relative deadlines count from
    /// `reference_date`, status and `days_remaining` are measured from `today`.
    pub fn process_contract_at(
        &self,
        text: &str,
        document_name: &str,
        reference_date: NaiveDate,
        today: NaiveDate,
    ) -> AnalysisResult {
        let sentences = segment(text);
        debug!(
            document = document_name,
            sentences = sentences.len(),
            "segmented contract"
        );

        let mut result = AnalysisResult::empty(document_name);

        for sentence in sentences {
            for risk_type in classify(sentence, &self.rules) {
                result.risk_alerts.push(RiskAlert {
                    risk_type: risk_type.to_string(),
                    source_sentence: sentence.to_string(),
                    confidence: PLACEHOLDER_CONFIDENCE,
                });
            }

            match extract(sentence, reference_date) {
                Ok(Some(deadline)) => {
                    let (status, days_remaining) =
                        evaluate(deadline.date, today, self.config.alert_window_days);
                    result.deadline_alerts.push(DeadlineAlert {
                        event_label: deadline.event_label,
                        kind: deadline.kind,
                        deadline: deadline.date,
                        status,
                        days_remaining,
                        source_sentence: sentence.to_string(),
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        document = document_name,
                        error = %e,
                        "skipping unresolvable deadline"
                    );
                    result.skipped_sentences.push(SkippedSentence {
                        source_sentence: sentence.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Stable: equal deadlines keep sentence order.
        result.deadline_alerts.sort_by_key(|a| a.deadline);

        info!(
            document = document_name,
            risk_alerts = result.risk_alerts.len(),
            deadline_alerts = result.deadline_alerts.len(),
            skipped = result.skipped_count(),
            "contract analysed"
        );
        result
    }
}

/// One-shot analysis without building an [`Engine`] first.
pub fn process_contract(
    text: &str,
    document_name: &str,
    now: NaiveDate,
    alert_window_days: u32,
    rules: &RiskRuleTable,
) -> AnalysisResult {
    Engine::new(rules.clone(), EngineConfig { alert_window_days })
        .process_contract(text, document_name, now)
}
