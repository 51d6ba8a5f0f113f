//! Keyword-based risk classification of a single sentence.

use crate::rules::RiskRuleTable;

/// Return every risk type whose keywords occur in `sentence`, in table order.
///
/// Matching is a case-insensitive substring test. Accents are significant:
/// "rescisao" does not match "rescisão".
pub fn classify<'r>(sentence: &str, rules: &'r RiskRuleTable) -> Vec<&'r str> {
    let lower = sentence.to_lowercase();
    rules
        .rules()
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| lower.contains(kw.as_str())))
        .map(|rule| rule.risk_type.as_str())
        .collect()
}
