//! Risk rule tables: risk type → trigger keywords.
//!
//! A [`RiskRuleTable`] is validated once at construction and is read-only
//! afterwards. Several tables can coexist (one per jurisdiction, say); there
//! is no process-wide table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// One risk category and the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    pub risk_type: String,
    pub keywords: Vec<String>,
}

impl RiskRule {
    pub fn new<I, S>(risk_type: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            risk_type: risk_type.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, validated set of [`RiskRule`]s.
///
/// Serialises as a JSON array of `{"risk_type", "keywords"}` objects; array
/// order is table order. Keywords are stored lower-cased and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RiskRule>", into = "Vec<RiskRule>")]
pub struct RiskRuleTable {
    rules: Vec<RiskRule>,
}

impl RiskRuleTable {
    /// Validate and normalise `rules`, keeping their order.
    pub fn new(rules: Vec<RiskRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyTable);
        }

        let mut seen_types = HashSet::new();
        let mut normalised = Vec::with_capacity(rules.len());

        for rule in rules {
            if !is_valid_risk_type(&rule.risk_type) {
                return Err(RuleError::InvalidRiskType(rule.risk_type));
            }
            if !seen_types.insert(rule.risk_type.clone()) {
                return Err(RuleError::DuplicateRiskType(rule.risk_type));
            }
            if rule.keywords.is_empty() {
                return Err(RuleError::NoKeywords(rule.risk_type));
            }

            let mut seen_keywords = HashSet::new();
            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for kw in &rule.keywords {
                if kw.trim().is_empty() {
                    return Err(RuleError::BlankKeyword(rule.risk_type));
                }
                let kw = kw.to_lowercase();
                if seen_keywords.insert(kw.clone()) {
                    keywords.push(kw);
                }
            }

            normalised.push(RiskRule {
                risk_type: rule.risk_type,
                keywords,
            });
        }

        Ok(Self { rules: normalised })
    }

    /// Parse and validate a JSON rule table.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in table for Brazilian-Portuguese contracts.
    pub fn default_pt_br() -> Self {
        // Already normalised; `default_table_is_valid` keeps it that way.
        let rules = DEFAULT_PT_BR
            .iter()
            .map(|(risk_type, keywords)| RiskRule::new(*risk_type, keywords.iter().copied()))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn risk_types(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.risk_type.as_str())
    }
}

impl TryFrom<Vec<RiskRule>> for RiskRuleTable {
    type Error = RuleError;

    fn try_from(rules: Vec<RiskRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<RiskRuleTable> for Vec<RiskRule> {
    fn from(table: RiskRuleTable) -> Self {
        table.rules
    }
}

fn is_valid_risk_type(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

// ── Built-in table ──

const DEFAULT_PT_BR: &[(&str, &[&str])] = &[
    (
        "RESCISAO",
        &[
            "rescisão",
            "rescindir",
            "cancelamento",
            "terminar o contrato",
            "extinção do contrato",
            "denunciar o contrato",
            "resolução contratual",
            "distrato",
        ],
    ),
    (
        "MULTA",
        &[
            "multa",
            "penalidade",
            "penalidades",
            "sanção",
            "sanções",
            "cláusula penal",
            "astreintes",
            "juros de mora",
            "correção monetária",
        ],
    ),
    (
        "CONFIDENCIALIDADE",
        &[
            "confidencial",
            "confidencialidade",
            "sigilo",
            "sigiloso",
            "não divulgar",
            "informação confidencial",
            "segredo comercial",
            "acordo de confidencialidade",
        ],
    ),
    (
        "LGPD",
        &[
            "lgpd",
            "lei geral de proteção de dados",
            "dados pessoais",
            "tratamento de dados",
            "controlador de dados",
            "operador de dados",
            "privacidade de dados",
        ],
    ),
    (
        "PROPRIEDADE_INTELECTUAL",
        &[
            "propriedade intelectual",
            "direitos autorais",
            "patente",
            "patentes",
            "marca registrada",
            "marcas",
            "copyright",
            "licenciamento de software",
        ],
    ),
    (
        "OBRIGACAO_DE_PAGAMENTO",
        &[
            "pagamento",
            "pagar",
            "remuneração",
            "preço",
            "honorários",
            "fatura",
            "cobrança",
            "reajuste de preço",
        ],
    ),
    (
        "INDENIZACAO",
        &[
            "indenização",
            "indenizar",
            "reparação",
            "danos",
            "perdas e danos",
            "responsabilidade civil",
            "ressarcir",
        ],
    ),
    (
        "FORO_E_LEGISLACAO",
        &[
            "foro",
            "jurisdição",
            "comarca",
            "lei aplicável",
            "legislação brasileira",
            "arbitragem",
        ],
    ),
    (
        "GARANTIA",
        &[
            "garantia",
            "garante",
            "assegura",
            "livre de defeitos",
            "período de garantia",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let rules = DEFAULT_PT_BR
            .iter()
            .map(|(t, kws)| RiskRule::new(*t, kws.iter().copied()))
            .collect();
        let table = RiskRuleTable::new(rules).unwrap();
        assert_eq!(table, RiskRuleTable::default_pt_br());
        assert_eq!(table.len(), 9);
        assert_eq!(table.risk_types().next(), Some("RESCISAO"));
        assert_eq!(table.risk_types().last(), Some("GARANTIA"));
    }

    #[test]
    fn default_keywords_do_not_fire_inside_common_words() {
        let table = RiskRuleTable::default_pt_br();
        let sentence = "A obra ainda será entregue na segunda fase da agenda, conforme a demanda.";
        let hits = crate::classify::classify(sentence, &table);
        assert!(!hits.contains(&"CONFIDENCIALIDADE"), "got {hits:?}");
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(RiskRuleTable::new(vec![]), Err(RuleError::EmptyTable));
    }

    #[test]
    fn malformed_risk_type_rejected() {
        for bad in ["", "multa", "MULTA CONTRATUAL", "RESCISÃO"] {
            let err = RiskRuleTable::new(vec![RiskRule::new(bad, ["x"])]).unwrap_err();
            assert_eq!(err, RuleError::InvalidRiskType(bad.to_string()));
        }
    }

    #[test]
    fn duplicate_risk_type_rejected() {
        let err = RiskRuleTable::new(vec![
            RiskRule::new("MULTA", ["multa"]),
            RiskRule::new("MULTA", ["penalidade"]),
        ])
        .unwrap_err();
        assert_eq!(err, RuleError::DuplicateRiskType("MULTA".into()));
    }

    #[test]
    fn missing_or_blank_keywords_rejected() {
        let err = RiskRuleTable::new(vec![RiskRule::new("MULTA", Vec::<String>::new())])
            .unwrap_err();
        assert_eq!(err, RuleError::NoKeywords("MULTA".into()));

        let err = RiskRuleTable::new(vec![RiskRule::new("MULTA", ["multa", "  "])]).unwrap_err();
        assert_eq!(err, RuleError::BlankKeyword("MULTA".into()));
    }

    #[test]
    fn keywords_lowercased_and_deduplicated() {
        let table =
            RiskRuleTable::new(vec![RiskRule::new("LGPD", ["LGPD", "lgpd", "Dados Pessoais"])])
                .unwrap();
        assert_eq!(table.rules()[0].keywords, vec!["lgpd", "dados pessoais"]);
    }

    #[test]
    fn json_preserves_order() {
        let json = r#"[
            {"risk_type": "ZETA", "keywords": ["z"]},
            {"risk_type": "ALFA", "keywords": ["a"]}
        ]"#;
        let table = RiskRuleTable::from_json(json).unwrap();
        let types: Vec<&str> = table.risk_types().collect();
        assert_eq!(types, vec!["ZETA", "ALFA"]);

        let back = serde_json::to_string(&table).unwrap();
        assert_eq!(RiskRuleTable::from_json(&back).unwrap(), table);
    }

    #[test]
    fn json_validation_runs_on_load() {
        let err = RiskRuleTable::from_json("[]").unwrap_err();
        assert!(matches!(err, RuleError::Json(msg) if msg.contains("rule table is empty")));

        let err = RiskRuleTable::from_json("{not json").unwrap_err();
        assert!(matches!(err, RuleError::Json(_)));
    }
}
