//! Deadline phrase extraction for Portuguese contract sentences.
//!
//! Two patterns are tried in order and the first match wins:
//!
//! 1. **Relative count**: "em até 30 (trinta) dias corridos",
//!    "no prazo de 6 meses", or a notice period such as
//!    "com 15 dias úteis de antecedência". A bare "com N dias" is not a
//!    deadline ("com 5 dias de tolerância").
//!    Resolved against the caller's reference date:
//!    - `meses` → N × 30 calendar days (flat approximation)
//!    - `dias úteis` → N business days (Mon–Fri)
//!    - `dias` / `dias corridos` → N calendar days
//! 2. **Absolute date**: "até o dia 15 de setembro de 2025".
//!
//! A phrase that matches but cannot be resolved (31 de abril, a count too
//! large for `u32`) is an [`ExtractError`]. Pattern 2 is not attempted after
//! pattern 1 has matched.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::business_days;
use crate::error::ExtractError;

// Both relative patterns capture (count, unit, qualifier) in groups 1..=3.
static RELATIVE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:em\s+até|no\s+prazo\s+(?:máximo\s+)?de|dentro\s+de",
        r"|com\s+antecedência\s+(?:mínima\s+)?de)",
        r"\s+([0-9]+)\s*(?:\([^)]*\)\s*)?(dias?|mês|meses)\b",
        r"(?:\s*(úteis|corridos)\b)?",
    ))
    .expect("Invalid regex: relative count pattern")
});

static NOTICE_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\bcom\s+([0-9]+)\s*(?:\([^)]*\)\s*)?(dias?|mês|meses)\b",
        r"(?:\s*(úteis|corridos)\b)?\s+de\s+antecedência\b",
    ))
    .expect("Invalid regex: notice period pattern")
});

static ABSOLUTE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\baté\s+(?:o\s+)?(?:dia\s+)?",
        r"([0-9]{1,2})\s+de\s+(\w+)\s+de\s+([0-9]{4})\b",
    ))
    .expect("Invalid regex: absolute date pattern")
});

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// How a deadline was expressed in the source sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    CalendarDays,
    BusinessDays,
    Months,
    AbsoluteDate,
}

impl DeadlineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CalendarDays => "calendar_days",
            Self::BusinessDays => "business_days",
            Self::Months => "months",
            Self::AbsoluteDate => "absolute_date",
        }
    }
}

/// A deadline resolved to an absolute date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub date: NaiveDate,
    pub event_label: String,
    pub kind: DeadlineKind,
}

/// Extract the first deadline phrase in `sentence`.
///
/// `Ok(None)` means no pattern matched.
pub fn extract(
    sentence: &str,
    reference_date: NaiveDate,
) -> Result<Option<Deadline>, ExtractError> {
    let relative = RELATIVE_COUNT
        .captures(sentence)
        .or_else(|| NOTICE_PERIOD.captures(sentence));
    if let Some(caps) = relative {
        return resolve_relative(&caps, reference_date).map(Some);
    }
    if let Some(caps) = ABSOLUTE_DATE.captures(sentence) {
        return resolve_absolute(&caps);
    }
    Ok(None)
}

fn resolve_relative(
    caps: &Captures<'_>,
    reference_date: NaiveDate,
) -> Result<Deadline, ExtractError> {
    let n = parse_count(&caps[1])?;
    let unit = caps[2].to_lowercase();
    let business = caps
        .get(3)
        .is_some_and(|q| q.as_str().to_lowercase() == "úteis");

    let (kind, days, unit_name) = if unit.starts_with('m') {
        (DeadlineKind::Months, u64::from(n) * 30, "months")
    } else if business {
        (DeadlineKind::BusinessDays, u64::from(n), "business days")
    } else {
        (DeadlineKind::CalendarDays, u64::from(n), "calendar days")
    };

    let date = match kind {
        DeadlineKind::BusinessDays => business_days::advance(reference_date, n),
        _ => reference_date.checked_add_days(Days::new(days)),
    }
    .ok_or(ExtractError::DateOverflow {
        from: reference_date,
        count: n,
        unit: unit_name,
    })?;

    Ok(Deadline {
        date,
        event_label: format!("Deadline: {n} {unit_name}"),
        kind,
    })
}

fn resolve_absolute(caps: &Captures<'_>) -> Result<Option<Deadline>, ExtractError> {
    let month_name = caps[2].to_lowercase();
    let Some(month) = MONTHS.iter().position(|m| *m == month_name) else {
        return Ok(None);
    };
    let month = month as u32 + 1;
    let day = parse_count(&caps[1])?;
    // Exactly four ASCII digits.
    let year = caps[3]
        .bytes()
        .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ExtractError::InvalidDate { day, month, year })?;

    Ok(Some(Deadline {
        date,
        event_label: format!("Deadline on {day}/{month}/{year}"),
        kind: DeadlineKind::AbsoluteDate,
    }))
}

fn parse_count(digits: &str) -> Result<u32, ExtractError> {
    digits
        .parse()
        .map_err(|_| ExtractError::CountOutOfRange(digits.to_string()))
}
