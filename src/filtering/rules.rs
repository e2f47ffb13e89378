//! Per-field validation and coercion.
//!
//! A [`FieldRule`] ties one query parameter to one column and decides how a
//! raw value becomes a [`Predicate`]. Anything that fails validation yields
//! `None` and the parameter is skipped.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::descriptor::{Comparison, FilterValue, Predicate};
use super::params::ParamValue;

// Basic safety limit
const MAX_FIELD_VALUE_LENGTH: usize = 10_000;

/// How a parameter is validated and which comparison it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty text, equality.
    Text,
    /// Any number, equality.
    Number,
    /// Boolean flag stored as `0`/`1`, equality.
    Flag,
    /// One of a fixed set of text labels, equality on the label.
    Label(&'static [&'static str]),
    /// One of a fixed set of named integer codes; accepts the code or the
    /// name, equality on the code.
    Code(&'static [(&'static str, i64)]),
    /// Non-empty text, substring match.
    Contains,
    /// A timestamp (equality) or a calendar day (whole-day range).
    Date,
    /// Lower bound on a timestamp column, `>=`.
    DateFrom,
    /// Upper bound on a timestamp column, `<=`.
    DateUntil,
}

/// One recognised query parameter of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Query-string parameter name.
    pub param: &'static str,
    /// Storage column the predicate applies to.
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    #[must_use]
    pub const fn new(param: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            param,
            column,
            kind,
        }
    }

    /// Rule whose parameter name equals its column name.
    #[must_use]
    pub const fn same(column: &'static str, kind: FieldKind) -> Self {
        Self::new(column, column, kind)
    }

    /// Validate `raw` and build the predicate, or `None` if it is invalid.
    #[must_use]
    pub fn predicate(&self, raw: &ParamValue) -> Option<Predicate> {
        let text = single_text(raw)?;
        let comparison = match self.kind {
            FieldKind::Text => Comparison::Eq(FilterValue::Text(text.to_string())),
            FieldKind::Number => Comparison::Eq(coerce_number(text)?),
            FieldKind::Flag => Comparison::Eq(FilterValue::Integer(coerce_flag(text)?)),
            FieldKind::Label(labels) => {
                let label = labels.iter().find(|label| **label == text)?;
                Comparison::Eq(FilterValue::Text((*label).to_string()))
            }
            FieldKind::Code(codes) => Comparison::Eq(FilterValue::Integer(coerce_code(text, codes)?)),
            FieldKind::Contains => Comparison::Contains(text.to_string()),
            FieldKind::Date => match coerce_date(text)? {
                DateInput::Instant(instant) => Comparison::Eq(FilterValue::Timestamp(instant)),
                DateInput::Day(day) => Comparison::Between(
                    FilterValue::Timestamp(start_of_day(day)),
                    FilterValue::Timestamp(end_of_day(day)),
                ),
            },
            FieldKind::DateFrom => {
                let bound = match coerce_date(text)? {
                    DateInput::Instant(instant) => instant,
                    DateInput::Day(day) => start_of_day(day),
                };
                Comparison::Gte(FilterValue::Timestamp(bound))
            }
            FieldKind::DateUntil => {
                let bound = match coerce_date(text)? {
                    DateInput::Instant(instant) => instant,
                    DateInput::Day(day) => end_of_day(day),
                };
                Comparison::Lte(FilterValue::Timestamp(bound))
            }
        };
        Some(Predicate::new(self.column, comparison))
    }
}

/// A single, trimmed, non-empty value within the length limit.
fn single_text(raw: &ParamValue) -> Option<&str> {
    let value = raw.as_single()?;
    if value.len() > MAX_FIELD_VALUE_LENGTH {
        return None;
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed)
}

/// Integers stay integers so they compare exactly against integer columns.
pub(crate) fn coerce_number(text: &str) -> Option<FilterValue> {
    if let Ok(int_value) = text.parse::<i64>() {
        return Some(FilterValue::Integer(int_value));
    }
    text.parse::<f64>()
        .ok()
        .filter(|float_value| float_value.is_finite())
        .map(FilterValue::Float)
}

pub(crate) fn coerce_flag(text: &str) -> Option<i64> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(1),
        "false" | "0" | "no" | "off" => Some(0),
        _ => None,
    }
}

fn coerce_code(text: &str, codes: &[(&str, i64)]) -> Option<i64> {
    if let Ok(code) = text.parse::<i64>() {
        return codes.iter().any(|(_, known)| *known == code).then_some(code);
    }
    codes
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|(_, code)| *code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateInput {
    Instant(DateTime<Utc>),
    Day(NaiveDate),
}

fn coerce_date(text: &str) -> Option<DateInput> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(DateInput::Instant(instant.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(DateInput::Day)
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    // 23:59:59.999999 is always a valid time
    let last_micro = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
    day.and_time(last_micro).and_utc()
}
