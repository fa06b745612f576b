//! Value sanitizer and type-aware display formatter.
//!
//! [`sanitize`] collapses a loose JSON value into a display string, with the
//! absent-sentinel standing in for null/empty. [`format_value`] then applies
//! the formatter selected by the field's [`FieldKind`]: Yes/No booleans,
//! resolver lookups for foreign keys, enum labels, `DD/MM/YYYY` dates, and
//! thousands-separated numerics. Every function here is total; a value that
//! defeats its formatter passes through unchanged rather than erroring.

use crate::catalog::AttributeCatalog;
use crate::types::{FieldKind, Resolvers, ABSENT};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Sanitizer
// ---------------------------------------------------------------------------

/// Collapse a raw JSON value into a display string.
///
/// Null and empty strings become the absent-sentinel. Strings shed one layer
/// of surrounding quotes (a legacy-form artifact). Nested objects fall back
/// to a `name` field, then `code`, then compact JSON — deliberately lossy for
/// the rare case a scalar was expected.
pub fn sanitize(value: &Value) -> String {
    match value {
        Value::Null => ABSENT.to_string(),
        Value::String(s) => {
            let stripped = strip_outer_quotes(s.trim());
            if stripped.is_empty() {
                ABSENT.to_string()
            } else {
                stripped.to_string()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => {
            for field in ["name", "code"] {
                if let Some(Value::String(s)) = map.get(field) {
                    if !s.is_empty() {
                        return s.clone();
                    }
                }
            }
            value.to_string()
        }
        Value::Array(_) => value.to_string(),
    }
}

/// Strip one matching layer of surrounding single or double quotes.
pub(crate) fn strip_outer_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// ---------------------------------------------------------------------------
// Type-aware formatter
// ---------------------------------------------------------------------------

/// Apply the display formatter selected by the key's catalog kind.
///
/// The absent-sentinel passes through every rule untouched. Formatters never
/// fail: an unrecognized token keeps its sanitized form.
pub fn format_value(
    key: &str,
    sanitized: &str,
    catalog: &AttributeCatalog,
    resolvers: &Resolvers,
) -> String {
    if sanitized == ABSENT {
        return ABSENT.to_string();
    }
    match catalog.kind(key) {
        FieldKind::Text => sanitized.to_string(),
        FieldKind::Boolean => format_boolean(sanitized),
        FieldKind::Numeric => format_numeric(sanitized),
        FieldKind::Date { with_time } => format_date(sanitized, with_time),
        FieldKind::Enum { values } => values
            .get(sanitized)
            .cloned()
            .unwrap_or_else(|| sanitized.to_string()),
        FieldKind::ForeignKey { resolver } => {
            if sanitized.bytes().all(|b| b.is_ascii_digit()) {
                if let Some(name) = resolvers.lookup(&resolver, sanitized) {
                    return name.to_string();
                }
            }
            // Unresolvable id stays visible rather than going blank.
            sanitized.to_string()
        }
    }
}

fn format_boolean(raw: &str) -> String {
    let token = raw.to_ascii_lowercase();
    match token.as_str() {
        "true" | "1" | "yes" => "Yes".to_string(),
        "false" | "0" | "no" => "No".to_string(),
        _ => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Offset-carrying formats tried first: the weekday-prefixed long forms the
/// source system serializes, then common ISO-with-offset variants.
const OFFSET_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a %b %e %Y %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Naive datetime fallbacks.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only fallbacks.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y", "%b %d, %Y"];

fn fraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2}:\d{2}:\d{2})\.\d+").expect("valid regex"))
}

fn tz_abbrev_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // "UTC +0000" / "GMT+05:30" collapse to just the numeric offset.
    RE.get_or_init(|| Regex::new(r"\b[A-Z]{2,5}\s*([+-]\d{2}:?\d{2})").expect("valid regex"))
}

/// Render a date-like value as `DD/MM/YYYY` (or `DD/MM/YYYY HH:mm` for
/// timestamp fields). An unparseable value is returned unchanged; malformed
/// dates degrade to their raw form rather than blocking the row.
fn format_date(raw: &str, with_time: bool) -> String {
    match parse_timestamp(raw) {
        Some(dt) if with_time => dt.format("%d/%m/%Y %H:%M").to_string(),
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let cleaned = fraction_re().replace_all(raw.trim(), "$1");
    let cleaned = tz_abbrev_re().replace_all(&cleaned, "$1");
    let cleaned = cleaned.trim();

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(cleaned, fmt) {
            return Some(dt.naive_local());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Numerics
// ---------------------------------------------------------------------------

/// Insert comma thousands separators into a plain decimal string. Anything
/// that is not a plain decimal (exponents, stray units, already-grouped
/// values) passes through unchanged.
fn format_numeric(raw: &str) -> String {
    let (sign, body) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return raw.to_string();
        }
    }
    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
