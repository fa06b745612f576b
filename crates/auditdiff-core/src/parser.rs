//! Parser — extracts `(key, old, new)` triples from a raw changed-attributes
//! record.
//!
//! Two wire shapes are accepted: a structured JSON map of `key -> [old, new]`
//! pairs, and a legacy stringified-map form (`"key"=>[old, new], ...`) that
//! older audit rows still carry. Parsing is best-effort and total: malformed
//! entries are skipped with a debug log, never aborting the record, and
//! unrecognized input shapes yield an empty list rather than an error.

use crate::format::strip_outer_quotes;
use crate::types::ParsedChange;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Matches one `"key"=>[content]` segment of the legacy string form. Assumes
/// double-quoted keys and a single level of bracket nesting; values containing
/// `]` will mis-split. That ambiguity is inherent to the legacy format and
/// handled by favoring partial results over failure.
fn legacy_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)"\s*=>\s*\[([^\]]*)\]"#).expect("valid regex"))
}

/// Extract change triples from a raw record. `Null` and unrecognized shapes
/// yield an empty list; see the module docs for the accepted forms.
pub fn parse(raw: &Value) -> Vec<ParsedChange> {
    match raw {
        Value::Null => Vec::new(),
        Value::Object(map) => {
            let mut out = Vec::with_capacity(map.len());
            for (key, value) in map {
                match value.as_array() {
                    Some(pair) if pair.len() == 2 => {
                        out.push(ParsedChange::new(
                            key.clone(),
                            pair[0].clone(),
                            pair[1].clone(),
                        ));
                    }
                    _ => {
                        tracing::debug!(%key, "skipping malformed change pair");
                    }
                }
            }
            out
        }
        Value::String(s) => parse_legacy(s),
        other => {
            tracing::debug!(
                shape = %value_shape(other),
                "unrecognized changed-attributes shape, returning no entries"
            );
            Vec::new()
        }
    }
}

/// Best-effort extraction from the legacy `"key"=>[old, new]` string form.
///
/// Each segment's content is split on the LAST comma, biasing toward
/// "everything before the last comma is the old value" when values themselves
/// contain commas. A segment with no comma becomes an old value with an empty
/// new value. The literal token `nil` (case-insensitive) maps to null.
pub fn parse_legacy(raw: &str) -> Vec<ParsedChange> {
    legacy_segment_re()
        .captures_iter(raw)
        .map(|caps| {
            let key = &caps[1];
            let content = &caps[2];
            let (old, new) = match content.rfind(',') {
                Some(idx) => (&content[..idx], &content[idx + 1..]),
                None => (content, ""),
            };
            ParsedChange::new(key, legacy_token(old), legacy_token(new))
        })
        .collect()
}

/// Decode one legacy value token: trim, map whole-token `nil` to null, strip
/// one layer of surrounding quotes.
fn legacy_token(token: &str) -> Value {
    let trimmed = token.trim();
    if trimmed.eq_ignore_ascii_case("nil") {
        return Value::Null;
    }
    Value::String(strip_outer_quotes(trimmed).to_string())
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
