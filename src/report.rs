//! Report rendering — audit rows in, display lines out.
//!
//! This sits between the normalizer pipeline and the terminal: it decodes one
//! JSONL audit row, runs the changed-attributes record through
//! [`auditdiff_core::normalize`], and renders the entries as text with an
//! optional collapsed view (`… N more change(s)`).

use auditdiff_core::{normalize, overflow_count, AttributeCatalog, ChangeEntry, Resolvers};
use serde::Deserialize;

/// One audit-log row as it appears in the input stream. Only `changed_attr`
/// feeds the normalizer; the rest is header metadata echoed back to the user.
/// Unknown fields are ignored so rows from richer APIs pass through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditRow {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub changed_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// The raw changed-attributes record: structured map, legacy string, or
    /// absent.
    #[serde(default)]
    pub changed_attr: serde_json::Value,
}

impl AuditRow {
    /// Normalize this row's changed-attributes record.
    pub fn entries(&self, catalog: &AttributeCatalog, resolvers: &Resolvers) -> Vec<ChangeEntry> {
        normalize(&self.changed_attr, catalog, resolvers)
    }

    /// One-line header summarizing who did what, when. `None` when the row
    /// carries no metadata at all.
    pub fn header(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(action) = &self.action {
            parts.push(action.clone());
        }
        if let Some(by) = &self.changed_by {
            parts.push(format!("by {by}"));
        }
        if let Some(at) = &self.created_at {
            parts.push(format!("at {at}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Render entries as `Label: from → to` lines. With `collapse_after`, at most
/// that many entries are shown followed by a single `… N more change(s)` line;
/// the full list is never mutated, only sliced here.
pub fn render(entries: &[ChangeEntry], collapse_after: Option<usize>) -> Vec<String> {
    let visible = match collapse_after {
        Some(limit) => entries.len().min(limit),
        None => entries.len(),
    };
    let mut lines: Vec<String> = entries[..visible]
        .iter()
        .map(|entry| format!("{}: {} → {}", entry.label, entry.from, entry.to))
        .collect();

    let hidden = overflow_count(entries.len(), visible);
    if hidden > 0 {
        lines.push(format!("… {hidden} more change(s)"));
    }
    lines
}
