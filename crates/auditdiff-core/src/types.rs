//! Core types for auditdiff-core.
//!
//! This module defines the data structures shared across the pipeline stages:
//! the parsed [`ParsedChange`] triple, the rendered [`ChangeEntry`], the
//! per-field [`FieldKind`] dispatch tag, and the caller-supplied [`Resolvers`]
//! id→name maps.

use serde::Serialize;
use std::collections::HashMap;

/// Display sentinel for null/missing/empty values. Rendered entries never
/// carry an empty string; absence is always this em-dash.
pub const ABSENT: &str = "—";

/// One field-level change extracted from a raw changed-attributes record,
/// before any display formatting. Values are kept as loose JSON so the
/// sanitizer can distinguish null, numbers, booleans, and nested objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedChange {
    /// Raw field key as it appears in the audit log (e.g. `pms_inventory_type_id`).
    pub key: String,
    /// Value before the change. `Null` means absent.
    pub old: serde_json::Value,
    /// Value after the change. `Null` means absent.
    pub new: serde_json::Value,
}

impl ParsedChange {
    pub fn new(
        key: impl Into<String>,
        old: impl Into<serde_json::Value>,
        new: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            key: key.into(),
            old: old.into(),
            new: new.into(),
        }
    }
}

/// A fully formatted field-level change, ready for display.
///
/// `from` and `to` are always non-empty: absent values render as [`ABSENT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    /// Raw field key, preserved for callers that key UI state off it.
    pub key: String,
    /// Display label resolved from the catalog, or a title-cased fallback.
    pub label: String,
    /// Human-readable old value.
    pub from: String,
    /// Human-readable new value.
    pub to: String,
}

/// Semantic type of a field, driving which display formatter runs.
///
/// Looked up once per key from the [`AttributeCatalog`](crate::AttributeCatalog)
/// and dispatched through a single `match` in the formatter, so the set of
/// behaviors is closed and checked exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Free text; the sanitized value passes through unchanged.
    #[default]
    Text,
    /// Truthy/falsy tokens render as `Yes`/`No`.
    Boolean,
    /// Numbers re-render with thousands separators.
    Numeric,
    /// Dates render as `DD/MM/YYYY`, timestamps as `DD/MM/YYYY HH:mm`.
    Date {
        /// Whether to keep the time-of-day component in the output.
        with_time: bool,
    },
    /// Small closed code→label mapping (e.g. criticality 1 → "Critical").
    Enum {
        /// Raw code (as a string token) to display label.
        values: HashMap<String, String>,
    },
    /// Numeric id referencing an external lookup table.
    ForeignKey {
        /// Name of the resolver group to consult (e.g. `inventory_types`).
        resolver: String,
    },
}

/// Caller-supplied id→name maps for foreign-key fields, grouped by resolver
/// name. Built by the caller from whatever lookup data it already fetched;
/// the normalizer never fetches anything itself and degrades to showing raw
/// ids when a group or id is missing.
#[derive(Debug, Clone, Default)]
pub struct Resolvers {
    groups: HashMap<String, HashMap<String, String>>,
}

impl Resolvers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one id→name pair under a resolver group.
    pub fn insert(
        &mut self,
        group: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(id.into(), name.into());
    }

    /// Look up an id in a group. `None` when either is unknown.
    pub fn lookup(&self, group: &str, id: &str) -> Option<&str> {
        self.groups.get(group)?.get(id).map(String::as_str)
    }
}
