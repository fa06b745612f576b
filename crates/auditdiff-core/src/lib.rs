//! auditdiff-core — change-log diff normalizer.
//!
//! Turns a raw audit-log "changed attributes" record into an ordered list of
//! human-readable field-level changes.
//!
//! # Pipeline
//!
//! ```text
//! RawChangeRecord ──► Parser ──► Sanitizer ──► Formatter ──► Labeler/Filter ──► Vec<ChangeEntry>
//! ```
//!
//! The pipeline is pure, synchronous, and total: it never errors past this
//! boundary. Malformed input degrades to fewer or less-friendly entries, never
//! to a failure the rendering layer has to handle. The only fallible surface
//! is loading a catalog file ([`AttributeCatalog::load`]).
//!
//! # Example
//!
//! ```rust
//! use auditdiff_core::{normalize, AttributeCatalog, Resolvers};
//!
//! let catalog = AttributeCatalog::defaults();
//! let raw = serde_json::json!({"quantity": [5, 10]});
//! let entries = normalize(&raw, &catalog, &Resolvers::new());
//!
//! assert_eq!(entries[0].label, "Quantity");
//! assert_eq!(entries[0].from, "5");
//! assert_eq!(entries[0].to, "10");
//! ```

pub mod catalog;
pub mod format;
pub mod parser;
pub mod types;

pub use catalog::{AttributeCatalog, CatalogError, FieldSpec};
pub use types::{ChangeEntry, FieldKind, ParsedChange, Resolvers, ABSENT};

use serde_json::Value;

/// Normalize a raw changed-attributes record into display entries.
///
/// Accepts the structured map form, the legacy string form, or null; any
/// other shape yields an empty list. Hidden keys are dropped; the rest are
/// labeled and formatted per the catalog, in the record's encounter order.
pub fn normalize(raw: &Value, catalog: &AttributeCatalog, resolvers: &Resolvers) -> Vec<ChangeEntry> {
    build_entries(parser::parse(raw), catalog, resolvers)
}

/// Label, format, and filter parsed change triples.
///
/// Hidden keys never reach value formatting. Unmapped keys get a title-cased
/// label. Input order is preserved; no sorting is imposed.
pub fn build_entries(
    parsed: Vec<ParsedChange>,
    catalog: &AttributeCatalog,
    resolvers: &Resolvers,
) -> Vec<ChangeEntry> {
    parsed
        .into_iter()
        .filter(|change| !catalog.is_hidden(&change.key))
        .map(|change| {
            let from = format::format_value(
                &change.key,
                &format::sanitize(&change.old),
                catalog,
                resolvers,
            );
            let to = format::format_value(
                &change.key,
                &format::sanitize(&change.new),
                catalog,
                resolvers,
            );
            ChangeEntry {
                label: catalog.label(&change.key),
                key: change.key,
                from,
                to,
            }
        })
        .collect()
}

/// How many entries exceed a collapsed-view threshold. The caller slices the
/// entry list itself; this component has no opinion on pagination.
pub fn overflow_count(total: usize, visible: usize) -> usize {
    total.saturating_sub(visible)
}
