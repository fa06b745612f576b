//! auditdiff — change-log diff normalizer.
//!
//! Turns raw audit-log "changed attributes" records (structured maps or the
//! legacy stringified form) into ordered, human-readable field-level changes.
//! The normalizer pipeline lives in [`auditdiff_core`]; this crate adds the
//! CLI driver and the [`report`] rendering layer used by it.
//!
//! # Architecture
//!
//! ```text
//! RawChangeRecord ──► Parser ──► Sanitizer ──► Formatter ──► Labeler/Filter
//!                                                                  │
//!                                                    report ◄──────┘
//! ```
//!
//! The pipeline is pure and total; only catalog-file loading can fail.

pub mod report;

pub use auditdiff_core::{
    build_entries, normalize, overflow_count, AttributeCatalog, CatalogError, ChangeEntry,
    FieldKind, ParsedChange, Resolvers, ABSENT,
};
