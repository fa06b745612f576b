//! The attribute catalog: raw field keys → display labels and semantic kinds.
//!
//! [`AttributeCatalog::load`] reads a TOML catalog file layered on top of the
//! built-in defaults. [`AttributeCatalog::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests and for callers that ship
//! no catalog file).

use crate::types::FieldKind;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Built-in catalog covering the facility-management inventory audit log.
/// Doubles as the reference for the catalog file schema: `hidden` lists keys
/// dropped from output entirely; each `[fields.<key>]` table carries a `label`
/// and a `type` of `text`, `boolean`, `numeric`, `date` (optionally
/// `with_time`), `enum` (with a `values` sub-table), or `foreign_key` (with a
/// `resolver` group name).
const DEFAULT_CATALOG: &str = r#"
hidden = ["id", "created_at", "updated_at", "deleted_at", "company_id", "tenant_id"]

[fields.name]
label = "Name"
type = "text"

[fields.description]
label = "Description"
type = "text"

[fields.quantity]
label = "Quantity"
type = "numeric"

[fields.cost]
label = "Cost"
type = "numeric"

[fields.unit_rate]
label = "Unit Rate"
type = "numeric"

[fields.min_stock_level]
label = "Minimum Stock Level"
type = "numeric"

[fields.max_stock_level]
label = "Maximum Stock Level"
type = "numeric"

[fields.criticality]
label = "Criticality"
type = "enum"
[fields.criticality.values]
0 = "Normal"
1 = "Critical"
2 = "Non-Critical"

[fields.green_product]
label = "Green Product"
type = "boolean"

[fields.active]
label = "Active"
type = "boolean"

[fields.pms_inventory_type_id]
label = "Inventory Type"
type = "foreign_key"
resolver = "inventory_types"

[fields.pms_inventory_sub_type_id]
label = "Inventory Sub Type"
type = "foreign_key"
resolver = "inventory_sub_types"

[fields.location_id]
label = "Location"
type = "foreign_key"
resolver = "locations"

[fields.expiry_date]
label = "Expiry Date"
type = "date"

[fields.purchase_date]
label = "Purchase Date"
type = "date"

[fields.last_audited_at]
label = "Last Audited"
type = "date"
with_time = true
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while loading or validating a catalog file. The normalizer
/// pipeline itself is infallible; this is the one fallible surface.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Load(#[from] config::ConfigError),
    #[error("field `{key}`: unknown type `{kind}`")]
    UnknownKind { key: String, kind: String },
    #[error("field `{key}`: type `foreign_key` requires a `resolver` group name")]
    MissingResolver { key: String },
}

// ---------------------------------------------------------------------------
// Raw file schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    hidden: Vec<String>,
    #[serde(default)]
    fields: HashMap<String, RawFieldSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawFieldSpec {
    label: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    values: HashMap<String, String>,
    #[serde(default)]
    resolver: Option<String>,
    #[serde(default)]
    with_time: bool,
}

impl RawFieldSpec {
    fn into_spec(self, key: &str) -> Result<FieldSpec, CatalogError> {
        let kind = match self.kind.as_str() {
            "" | "text" => FieldKind::Text,
            "boolean" => FieldKind::Boolean,
            "numeric" => FieldKind::Numeric,
            "date" => FieldKind::Date {
                with_time: self.with_time,
            },
            "enum" => FieldKind::Enum {
                values: self.values,
            },
            "foreign_key" => FieldKind::ForeignKey {
                resolver: self.resolver.ok_or_else(|| CatalogError::MissingResolver {
                    key: key.to_string(),
                })?,
            },
            other => {
                return Err(CatalogError::UnknownKind {
                    key: key.to_string(),
                    kind: other.to_string(),
                })
            }
        };
        Ok(FieldSpec {
            label: self.label,
            kind,
        })
    }
}

// ---------------------------------------------------------------------------
// Public catalog
// ---------------------------------------------------------------------------

/// Display metadata for one cataloged field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: String,
    pub kind: FieldKind,
}

/// Static mapping from raw field keys to display labels and semantic kinds,
/// plus the hidden-key set excluded from output entirely.
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    fields: HashMap<String, FieldSpec>,
    hidden: HashSet<String>,
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::defaults()
    }
}

impl AttributeCatalog {
    /// Return the built-in catalog without touching the filesystem.
    pub fn defaults() -> Self {
        let raw: RawCatalog = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CATALOG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default catalog must be valid TOML")
            .try_deserialize()
            .expect("built-in default catalog must deserialize correctly");
        Self::from_raw(raw).expect("built-in default catalog must validate")
    }

    /// Load a catalog file, layered on top of the built-in defaults. Fields in
    /// the file override same-keyed defaults; the `hidden` list replaces the
    /// default list when present.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw: RawCatalog = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CATALOG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let mut fields = HashMap::new();
        for (key, spec) in raw.fields {
            let spec = spec.into_spec(&key)?;
            fields.insert(key, spec);
        }
        Ok(Self {
            fields,
            hidden: raw.hidden.into_iter().collect(),
        })
    }

    /// An empty catalog: no labels, no kinds, no hidden keys. Every field
    /// falls back to title-cased labels and text formatting.
    pub fn empty() -> Self {
        Self {
            fields: HashMap::new(),
            hidden: HashSet::new(),
        }
    }

    /// Register or replace one field.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>, kind: FieldKind) {
        self.fields.insert(
            key.into(),
            FieldSpec {
                label: label.into(),
                kind,
            },
        );
    }

    /// Add a key to the hidden set.
    pub fn hide(&mut self, key: impl Into<String>) {
        self.hidden.insert(key.into());
    }

    /// Whether a key is internal bookkeeping that must never reach output.
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.contains(key)
    }

    /// Display label for a key: the cataloged label, or a title-cased version
    /// of the raw key (underscores → spaces) when unmapped.
    pub fn label(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(spec) => spec.label.clone(),
            None => {
                let label = title_case(key);
                // Keys made only of separators would title-case to nothing.
                if label.is_empty() {
                    key.to_string()
                } else {
                    label
                }
            }
        }
    }

    /// Semantic kind for a key. Uncataloged keys whose name contains `date`
    /// (case-insensitive) are treated as date-only fields; everything else
    /// uncataloged is free text.
    pub fn kind(&self, key: &str) -> FieldKind {
        if let Some(spec) = self.fields.get(key) {
            return spec.kind.clone();
        }
        if key.to_ascii_lowercase().contains("date") {
            return FieldKind::Date { with_time: false };
        }
        FieldKind::Text
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
