//! Test builders — ergonomic constructors for raw change records, catalogs,
//! and resolver maps.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use auditdiff_core::{AttributeCatalog, Resolvers};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for the structured changed-attributes form.
///
/// # Example
///
/// ```rust
/// let raw = RawRecordBuilder::new()
///     .change("quantity", 5, 10)
///     .change("cost", Value::Null, "12000")
///     .build();
/// ```
pub struct RawRecordBuilder {
    map: serde_json::Map<String, Value>,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self {
            map: serde_json::Map::new(),
        }
    }

    /// Add one `key -> [old, new]` pair.
    pub fn change(
        mut self,
        key: impl Into<String>,
        old: impl Into<Value>,
        new: impl Into<Value>,
    ) -> Self {
        self.map
            .insert(key.into(), Value::Array(vec![old.into(), new.into()]));
        self
    }

    /// Add a deliberately malformed entry (value is not a 2-element pair).
    pub fn malformed(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.map)
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The built-in catalog, as production callers use it.
pub fn default_catalog() -> AttributeCatalog {
    AttributeCatalog::defaults()
}

/// A resolver map covering the inventory type/sub-type lookups used across
/// the harnesses.
pub fn inventory_resolvers() -> Resolvers {
    let mut resolvers = Resolvers::new();
    resolvers.insert("inventory_types", "3", "Spares");
    resolvers.insert("inventory_types", "5", "Consumable");
    resolvers.insert("inventory_sub_types", "12", "Filters");
    resolvers
}
