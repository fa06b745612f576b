//! Domain-specific assertion macros for auditdiff harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! normalizer guarantee was violated and *which* entry violated it.

/// Assert that an entry list contains exactly one entry for `key`, with the
/// expected label, from, and to values.
///
/// ```rust
/// assert_entry!(entries, "quantity", "Quantity", "5", "10");
/// ```
#[macro_export]
macro_rules! assert_entry {
    ($entries:expr, $key:expr, $label:expr, $from:expr, $to:expr) => {{
        let entries: &[auditdiff_core::ChangeEntry] = &$entries;
        let key: &str = $key;
        let matching: Vec<_> = entries.iter().filter(|e| e.key == key).collect();
        match matching.as_slice() {
            [entry] => {
                if entry.label != $label || entry.from != $from || entry.to != $to {
                    panic!(
                        "assert_entry! failed for key {:?}:\n  expected: label={:?} from={:?} to={:?}\n  actual:   label={:?} from={:?} to={:?}",
                        key, $label, $from, $to, entry.label, entry.from, entry.to
                    );
                }
            }
            [] => panic!(
                "assert_entry! failed: no entry for key {:?}.\n  Present keys: {:?}",
                key,
                entries.iter().map(|e| e.key.as_str()).collect::<Vec<_>>()
            ),
            many => panic!(
                "assert_entry! failed: {} entries for key {:?}, expected exactly one",
                many.len(),
                key
            ),
        }
    }};
}

/// Assert that no entry for `key` appears anywhere in the list (the hidden-key
/// exclusion guarantee).
#[macro_export]
macro_rules! assert_key_absent {
    ($entries:expr, $key:expr) => {{
        let entries: &[auditdiff_core::ChangeEntry] = &$entries;
        let key: &str = $key;
        if let Some(entry) = entries.iter().find(|e| e.key == key) {
            panic!(
                "assert_key_absent! failed: hidden key {:?} leaked into output as {:?}",
                key, entry
            );
        }
    }};
}

/// Assert that every entry in the list has non-empty `from` and `to` display
/// strings (absence must render as the sentinel, never as an empty string).
#[macro_export]
macro_rules! assert_display_values_non_empty {
    ($entries:expr) => {{
        let entries: &[auditdiff_core::ChangeEntry] = &$entries;
        for entry in entries {
            if entry.from.is_empty() || entry.to.is_empty() {
                panic!(
                    "assert_display_values_non_empty! failed: entry {:?} has an empty display value",
                    entry
                );
            }
        }
    }};
}
