//! Static input corpora used across harnesses.
//!
//! Structured records are kept as raw JSON strings (parsed at test time) so
//! the corpora read like the audit API payloads they imitate.

/// Well-formed structured changed-attributes records.
pub const CORPUS_STRUCTURED: &[&str] = &[
    r#"{"quantity": [5, 10]}"#,
    r#"{"name": ["Old Item", "New Item"], "quantity": [5, 10]}"#,
    r#"{"criticality": ["1", "2"], "id": ["55", "55"], "cost": [null, "12000"]}"#,
    r#"{"green_product": ["0", "1"], "active": [true, false]}"#,
    r#"{"pms_inventory_type_id": ["3", "5"], "pms_inventory_sub_type_id": [null, "12"]}"#,
    r#"{"expiry_date": [null, "2025-01-15"], "purchase_date": ["2024-06-01", "2024-07-01"]}"#,
    r#"{"location_id": [{"name": "Dock 4"}, {"name": "Dock 9"}]}"#,
];

/// Legacy stringified-map records, as older audit rows still emit them.
pub const CORPUS_LEGACY: &[&str] = &[
    r#""name"=>["Old Item", "New Item"], "quantity"=>[5, 10]"#,
    r#""expiry_date"=>[nil, "2025-01-15"]"#,
    r#""cost"=>[nil, 12000], "criticality"=>[1, 2]"#,
    r#""green_product"=>[0, 1]"#,
    r#""description"=>["with, comma", "clean"]"#,
];

/// Adversarial inputs: every one of these must produce a (possibly empty)
/// entry list without panicking.
pub const CORPUS_ADVERSARIAL: &[&str] = &[
    "",
    "not a record at all",
    r#""unterminated"=>[1, 2"#,
    r#""nested"=>[[1, 2], [3, 4]], "after"=>[1, 2]"#,
    r#""a"=>[], "b"=>[,], "c"=>[,,,]"#,
    "\"\u{0000}\"=>[nil, nil]",
    r#""quote"=>["she said ""hi""", "ok"]"#,
];
