// ============================================================
// RECORD BUILDER
// ============================================================
// Pairs ordered header keys with a row's fields into a record tree

use crate::domain::csv::{insert_path, FieldMap, FieldValue};

/// Node collecting surplus positional values beyond the header length.
pub const EXTRAS_KEY: &str = "__extras";

/// Build one record from ordered header keys and the row's fields.
///
/// Rows shorter than the header are padded with empty strings. Surplus
/// fields land under `__extras`, keyed `_extra_1`, `_extra_2`, … in
/// positional order.
pub fn build_record(header: &[String], fields: &[String]) -> FieldMap {
    let mut record = FieldMap::new();

    for (i, key) in header.iter().enumerate() {
        let value = fields.get(i).cloned().unwrap_or_default();
        insert_path(&mut record, key, value);
    }

    if fields.len() > header.len() {
        let mut extras = FieldMap::new();
        for (offset, value) in fields[header.len()..].iter().enumerate() {
            extras.insert(
                format!("_extra_{}", offset + 1),
                FieldValue::Leaf(value.clone()),
            );
        }
        record.insert(EXTRAS_KEY.to_string(), FieldValue::Node(extras));
    }

    record
}
