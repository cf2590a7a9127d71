// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Record tree value objects built from dotted CSV headers
// No I/O, no async, no external dependencies

mod record;

pub use record::{insert_path, leaf_at, record_has_content, FieldMap, FieldValue};
