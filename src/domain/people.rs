use serde::{Deserialize, Serialize};

use super::csv::FieldMap;

/// One CSV row that passed validation, ready to be stored.
///
/// `additional` carries every top-level key except `name` and `age`; the
/// address subtree stays in it even though it is also stored in its own
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRow {
    pub name: String,
    pub age: i64,
    pub address: FieldMap,
    pub additional: FieldMap,
}

/// Why one input row did not become a stored person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipReason {
    /// 1-based ordinal of the data row within the load run.
    pub row: usize,
    pub reason: String,
}

/// Outcome of one CSV load run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestionSummary {
    pub inserted_count: usize,
    pub skipped: Vec<SkipReason>,
    pub total_rows: usize,
}
