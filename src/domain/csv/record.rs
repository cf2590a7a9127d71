// ============================================================
// RECORD TREE
// ============================================================
// Nested values built from dotted CSV header keys

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys of a record (or nested node) mapped to their values.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A value inside a parsed record: a scalar field or a nested node.
///
/// Serializes untagged, so a record tree renders as plain JSON
/// strings and objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Leaf(String),
    Node(FieldMap),
}

impl FieldValue {
    /// True when any leaf under this value holds non-whitespace content.
    pub fn has_content(&self) -> bool {
        match self {
            FieldValue::Leaf(s) => !s.trim().is_empty(),
            FieldValue::Node(map) => map.values().any(FieldValue::has_content),
        }
    }
}

/// Assign `value` at the dotted `path`, creating intermediate nodes as needed.
///
/// A path segment that lands on an existing leaf replaces that leaf with a
/// node; the old scalar content is lost.
pub fn insert_path(record: &mut FieldMap, path: &str, value: String) {
    let segments: Vec<&str> = path.split('.').collect();
    insert_at(record, &segments, value);
}

fn insert_at(map: &mut FieldMap, segments: &[&str], value: String) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        map.insert((*head).to_string(), FieldValue::Leaf(value));
        return;
    }

    match map
        .entry((*head).to_string())
        .or_insert_with(|| FieldValue::Node(FieldMap::new()))
    {
        FieldValue::Node(inner) => insert_at(inner, rest, value),
        leaf => {
            let mut inner = FieldMap::new();
            insert_at(&mut inner, rest, value);
            *leaf = FieldValue::Node(inner);
        }
    }
}

/// Leaf lookup by path segments.
///
/// `None` when the path is absent or ends on a node.
pub fn leaf_at<'a>(record: &'a FieldMap, path: &[&str]) -> Option<&'a str> {
    let (head, rest) = path.split_first()?;
    match record.get(*head)? {
        FieldValue::Leaf(s) if rest.is_empty() => Some(s),
        FieldValue::Node(inner) if !rest.is_empty() => leaf_at(inner, rest),
        _ => None,
    }
}

/// True when at least one leaf in the record holds non-whitespace content.
pub fn record_has_content(record: &FieldMap) -> bool {
    record.values().any(FieldValue::has_content)
}
