// ============================================================
// CSV DOCUMENT PARSER
// ============================================================
// Newline normalization, header extraction, per-line record building

use crate::domain::csv::{record_has_content, FieldMap};

use super::record_builder::build_record;
use super::tokenizer::split_line;

/// A parsed CSV document: ordered header keys plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub header: Vec<String>,
    pub records: Vec<FieldMap>,
}

/// Parse a whole CSV document held in memory.
///
/// Line endings are normalized to `\n` and lines blank after trimming are
/// dropped before the header is read. Records whose leaves are all blank are
/// dropped after construction as well; an all-empty data row is
/// indistinguishable from a separator line.
pub fn parse_document(text: &str) -> ParsedDocument {
    if text.trim().is_empty() {
        return ParsedDocument::default();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized.split('\n').filter(|line| !line.trim().is_empty());

    let header = match lines.next() {
        Some(line) => split_line(line),
        None => return ParsedDocument::default(),
    };

    let records = lines
        .map(|line| build_record(&header, &split_line(line)))
        .filter(record_has_content)
        .collect();

    ParsedDocument { header, records }
}
