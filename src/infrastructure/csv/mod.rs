// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Line tokenizing, record building, and whole-document parsing

mod document;
mod record_builder;
mod tokenizer;

pub use document::{parse_document, ParsedDocument};
pub use record_builder::{build_record, EXTRAS_KEY};
pub use tokenizer::split_line;
