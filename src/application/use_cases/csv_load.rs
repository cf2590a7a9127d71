use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::people::{IngestionSummary, SkipReason};
use crate::infrastructure::csv::parse_document;
use crate::infrastructure::db::PersonStore;
use crate::infrastructure::storage::FileSource;

mod router;

use self::router::route_record;

/// Loads a people CSV into the store, row by row, collecting per-row
/// failures in the summary instead of aborting the run.
pub struct CsvLoadUseCase {
    files: Arc<dyn FileSource>,
    store: Arc<dyn PersonStore>,
}

impl CsvLoadUseCase {
    pub fn new(files: Arc<dyn FileSource>, store: Arc<dyn PersonStore>) -> Self {
        Self { files, store }
    }

    /// Run one load over the configured CSV file.
    ///
    /// Only a missing path configuration is an error. A missing file is a
    /// warning that yields an empty summary, and every row-level condition
    /// (validation failure, single insert failure) becomes a skip entry.
    pub async fn execute(&self, csv_path: Option<&str>) -> Result<IngestionSummary> {
        let Some(csv_path) = csv_path else {
            return Err(AppError::ConfigError(
                "CSV source file path is not configured".to_string(),
            ));
        };

        let path = Path::new(csv_path);
        if !self.files.exists(path) {
            warn!(path = %path.display(), "CSV source file does not exist; nothing to load");
            return Ok(IngestionSummary::default());
        }

        let text = self.files.read_to_string(path)?;
        let document = parse_document(&text);
        if document.header.is_empty() || document.records.is_empty() {
            info!(path = %path.display(), "CSV document has no loadable records");
            return Ok(IngestionSummary {
                total_rows: document.records.len(),
                ..IngestionSummary::default()
            });
        }

        let mut summary = IngestionSummary {
            total_rows: document.records.len(),
            ..IngestionSummary::default()
        };

        for (index, record) in document.records.iter().enumerate() {
            let ordinal = index + 1;
            match route_record(record, ordinal) {
                Err(skip) => summary.skipped.push(skip),
                Ok(person) => match self.store.insert_person(&person).await {
                    Ok(()) => summary.inserted_count += 1,
                    Err(e) => summary.skipped.push(SkipReason {
                        row: ordinal,
                        reason: format!("DB insert error: {}", e),
                    }),
                },
            }
        }

        info!(
            inserted = summary.inserted_count,
            skipped = summary.skipped.len(),
            total = summary.total_rows,
            "CSV load finished"
        );

        Ok(summary)
    }
}
