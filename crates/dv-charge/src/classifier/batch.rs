use std::io::Read;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::domain::ChargeLabel;

/// One incident in a batch submission or CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(alias = "ID", alias = "Incident ID")]
    pub id: String,
    #[serde(alias = "Description", alias = "Narrative", default)]
    pub description: String,
}

/// Classification of a single batch entry, keyed by the caller's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub id: String,
    pub charge: ChargeLabel,
    pub explanation: &'static str,
}

/// Classify every record in parallel. Output order follows input order.
pub fn classify_batch(records: &[IncidentRecord]) -> Vec<BatchOutcome> {
    records
        .par_iter()
        .map(|record| {
            let result = super::classify(&record.description);
            BatchOutcome {
                id: record.id.clone(),
                charge: result.label,
                explanation: result.explanation,
            }
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read incident export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid incident CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads `id,description` rows from a CSV export.
pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IncidentRecord>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<IncidentRecord>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<IncidentRecord>() {
            records.push(row?);
        }

        Ok(records)
    }
}
