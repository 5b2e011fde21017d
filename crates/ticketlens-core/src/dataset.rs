//! CSV dataset loading

use crate::types::TicketRecord;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset at {path}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("malformed row in {path}")]
    Row {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// The in-memory ticket table. Loaded once, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TicketRecord>,
}

impl Dataset {
    /// Read a headered CSV export into memory.
    ///
    /// A missing file or a row that fails to deserialize is terminal; cell
    /// level laxity (blank ratings, unparseable timestamps) is handled by
    /// the record type and the downstream parsers instead.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Open {
            path: path_str.clone(),
            source,
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: TicketRecord = row.map_err(|source| DatasetError::Row {
                path: path_str.clone(),
                source,
            })?;
            records.push(record);
        }

        tracing::debug!(rows = records.len(), path = %path_str, "dataset loaded");
        Ok(Self { records })
    }

    /// Build a dataset from already-constructed records
    pub fn from_records(records: Vec<TicketRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TicketRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
