//! Immutable canonical dataset of one export.

use std::path::Path;

use enc_ingest::{RawTable, Result};
use enc_model::{CanonicalRecord, DateRange};

use crate::derive::derive;

/// Canonical records of one export plus the values the presentation layer
/// reads directly (date bounds, loaded row count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<CanonicalRecord>,
    raw_row_count: usize,
    bounds: Option<DateRange>,
}

impl Dataset {
    /// Builds a dataset from canonical records and the raw row count.
    pub fn new(records: Vec<CanonicalRecord>, raw_row_count: usize) -> Self {
        let bounds = date_bounds(&records);
        Self {
            records,
            raw_row_count,
            bounds,
        }
    }

    /// Derives a dataset from an already loaded table.
    pub fn from_table(table: &RawTable) -> Self {
        Self::new(derive(table), table.len())
    }

    /// Loads and derives a dataset from export bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let table = enc_ingest::load(bytes)?;
        Ok(Self::from_table(&table))
    }

    /// Loads and derives a dataset from an export file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let table = enc_ingest::load_path(path)?;
        Ok(Self::from_table(&table))
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    /// Number of rows in the export before invalid dates were dropped.
    pub fn raw_row_count(&self) -> usize {
        self.raw_row_count
    }

    /// Earliest and latest encounter date; `None` when there is no data.
    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn date_bounds(records: &[CanonicalRecord]) -> Option<DateRange> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some(DateRange::new(min, max))
}
