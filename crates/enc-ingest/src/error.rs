//! Error types for encounter export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an encounter export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Export file not found.
    #[error("export file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed delimited text.
    #[error("failed to parse delimited text at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    // === Schema Errors ===
    /// Required column not found after header canonicalization.
    #[error("required column '{column}' not found (columns present: {present})")]
    MissingColumn { column: String, present: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::CsvParse {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/export.csv"),
        };
        assert_eq!(err.to_string(), "export file not found: /path/to/export.csv");
    }

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingColumn {
            column: "TIPO".to_string(),
            present: "CD_ATENDIMENTO, DT_ATENDIMENTO".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'TIPO' not found (columns present: CD_ATENDIMENTO, DT_ATENDIMENTO)"
        );
    }
}
