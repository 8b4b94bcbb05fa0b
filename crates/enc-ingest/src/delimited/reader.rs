//! Export reading from bytes or from disk.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::decode::decode;
use crate::error::{IngestError, Result};
use crate::table::RawTable;

use super::header::{canonicalize_headers, check_required_columns};

/// Field separator of the export.
pub const FIELD_DELIMITER: u8 = b';';

/// Cell texts read as missing values, matched exactly.
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Parses export bytes into a [`RawTable`].
///
/// Every cell is read as text. Empty cells and the usual spreadsheet
/// missing-value markers (`NA`, `NULL`, `#N/A`, ...) become `None`, short
/// rows are padded with `None`, cells beyond the header width are ignored.
pub fn load(bytes: &[u8]) -> Result<RawTable> {
    let (text, encoding) = decode(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers = canonicalize_headers(reader.headers()?);
    check_required_columns(&headers)?;

    let width = headers.len();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<Option<String>> = (0..width)
            .map(|idx| {
                record
                    .get(idx)
                    .filter(|cell| !is_missing(cell))
                    .map(str::to_string)
            })
            .collect();
        if record.len() > width {
            debug!(
                line = record.position().map_or(0, csv::Position::line),
                extra = record.len() - width,
                "row has more cells than the header"
            );
        }
        rows.push(row);
    }

    info!(
        rows = rows.len(),
        columns = width,
        encoding = %encoding,
        "loaded encounter export"
    );
    Ok(RawTable::new(headers, rows, encoding))
}

/// Reads an export file from disk and parses it with [`load`].
pub fn load_path(path: &Path) -> Result<RawTable> {
    let bytes = read_bytes(path)?;
    load(&bytes)
}

/// Reads a whole export file, mapping I/O failures to ingestion errors.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns;
    use crate::decode::SourceEncoding;

    const HEADER: &str = "CD_ATENDIMENTO;DT_ATENDIMENTO;DS_ESPECIALID;NM_CONVENIO;TP_ATENDIMENTO;TIPO";

    #[test]
    fn test_load_basic() {
        let input = format!("{HEADER}\n1;01/01/2023;CARDIO;SUS-SIA;A;Consulta\n");
        let table = load(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.encoding(), SourceEncoding::Utf8);
        let row = table.rows().next().unwrap();
        assert_eq!(row.get(columns::ENCOUNTER_ID), Some("1"));
        assert_eq!(row.get(columns::ENCOUNTER_DATE), Some("01/01/2023"));
        assert_eq!(row.get(columns::TYPE_LABEL), Some("Consulta"));
    }

    #[test]
    fn test_load_keeps_values_as_text() {
        let input = format!("{HEADER}\n007;01/01/2023;CARDIO; Unimed ;A;1.50\n");
        let table = load(input.as_bytes()).unwrap();
        let row = table.rows().next().unwrap();

        assert_eq!(row.get(columns::ENCOUNTER_ID), Some("007"));
        assert_eq!(row.get(columns::PAYER), Some(" Unimed "));
        assert_eq!(row.get(columns::TYPE_LABEL), Some("1.50"));
    }

    #[test]
    fn test_load_empty_and_short_cells_are_none() {
        let input = format!("{HEADER}\n1;01/01/2023;;SUS-SIA\n");
        let table = load(input.as_bytes()).unwrap();
        let row = table.rows().next().unwrap();

        assert_eq!(row.get(columns::SPECIALTY), None);
        assert_eq!(row.get(columns::CARE_CLASS), None);
        assert_eq!(row.get(columns::TYPE_LABEL), None);
    }

    #[test]
    fn test_load_missing_markers_are_none() {
        let input = format!("{HEADER}\n1;01/01/2023;NULL;n/a;NA;#N/A\n");
        let table = load(input.as_bytes()).unwrap();
        let row = table.rows().next().unwrap();

        assert_eq!(row.get(columns::SPECIALTY), None);
        assert_eq!(row.get(columns::PAYER), None);
        assert_eq!(row.get(columns::CARE_CLASS), None);
        assert_eq!(row.get(columns::TYPE_LABEL), None);
    }

    #[test]
    fn test_load_quoted_delimiter() {
        let input = format!("{HEADER}\n1;01/01/2023;\"CARDIO; ADULTO\";SUS-SIA;A;X\n");
        let table = load(input.as_bytes()).unwrap();
        let row = table.rows().next().unwrap();

        assert_eq!(row.get(columns::SPECIALTY), Some("CARDIO; ADULTO"));
    }

    #[test]
    fn test_load_header_only() {
        let table = load(HEADER.as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 6);
    }

    #[test]
    fn test_load_empty_input_is_schema_error() {
        let result = load(b"");
        assert!(matches!(result, Err(IngestError::MissingColumn { .. })));
    }

    #[test]
    fn test_load_missing_column() {
        let input = "CD_ATENDIMENTO;DT_ATENDIMENTO;DS_ESPECIALID;NM_CONVENIO;TP_ATENDIMENTO\n";
        let result = load(input.as_bytes());
        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "TIPO"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_read_bytes_not_found() {
        let result = read_bytes(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
