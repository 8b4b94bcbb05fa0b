//! In-memory raw table keyed by canonical column names.

use crate::decode::SourceEncoding;

/// Rows of an export, every cell kept as text.
///
/// Empty cells and cells missing from short rows are `None`.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    encoding: SourceEncoding,
}

impl RawTable {
    pub(crate) fn new(
        headers: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
        encoding: SourceEncoding,
    ) -> Self {
        Self {
            headers,
            rows,
            encoding,
        }
    }

    /// Canonical column names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Encoding the input was decoded with.
    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the export has a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a canonical column. The first occurrence wins.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Iterates rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows.iter().map(move |values| RawRow {
            table: self,
            values,
        })
    }
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    table: &'a RawTable,
    values: &'a [Option<String>],
}

impl<'a> RawRow<'a> {
    /// Value of a canonical column, `None` when absent or empty.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table
            .column_index(column)
            .and_then(|idx| self.value(idx))
    }

    /// Value at a column position, `None` when absent or empty.
    pub fn value(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).and_then(Option::as_deref)
    }
}
