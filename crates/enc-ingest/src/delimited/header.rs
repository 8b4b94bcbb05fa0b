//! Header canonicalization and schema check.

use std::collections::BTreeSet;

use csv::StringRecord;
use enc_common::canonical_header;
use tracing::{debug, warn};

use crate::columns::{REQUIRED_COLUMNS, is_known_column};
use crate::error::{IngestError, Result};

/// Canonicalizes every header cell (trim, upper-case, accent strip).
pub(crate) fn canonicalize_headers(record: &StringRecord) -> Vec<String> {
    let headers: Vec<String> = record.iter().map(canonical_header).collect();

    let mut seen = BTreeSet::new();
    for name in &headers {
        if !seen.insert(name.as_str()) {
            warn!(column = %name, "duplicate column after canonicalization, keeping the first");
        } else if !is_known_column(name) {
            debug!(column = %name, "ignoring unrecognized column");
        }
    }

    headers
}

/// Fails with [`IngestError::MissingColumn`] on the first required column
/// that is absent.
pub(crate) fn check_required_columns(headers: &[String]) -> Result<()> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn {
                column: required.to_string(),
                present: headers.join(", "),
            });
        }
    }
    Ok(())
}
