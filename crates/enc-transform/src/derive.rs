//! Per-row field derivation.

use chrono::NaiveDate;
use enc_common::normalize;
use enc_ingest::{RawRow, RawTable, columns};
use enc_model::{CanonicalRecord, CareClass, PayerClass};
use tracing::{debug, info};

/// Format of the `DT_ATENDIMENTO` column.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Column positions resolved once per table.
#[derive(Debug, Clone, Copy)]
struct ColumnPositions {
    encounter_id: Option<usize>,
    date: Option<usize>,
    specialty: Option<usize>,
    payer: Option<usize>,
    care_class: Option<usize>,
    type_label: Option<usize>,
}

impl ColumnPositions {
    fn resolve(table: &RawTable) -> Self {
        Self {
            encounter_id: table.column_index(columns::ENCOUNTER_ID),
            date: table.column_index(columns::ENCOUNTER_DATE),
            specialty: table.column_index(columns::SPECIALTY),
            payer: table.column_index(columns::PAYER),
            care_class: table.column_index(columns::CARE_CLASS),
            type_label: table.column_index(columns::TYPE_LABEL),
        }
    }
}

fn cell<'a>(row: &RawRow<'a>, position: Option<usize>) -> Option<&'a str> {
    position.and_then(|idx| row.value(idx))
}

/// Parses an encounter date as `DD/MM/YYYY`.
///
/// Surrounding whitespace is ignored and day and month may be unpadded
/// (`1/2/2023`). The year must be exactly four digits: chrono's `%Y` alone
/// would read `01/01/23` as year 23. Anything that does not form a real
/// calendar date (e.g. `31/31/2023`, `2023-01-01`) yields `None`.
pub fn parse_encounter_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    let (_, year) = trimmed.rsplit_once('/')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Classifies a raw payer name as SUS or non-SUS.
///
/// The name is normalized first, so `sus-sia`, ` SUS-AIH ` and
/// `Sesa Procedimentos S/Sigtap` all count as SUS.
pub fn classify_payer(raw: Option<&str>) -> PayerClass {
    PayerClass::from_normalized(normalize(raw).as_deref())
}

fn derive_record(row: &RawRow<'_>, positions: &ColumnPositions) -> Option<CanonicalRecord> {
    let date = parse_encounter_date(cell(row, positions.date))?;

    let specialty = cell(row, positions.specialty);
    let type_label = cell(row, positions.type_label);

    Some(CanonicalRecord {
        encounter_id: cell(row, positions.encounter_id).map(str::to_string),
        date,
        specialty_original: specialty.map(str::to_string),
        specialty_normalized: normalize(specialty),
        type_original: type_label.map(str::to_string),
        type_normalized: normalize(type_label),
        care_class: normalize(cell(row, positions.care_class)).map(CareClass::from),
        payer_class: classify_payer(cell(row, positions.payer)),
    })
}

/// Derives canonical records from a raw table.
///
/// Rows whose date does not parse are dropped without error. Input order is
/// kept. An empty result is valid.
pub fn derive(table: &RawTable) -> Vec<CanonicalRecord> {
    let positions = ColumnPositions::resolve(table);

    let records: Vec<CanonicalRecord> = table
        .rows()
        .filter_map(|row| derive_record(&row, &positions))
        .collect();

    let dropped = table.len() - records.len();
    if dropped > 0 {
        debug!(dropped, "dropped rows with unparseable encounter dates");
    }
    info!(
        rows = table.len(),
        records = records.len(),
        "derived canonical records"
    );
    records
}
