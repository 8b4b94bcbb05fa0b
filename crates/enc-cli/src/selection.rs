//! Turns command-line filter flags into a [`FilterSpec`].
//!
//! Flags that are left out fall back to the dashboard's initial selection:
//! the full dataset span, every observed payer class and the three closed
//! care classes. `no_payers` / `no_care` express the opposite state, with
//! nothing selected.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use enc_metrics::default_filter;
use enc_model::{CareClass, DateRange, FilterSpec, PayerClass};
use enc_transform::{DATE_FORMAT, Dataset};

/// Raw filter choices collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub payers: Vec<PayerClass>,
    /// Deselect every payer class; the report comes out empty.
    pub no_payers: bool,
    pub care: Vec<CareClass>,
    /// Deselect every care class; the report comes out empty.
    pub no_care: bool,
    pub specialties: Vec<String>,
    pub types: Vec<String>,
}

/// Parses `DD/MM/YYYY`, the format used by the export, or ISO `YYYY-MM-DD`.
pub fn parse_cli_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| format!("invalid date '{value}', expected DD/MM/YYYY"))
}

/// Resolves `selection` against `dataset`.
///
/// Returns `Ok(None)` when no date range can be formed: the dataset has no
/// valid dates and the caller did not give both `from` and `to`.
///
/// # Errors
///
/// Fails when the resolved start date is after the end date.
pub fn resolve(dataset: &Dataset, selection: &Selection) -> Result<Option<FilterSpec>> {
    let initial = default_filter(dataset);
    let bounds = dataset.bounds();

    let Some(start) = selection.from.or(bounds.map(|b| b.start)) else {
        return Ok(None);
    };
    let Some(end) = selection.to.or(bounds.map(|b| b.end)) else {
        return Ok(None);
    };
    if start > end {
        bail!(
            "start date {} is after end date {}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );
    }

    let mut spec = FilterSpec::new(DateRange::new(start, end));
    if selection.no_payers {
        spec.payer_classes.clear();
    } else if !selection.payers.is_empty() {
        spec = spec.with_payer_classes(selection.payers.iter().copied());
    } else if let Some(initial) = initial {
        spec.payer_classes = initial.payer_classes;
    }
    if selection.no_care {
        spec.care_classes.clear();
    } else if !selection.care.is_empty() {
        spec = spec.with_care_classes(selection.care.iter().cloned());
    }
    Ok(Some(
        spec.with_specialties(selection.specialties.iter().cloned())
            .with_types(selection.types.iter().cloned()),
    ))
}
