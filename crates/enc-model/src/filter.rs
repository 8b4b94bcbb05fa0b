//! Caller-supplied selection over the canonical dataset.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{CareClass, PayerClass};

/// Inclusive calendar date range.
///
/// A range whose `start` is after its `end` contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns true if `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filter selection applied before aggregation.
///
/// Empty `payer_classes` or `care_classes` select nothing. Empty
/// `specialties` or `types` select everything. Specialty and type values
/// are compared against the original (non-normalized) text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub date_range: DateRange,
    pub payer_classes: BTreeSet<PayerClass>,
    pub care_classes: BTreeSet<CareClass>,
    pub specialties: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl FilterSpec {
    /// Selection over `date_range` with every payer class and every closed
    /// care class, and no specialty or type restriction.
    pub fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            payer_classes: PayerClass::ALL.into_iter().collect(),
            care_classes: CareClass::ALL.into_iter().collect(),
            specialties: BTreeSet::new(),
            types: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_payer_classes(mut self, classes: impl IntoIterator<Item = PayerClass>) -> Self {
        self.payer_classes = classes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_care_classes(mut self, classes: impl IntoIterator<Item = CareClass>) -> Self {
        self.care_classes = classes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_specialties<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.specialties = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_types<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.types = names.into_iter().map(Into::into).collect();
        self
    }
}
