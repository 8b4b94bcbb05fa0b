use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{CareClass, PayerClass};

/// One encounter row after date validation and field derivation.
///
/// `encounter_id` is not unique: an encounter may span several rows, so
/// counts are always taken over distinct ids, never over rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub encounter_id: Option<String>,
    pub date: NaiveDate,
    pub specialty_original: Option<String>,
    pub specialty_normalized: Option<String>,
    pub type_original: Option<String>,
    pub type_normalized: Option<String>,
    /// `None` when the source cell was empty.
    pub care_class: Option<CareClass>,
    pub payer_class: PayerClass,
}

impl CanonicalRecord {
    /// Returns the (year, month) bucket of the encounter date.
    pub fn year_month(&self) -> (i32, u32) {
        use chrono::Datelike;
        (self.date.year(), self.date.month())
    }
}
