//! Filter engine.

use enc_model::{CanonicalRecord, FilterSpec};

/// Returns true if `record` passes every criterion of `spec`.
///
/// Payer and care class sets are always applied, so an empty set rejects
/// everything. Specialty and type sets only restrict when non-empty; they
/// are matched against the original text, and a missing value never
/// matches a non-empty set.
pub fn matches(record: &CanonicalRecord, spec: &FilterSpec) -> bool {
    if !spec.date_range.contains(record.date) {
        return false;
    }
    if !spec.payer_classes.contains(&record.payer_class) {
        return false;
    }
    match &record.care_class {
        Some(class) if spec.care_classes.contains(class) => {}
        _ => return false,
    }
    if !spec.specialties.is_empty()
        && !record
            .specialty_original
            .as_ref()
            .is_some_and(|s| spec.specialties.contains(s))
    {
        return false;
    }
    if !spec.types.is_empty()
        && !record
            .type_original
            .as_ref()
            .is_some_and(|t| spec.types.contains(t))
    {
        return false;
    }
    true
}

/// Selects the records passing `spec`, in input order.
pub fn filter<'a>(records: &'a [CanonicalRecord], spec: &FilterSpec) -> Vec<&'a CanonicalRecord> {
    records.iter().filter(|r| matches(r, spec)).collect()
}
