//! Canonical column names of the encounter export.
//!
//! Names are given in their canonical form (see
//! [`enc_common::canonical_header`]); headers such as `Dt_Atendimento` or
//! `DS_ESPECIALÍD` resolve to these.

/// Encounter identifier. Several rows may share one value.
pub const ENCOUNTER_ID: &str = "CD_ATENDIMENTO";
/// Encounter date, `DD/MM/YYYY`.
pub const ENCOUNTER_DATE: &str = "DT_ATENDIMENTO";
/// Specialty name.
pub const SPECIALTY: &str = "DS_ESPECIALID";
/// Payer (convenio) name.
pub const PAYER: &str = "NM_CONVENIO";
/// Type-of-care code (`A`, `U`, `I`).
pub const CARE_CLASS: &str = "TP_ATENDIMENTO";
/// Free-text type label.
pub const TYPE_LABEL: &str = "TIPO";

/// Legacy date column. Recognized, never used for derivation.
pub const LEGACY_DATE: &str = "DATA";
/// Legacy origin code column. Recognized, never used for derivation.
pub const LEGACY_ORIGIN: &str = "CD_ORI_ATE";

/// Columns that must be present for an export to load.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    ENCOUNTER_ID,
    ENCOUNTER_DATE,
    SPECIALTY,
    PAYER,
    CARE_CLASS,
    TYPE_LABEL,
];

/// Columns that may be present and are ignored.
pub const LEGACY_COLUMNS: [&str; 2] = [LEGACY_DATE, LEGACY_ORIGIN];

/// Returns true if `name` is a required or legacy column.
pub fn is_known_column(name: &str) -> bool {
    REQUIRED_COLUMNS.contains(&name) || LEGACY_COLUMNS.contains(&name)
}
