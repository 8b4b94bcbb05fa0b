//! Type-safe classification codes.
//!
//! The export carries these as free text (`A`/`U`/`I`, payer names). They
//! are parsed once during derivation so the rest of the pipeline matches
//! on enums instead of strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Care class taken from the `TP_ATENDIMENTO` column.
///
/// Codes outside the closed set are kept in [`CareClass::Other`] so that
/// dirty exports still load; they never match a filter built from
/// [`CareClass::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CareClass {
    /// `A`: ambulatory care.
    Ambulatory,
    /// `U`: urgency / emergency care.
    Urgency,
    /// `I`: hospital admission.
    Admission,
    /// Any other normalized code, preserved verbatim.
    Other(String),
}

impl CareClass {
    /// The closed set, in display order.
    pub const ALL: [CareClass; 3] = [
        CareClass::Ambulatory,
        CareClass::Urgency,
        CareClass::Admission,
    ];

    /// Builds a care class from an already-normalized code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "A" => CareClass::Ambulatory,
            "U" => CareClass::Urgency,
            "I" => CareClass::Admission,
            other => CareClass::Other(other.to_string()),
        }
    }

    /// Returns the code as it appears in the export.
    pub fn code(&self) -> &str {
        match self {
            CareClass::Ambulatory => "A",
            CareClass::Urgency => "U",
            CareClass::Admission => "I",
            CareClass::Other(code) => code,
        }
    }

    /// Human-readable label used by the presentation layer.
    pub fn label(&self) -> &str {
        match self {
            CareClass::Ambulatory => "Ambulatory",
            CareClass::Urgency => "Urgency",
            CareClass::Admission => "Admission",
            CareClass::Other(code) => code,
        }
    }

    /// Returns true for one of `A`, `U`, `I`.
    pub fn is_known(&self) -> bool {
        !matches!(self, CareClass::Other(_))
    }
}

impl fmt::Display for CareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CareClass {
    type Err = String;

    /// Parses one of the closed codes, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match CareClass::from_code(&normalized) {
            CareClass::Other(_) => Err(format!("Unknown care class: {s}")),
            known => Ok(known),
        }
    }
}

impl From<CareClass> for String {
    fn from(value: CareClass) -> Self {
        value.code().to_string()
    }
}

impl From<String> for CareClass {
    fn from(value: String) -> Self {
        CareClass::from_code(&value)
    }
}

/// Payer classification derived from the `NM_CONVENIO` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PayerClass {
    /// Billed to the public health system.
    #[serde(rename = "SUS")]
    Sus,
    /// Any other payer, including a missing one.
    #[serde(rename = "NAO_SUS")]
    NaoSus,
}

impl PayerClass {
    /// Normalized payer names billed to SUS.
    pub const SUS_PAYERS: [&'static str; 3] =
        ["SUS-SIA", "SUS-AIH", "SESA PROCEDIMENTOS S/SIGTAP"];

    /// Both classes, in display order.
    pub const ALL: [PayerClass; 2] = [PayerClass::Sus, PayerClass::NaoSus];

    /// Classifies an already-normalized payer name.
    pub fn from_normalized(payer: Option<&str>) -> Self {
        match payer {
            Some(name) if Self::SUS_PAYERS.contains(&name) => PayerClass::Sus,
            _ => PayerClass::NaoSus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayerClass::Sus => "SUS",
            PayerClass::NaoSus => "NAO_SUS",
        }
    }

    /// Label shown on dashboard cards.
    pub fn label(&self) -> &'static str {
        match self {
            PayerClass::Sus => "SUS",
            PayerClass::NaoSus => "Non-SUS",
        }
    }
}

impl fmt::Display for PayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayerClass {
    type Err = String;

    /// Accepts `SUS`, `NAO_SUS`, `NAO SUS` and `NAO-SUS`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "SUS" => Ok(PayerClass::Sus),
            "NAO_SUS" | "NÃO_SUS" => Ok(PayerClass::NaoSus),
            _ => Err(format!("Unknown payer class: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn care_class_from_code() {
        assert_eq!(CareClass::from_code("A"), CareClass::Ambulatory);
        assert_eq!(CareClass::from_code("U"), CareClass::Urgency);
        assert_eq!(CareClass::from_code("I"), CareClass::Admission);
        assert_eq!(CareClass::from_code("X"), CareClass::Other("X".to_string()));
        assert!(!CareClass::from_code("").is_known());
    }

    #[test]
    fn care_class_parse_rejects_unknown() {
        assert_eq!("u".parse::<CareClass>(), Ok(CareClass::Urgency));
        assert!("Z".parse::<CareClass>().is_err());
    }

    #[test]
    fn care_class_order_matches_display_order() {
        let mut classes = vec![
            CareClass::Other("Z".to_string()),
            CareClass::Admission,
            CareClass::Ambulatory,
            CareClass::Urgency,
        ];
        classes.sort();
        assert_eq!(classes[..3], CareClass::ALL);
    }

    #[test]
    fn care_class_serializes_as_code() {
        let json = serde_json::to_string(&CareClass::Urgency).unwrap();
        assert_eq!(json, "\"U\"");
        let back: CareClass = serde_json::from_str("\"Q\"").unwrap();
        assert_eq!(back, CareClass::Other("Q".to_string()));
    }

    #[test]
    fn payer_class_membership() {
        assert_eq!(PayerClass::from_normalized(Some("SUS-SIA")), PayerClass::Sus);
        assert_eq!(PayerClass::from_normalized(Some("SUS-AIH")), PayerClass::Sus);
        assert_eq!(
            PayerClass::from_normalized(Some("SESA PROCEDIMENTOS S/SIGTAP")),
            PayerClass::Sus
        );
        assert_eq!(PayerClass::from_normalized(Some("UNIMED")), PayerClass::NaoSus);
        assert_eq!(PayerClass::from_normalized(Some("")), PayerClass::NaoSus);
        assert_eq!(PayerClass::from_normalized(None), PayerClass::NaoSus);
    }

    #[test]
    fn payer_class_parse() {
        assert_eq!("sus".parse::<PayerClass>(), Ok(PayerClass::Sus));
        assert_eq!("nao-sus".parse::<PayerClass>(), Ok(PayerClass::NaoSus));
        assert_eq!("NAO SUS".parse::<PayerClass>(), Ok(PayerClass::NaoSus));
        assert!("private".parse::<PayerClass>().is_err());
    }

    #[test]
    fn payer_class_serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&PayerClass::Sus).unwrap(), "\"SUS\"");
        assert_eq!(
            serde_json::to_string(&PayerClass::NaoSus).unwrap(),
            "\"NAO_SUS\""
        );
    }
}
