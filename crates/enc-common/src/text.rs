//! Text folding for Portuguese administrative free text.
//!
//! Values coming out of hospital exports differ in case, accents and
//! surrounding whitespace ("Clínica Médica", "CLINICA MEDICA ", ...). Every
//! comparison in the pipeline goes through [`normalize`] so that those
//! variants collapse onto one canonical form.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Byte-order mark some exporters prepend to the first header cell.
const BOM: char = '\u{feff}';

/// Folds a string: canonical decomposition, combining marks dropped,
/// upper-cased and trimmed.
///
/// # Examples
///
/// ```
/// use enc_common::fold_text;
///
/// assert_eq!(fold_text("Clínica Médica"), "CLINICA MEDICA");
/// assert_eq!(fold_text("  sus-sia "), "SUS-SIA");
/// ```
pub fn fold_text(value: &str) -> String {
    let stripped: String = value.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
    stripped.to_uppercase().trim().to_string()
}

/// Normalizes an optional cell value.
///
/// Absent values stay absent; present values are folded with [`fold_text`].
///
/// # Examples
///
/// ```
/// use enc_common::normalize;
///
/// assert_eq!(normalize(None), None);
/// assert_eq!(normalize(Some("Urgência")), Some("URGENCIA".to_string()));
/// ```
pub fn normalize(value: Option<&str>) -> Option<String> {
    value.map(fold_text)
}

/// Canonical form of a CSV header cell.
///
/// Same folding as [`fold_text`], after dropping a leading byte-order mark.
pub fn canonical_header(raw: &str) -> String {
    fold_text(raw.trim_start_matches(BOM))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_text_accents_and_case() {
        assert_eq!(fold_text("Clínica Médica"), "CLINICA MEDICA");
        assert_eq!(fold_text("ortopedia e traumatologia"), "ORTOPEDIA E TRAUMATOLOGIA");
        assert_eq!(fold_text("Internação"), "INTERNACAO");
        assert_eq!(fold_text("Não SUS"), "NAO SUS");
    }

    #[test]
    fn test_fold_text_trims_outer_whitespace_only() {
        assert_eq!(fold_text("  Sesa Procedimentos S/Sigtap\t"), "SESA PROCEDIMENTOS S/SIGTAP");
        // Inner spacing is kept as-is
        assert_eq!(fold_text("a  b"), "A  B");
    }

    #[test]
    fn test_fold_text_precomposed_and_decomposed_agree() {
        let precomposed = "Jos\u{e9}";
        let decomposed = "Jose\u{301}";
        assert_eq!(fold_text(precomposed), fold_text(decomposed));
        assert_eq!(fold_text(precomposed), "JOSE");
    }

    #[test]
    fn test_fold_text_empty() {
        assert_eq!(fold_text(""), "");
        assert_eq!(fold_text("   "), "");
    }

    #[test]
    fn test_normalize_none() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_normalize_some() {
        assert_eq!(normalize(Some("sus-aih")), Some("SUS-AIH".to_string()));
        assert_eq!(normalize(Some("")), Some(String::new()));
    }

    #[test]
    fn test_canonical_header() {
        assert_eq!(canonical_header("\u{feff}cd_atendimento"), "CD_ATENDIMENTO");
        assert_eq!(canonical_header(" Dt_Atendimento "), "DT_ATENDIMENTO");
        assert_eq!(canonical_header("Tipo"), "TIPO");
        assert_eq!(canonical_header("DS_ESPECIALÍD"), "DS_ESPECIALID");
    }
}
