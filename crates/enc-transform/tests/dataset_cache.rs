//! Integration tests for deriving and caching datasets from files.

use std::io::Write;
use std::sync::Arc;

use enc_model::PayerClass;
use enc_transform::{DatasetCache, FileIdentity};
use tempfile::NamedTempFile;

fn create_temp_export(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

const EXPORT: &str = "CD_ATENDIMENTO;DT_ATENDIMENTO;DS_ESPECIALID;NM_CONVENIO;TP_ATENDIMENTO;TIPO;DATA;CD_ORI_ATE
1;01/01/2023;CARDIO;SUS-SIA;A;Consulta;31/12/1999;1
2;01/01/2023;CARDIO;Unimed;U;Emergencia;garbage;2
1;01/01/2023;ORTO;SUS-SIA;A;Consulta;;3
3;31/31/2023;ORTO;SUS-SIA;A;Consulta;01/01/2023;4
";

#[test]
fn test_cache_from_path_reuses_dataset() {
    let file = create_temp_export(EXPORT.as_bytes());
    let mut cache = DatasetCache::new();

    let first = cache.get_or_load_path(file.path()).unwrap();
    let second = cache.get_or_load_path(file.path()).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(
        cache.identity(),
        Some(&FileIdentity::of_bytes(EXPORT.as_bytes()))
    );
}

#[test]
fn test_legacy_columns_do_not_affect_derivation() {
    let file = create_temp_export(EXPORT.as_bytes());
    let mut cache = DatasetCache::new();
    let dataset = cache.get_or_load_path(file.path()).unwrap();

    // Row 4 has a valid legacy DATA but an invalid DT_ATENDIMENTO
    assert_eq!(dataset.raw_row_count(), 4);
    assert_eq!(dataset.len(), 3);
    let bounds = dataset.bounds().unwrap();
    assert_eq!(bounds.start, bounds.end);
}

#[test]
fn test_payer_classes_are_always_populated() {
    let file = create_temp_export(EXPORT.as_bytes());
    let mut cache = DatasetCache::new();
    let dataset = cache.get_or_load_path(file.path()).unwrap();

    let sus = dataset
        .records()
        .iter()
        .filter(|r| r.payer_class == PayerClass::Sus)
        .count();
    assert_eq!(sus, 2);
    assert_eq!(dataset.len() - sus, 1);
}

#[test]
fn test_cache_missing_file_is_error() {
    let mut cache = DatasetCache::new();
    assert!(cache
        .get_or_load_path(std::path::Path::new("/no/such/file.csv"))
        .is_err());
    assert!(cache.identity().is_none());
}
