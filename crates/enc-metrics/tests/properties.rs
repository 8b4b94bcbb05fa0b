//! Property tests for aggregation invariants.

use chrono::NaiveDate;
use enc_metrics::{
    by_classification, distinct_count, payer_split, top_n_by_specialty, urgency_percentage,
};
use enc_model::{CanonicalRecord, CareClass, PayerClass};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = CanonicalRecord> {
    (
        proptest::option::weighted(0.95, 0u8..20),
        1u32..=28,
        proptest::option::of(prop::sample::select(vec!["CARDIO", "ORTO", "NEURO"])),
        prop::sample::select(vec!["A", "U", "I", "X"]),
        any::<bool>(),
    )
        .prop_map(|(id, day, specialty, care, sus)| CanonicalRecord {
            encounter_id: id.map(|id| id.to_string()),
            date: NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
            specialty_original: specialty.map(str::to_string),
            specialty_normalized: specialty.map(str::to_string),
            type_original: None,
            type_normalized: None,
            care_class: Some(CareClass::from_code(care)),
            payer_class: if sus { PayerClass::Sus } else { PayerClass::NaoSus },
        })
}

proptest! {
    #[test]
    fn payer_split_sums_to_distinct_count(records in prop::collection::vec(arb_record(), 0..60)) {
        let refs: Vec<&CanonicalRecord> = records.iter().collect();
        let split = payer_split(&refs);
        prop_assert_eq!(split.sus + split.nao_sus, distinct_count(&refs));
    }

    #[test]
    fn urgency_percentage_is_bounded(records in prop::collection::vec(arb_record(), 0..60)) {
        let refs: Vec<&CanonicalRecord> = records.iter().collect();
        let pct = urgency_percentage(&refs);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn group_counts_never_exceed_total(records in prop::collection::vec(arb_record(), 0..60)) {
        let refs: Vec<&CanonicalRecord> = records.iter().collect();
        let total = distinct_count(&refs);
        for row in top_n_by_specialty(&refs, usize::MAX) {
            prop_assert!(row.count <= total);
        }
        for count in by_classification(&refs).values() {
            prop_assert!(*count <= total);
        }
    }

    #[test]
    fn top_n_is_sorted_descending(records in prop::collection::vec(arb_record(), 0..60), n in 0usize..5) {
        let refs: Vec<&CanonicalRecord> = records.iter().collect();
        let top = top_n_by_specialty(&refs, n);
        prop_assert!(top.len() <= n);
        prop_assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
