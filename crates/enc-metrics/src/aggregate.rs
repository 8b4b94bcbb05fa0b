//! KPIs and categorical distributions.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use enc_model::{CanonicalRecord, CareClass, PayerClass};
use serde::{Deserialize, Serialize};

/// Distinct encounter ids of `records`. Missing ids are not counted.
fn distinct_ids<'a, I>(records: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = &'a CanonicalRecord>,
{
    records
        .into_iter()
        .filter_map(|r| r.encounter_id.as_deref())
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Rounds to one decimal, ties to even.
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Number of distinct encounters.
pub fn distinct_count(records: &[&CanonicalRecord]) -> usize {
    distinct_ids(records.iter().copied()).len()
}

/// Distinct encounters per distinct calendar date; 0.0 without data.
pub fn daily_average(records: &[&CanonicalRecord]) -> f64 {
    let days: BTreeSet<_> = records.iter().map(|r| r.date).collect();
    ratio(distinct_count(records), days.len())
}

/// Distinct encounters per distinct (year, month); 0.0 without data.
pub fn monthly_average(records: &[&CanonicalRecord]) -> f64 {
    let months: BTreeSet<_> = records.iter().map(|r| r.year_month()).collect();
    ratio(distinct_count(records), months.len())
}

/// Distinct encounters split by payer class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerSplit {
    #[serde(rename = "SUS")]
    pub sus: usize,
    #[serde(rename = "NAO_SUS")]
    pub nao_sus: usize,
}

impl PayerSplit {
    pub fn get(&self, class: PayerClass) -> usize {
        match class {
            PayerClass::Sus => self.sus,
            PayerClass::NaoSus => self.nao_sus,
        }
    }

    pub fn total(&self) -> usize {
        self.sus + self.nao_sus
    }
}

/// SUS / non-SUS encounter counts.
///
/// An encounter with at least one SUS row counts as SUS; the remainder of
/// [`distinct_count`] is non-SUS, so both parts always add up to it.
pub fn payer_split(records: &[&CanonicalRecord]) -> PayerSplit {
    let total = distinct_count(records);
    let sus = distinct_ids(
        records
            .iter()
            .copied()
            .filter(|r| r.payer_class == PayerClass::Sus),
    )
    .len();
    PayerSplit {
        sus,
        nao_sus: total - sus,
    }
}

/// Share of distinct encounters with an urgency row, in percent.
pub fn urgency_percentage(records: &[&CanonicalRecord]) -> f64 {
    let urgent = distinct_ids(
        records
            .iter()
            .copied()
            .filter(|r| r.care_class == Some(CareClass::Urgency)),
    )
    .len();
    100.0 * ratio(urgent, distinct_count(records))
}

/// One row of the specialty ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialtyCount {
    pub specialty: String,
    pub count: usize,
    /// Share of all distinct encounters, rounded to one decimal.
    pub percent_of_total: f64,
}

/// Specialties ranked by distinct encounters.
///
/// Groups are keyed by the original specialty text; records without a
/// specialty form no group. Ties keep ascending name order. The percentage
/// is taken over every distinct encounter of `records`, not only the ones
/// with a specialty.
pub fn top_n_by_specialty(records: &[&CanonicalRecord], n: usize) -> Vec<SpecialtyCount> {
    let total = distinct_count(records);

    let mut groups: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for record in records {
        let Some(specialty) = record.specialty_original.as_deref() else {
            continue;
        };
        let ids = groups.entry(specialty).or_default();
        if let Some(id) = record.encounter_id.as_deref() {
            ids.insert(id);
        }
    }

    let mut ranked: Vec<(&str, usize)> = groups
        .into_iter()
        .map(|(specialty, ids)| (specialty, ids.len()))
        .collect();
    // Stable: equal counts keep the name order of the grouping.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(specialty, count)| SpecialtyCount {
            specialty: specialty.to_string(),
            count,
            percent_of_total: round1(100.0 * ratio(count, total)),
        })
        .collect()
}

/// Distinct encounters per care class. Records without a care class form
/// no group.
pub fn by_classification(records: &[&CanonicalRecord]) -> BTreeMap<CareClass, usize> {
    let mut groups: BTreeMap<&CareClass, HashSet<&str>> = BTreeMap::new();
    for record in records {
        let Some(class) = record.care_class.as_ref() else {
            continue;
        };
        let ids = groups.entry(class).or_default();
        if let Some(id) = record.encounter_id.as_deref() {
            ids.insert(id);
        }
    }
    groups
        .into_iter()
        .map(|(class, ids)| (class.clone(), ids.len()))
        .collect()
}
