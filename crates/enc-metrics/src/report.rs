//! Dashboard report: every value the presentation layer displays for one
//! filter selection.

use std::collections::{BTreeMap, BTreeSet};

use enc_model::{CareClass, DateRange, FilterSpec, PayerClass};
use enc_transform::Dataset;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::aggregate::{
    PayerSplit, SpecialtyCount, by_classification, daily_average, distinct_count,
    monthly_average, payer_split, top_n_by_specialty, urgency_percentage,
};
use crate::filter::filter;
use crate::series::{Granularity, TimeSeries, time_series};

/// Size of the specialty ranking shown on the dashboard.
pub const DEFAULT_TOP_N: usize = 7;

/// Values offered by the selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Dataset date span; `None` signals "no data".
    pub date_bounds: Option<DateRange>,
    pub payer_classes: Vec<PayerClass>,
    pub care_classes: Vec<CareClass>,
    pub specialties: Vec<String>,
    pub types: Vec<String>,
}

impl FilterOptions {
    /// Observed payer classes, specialties and types, each sorted and
    /// de-duplicated, plus the fixed `A`, `U`, `I` care classes.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let payer_classes: BTreeSet<PayerClass> = records.iter().map(|r| r.payer_class).collect();
        let specialties: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.specialty_original.as_deref())
            .collect();
        let types: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.type_original.as_deref())
            .collect();

        Self {
            date_bounds: dataset.bounds(),
            payer_classes: payer_classes.into_iter().collect(),
            care_classes: CareClass::ALL.to_vec(),
            specialties: specialties.into_iter().map(str::to_string).collect(),
            types: types.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Initial selection: the full date span, every observed payer class, all
/// closed care classes, no specialty or type restriction.
///
/// Returns `None` for a dataset without records.
pub fn default_filter(dataset: &Dataset) -> Option<FilterSpec> {
    let bounds = dataset.bounds()?;
    let observed: BTreeSet<PayerClass> = dataset.records().iter().map(|r| r.payer_class).collect();
    Some(FilterSpec::new(bounds).with_payer_classes(observed))
}

/// Headline indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_encounters: usize,
    pub daily_average: f64,
    pub monthly_average: f64,
    pub sus: usize,
    pub nao_sus: usize,
    pub urgency_percentage: f64,
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub options: FilterOptions,
    pub filter: FilterSpec,
    pub kpis: Kpis,
    pub top_specialties: Vec<SpecialtyCount>,
    pub by_classification: BTreeMap<CareClass, usize>,
    pub by_payer: PayerSplit,
    pub time_series: TimeSeries,
    /// Rows of the export before invalid dates were dropped.
    pub loaded_rows: usize,
    /// Rows left after invalid dates were dropped.
    pub valid_rows: usize,
}

/// Filters `dataset` with `spec` and computes every dashboard value.
pub fn build_report(dataset: &Dataset, spec: &FilterSpec, top_n: usize) -> DashboardReport {
    let span = info_span!("report", records = dataset.len(), top_n);
    let _guard = span.enter();

    let selected = filter(dataset.records(), spec);
    debug!(selected = selected.len(), "applied filter");

    let split = payer_split(&selected);
    let kpis = Kpis {
        total_encounters: distinct_count(&selected),
        daily_average: daily_average(&selected),
        monthly_average: monthly_average(&selected),
        sus: split.sus,
        nao_sus: split.nao_sus,
        urgency_percentage: urgency_percentage(&selected),
    };

    let granularity = Granularity::select(spec.date_range, dataset.bounds());
    debug!(?granularity, "selected series granularity");

    DashboardReport {
        options: FilterOptions::from_dataset(dataset),
        filter: spec.clone(),
        kpis,
        top_specialties: top_n_by_specialty(&selected, top_n),
        by_classification: by_classification(&selected),
        by_payer: split,
        time_series: time_series(&selected, granularity),
        loaded_rows: dataset.raw_row_count(),
        valid_rows: dataset.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "CD_ATENDIMENTO;DT_ATENDIMENTO;DS_ESPECIALID;NM_CONVENIO;TP_ATENDIMENTO;TIPO";

    fn dataset(body: &str) -> Dataset {
        Dataset::from_bytes(format!("{HEADER}\n{body}").as_bytes()).unwrap()
    }

    #[test]
    fn test_filter_options_sorted_and_unique() {
        let dataset = dataset(
            "1;01/01/2023;Orto;Unimed;A;Exame\n2;02/01/2023;Cardio;Unimed;U;Consulta\n3;03/01/2023;Orto;Unimed;I;\n",
        );
        let options = FilterOptions::from_dataset(&dataset);

        assert_eq!(options.payer_classes, vec![PayerClass::NaoSus]);
        assert_eq!(options.specialties, vec!["Cardio", "Orto"]);
        assert_eq!(options.types, vec!["Consulta", "Exame"]);
        assert_eq!(options.care_classes, CareClass::ALL.to_vec());
    }

    #[test]
    fn test_default_filter_none_for_empty_dataset() {
        let dataset = dataset("1;bad;Orto;Unimed;A;Exame\n");
        assert!(default_filter(&dataset).is_none());
        assert_eq!(FilterOptions::from_dataset(&dataset).date_bounds, None);
    }

    #[test]
    fn test_default_filter_uses_observed_payers() {
        let dataset = dataset("1;01/01/2023;Orto;SUS-SIA;A;Exame\n");
        let spec = default_filter(&dataset).unwrap();
        assert_eq!(spec.payer_classes.len(), 1);
        assert!(spec.payer_classes.contains(&PayerClass::Sus));
        assert_eq!(Some(spec.date_range), dataset.bounds());
    }

    #[test]
    fn test_report_over_empty_selection_is_zero() {
        let dataset = dataset("1;01/01/2023;Orto;SUS-SIA;A;Exame\n");
        let spec = default_filter(&dataset)
            .unwrap()
            .with_care_classes(Vec::<CareClass>::new());
        let report = build_report(&dataset, &spec, DEFAULT_TOP_N);

        assert_eq!(report.kpis.total_encounters, 0);
        assert_eq!(report.kpis.daily_average, 0.0);
        assert_eq!(report.kpis.urgency_percentage, 0.0);
        assert!(report.top_specialties.is_empty());
        assert!(report.time_series.points.is_empty());
        assert_eq!(report.loaded_rows, 1);
        assert_eq!(report.valid_rows, 1);
    }

    #[test]
    fn test_report_counts_rows_before_and_after_date_drop() {
        let dataset = dataset("1;01/01/2023;Orto;SUS-SIA;A;Exame\n2;01/01/23;Orto;SUS-SIA;A;Exame\n");
        let spec = default_filter(&dataset).unwrap();
        let report = build_report(&dataset, &spec, DEFAULT_TOP_N);

        assert_eq!(report.loaded_rows, 2);
        assert_eq!(report.valid_rows, 1);
    }
}
