//! Time-bucketed encounter series.
//!
//! The bucket size is not a caller option. [`Granularity::select`] picks
//! monthly buckets only when the active date range is exactly the full span
//! of the dataset, and daily buckets for any narrower or shifted range.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use enc_model::{CanonicalRecord, DateRange};
use serde::{Deserialize, Serialize};

/// Bucket size of the evolution series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
}

impl Granularity {
    /// Monthly when `active` equals the dataset bounds, daily otherwise.
    ///
    /// A dataset without bounds (no records) yields daily.
    pub fn select(active: DateRange, dataset_bounds: Option<DateRange>) -> Self {
        match dataset_bounds {
            Some(bounds) if bounds == active => Granularity::Monthly,
            _ => Granularity::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    Day(NaiveDate),
    Month(i32, u32),
}

impl Bucket {
    fn of(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Daily => Bucket::Day(date),
            Granularity::Monthly => Bucket::Month(date.year(), date.month()),
        }
    }

    fn label(self) -> String {
        match self {
            Bucket::Day(date) => date.format("%Y-%m-%d").to_string(),
            Bucket::Month(year, month) => format!("{year:04}-{month:02}"),
        }
    }
}

/// One bucket of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `YYYY-MM` for monthly buckets, `YYYY-MM-DD` for daily ones.
    pub label: String,
    pub count: usize,
}

/// Series together with the granularity it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub granularity: Granularity,
    pub points: Vec<SeriesPoint>,
}

/// Distinct encounters per bucket, in chronological order.
///
/// Only buckets with at least one record appear.
pub fn time_series(records: &[&CanonicalRecord], granularity: Granularity) -> TimeSeries {
    let mut buckets: BTreeMap<Bucket, HashSet<&str>> = BTreeMap::new();
    for record in records {
        let ids = buckets
            .entry(Bucket::of(record.date, granularity))
            .or_default();
        if let Some(id) = record.encounter_id.as_deref() {
            ids.insert(id);
        }
    }

    let points = buckets
        .into_iter()
        .map(|(bucket, ids)| SeriesPoint {
            label: bucket.label(),
            count: ids.len(),
        })
        .collect();

    TimeSeries {
        granularity,
        points,
    }
}
