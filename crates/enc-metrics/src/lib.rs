//! Filtering and aggregation over the canonical encounter dataset.
//!
//! Every count here is a count of distinct encounter ids: an encounter may
//! span several rows, so row counts over-report. All functions are total
//! over empty input (counts 0, rates 0.0).

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod series;

pub use aggregate::{
    PayerSplit, SpecialtyCount, by_classification, daily_average, distinct_count,
    monthly_average, payer_split, top_n_by_specialty, urgency_percentage,
};
pub use filter::{filter, matches};
pub use report::{DEFAULT_TOP_N, DashboardReport, FilterOptions, Kpis, build_report, default_filter};
pub use series::{Granularity, SeriesPoint, TimeSeries, time_series};
