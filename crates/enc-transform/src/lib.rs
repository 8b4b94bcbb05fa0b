//! Canonical dataset construction.
//!
//! [`derive`] turns a [`RawTable`](enc_ingest::RawTable) into
//! [`CanonicalRecord`](enc_model::CanonicalRecord)s: strict date parsing
//! (unparseable rows are dropped), text normalization and SUS / non-SUS
//! classification. [`Dataset`] bundles the records with the values the
//! presentation layer needs, and [`DatasetCache`] memoizes it per input
//! file.

pub mod cache;
pub mod dataset;
pub mod derive;

pub use cache::{DatasetCache, FileIdentity};
pub use dataset::Dataset;
pub use derive::{DATE_FORMAT, classify_payer, derive, parse_encounter_date};
