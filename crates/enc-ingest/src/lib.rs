//! Encounter export ingestion.
//!
//! This crate turns the raw bytes of a hospital encounter export into a
//! [`RawTable`]: decoded text, `;`-separated cells, canonical column names.
//! No value is interpreted here; dates, classifications and payer rules
//! are derived downstream.
//!
//! # Features
//!
//! - **Encoding fallback**: UTF-8 first, ISO-8859-1 second
//! - **Header canonicalization**: trimmed, upper-cased, accent-free names
//! - **Schema check**: every required column must be present
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use enc_ingest::{columns, load_path};
//!
//! let table = load_path(Path::new("atendimentos.csv"))?;
//! for row in table.rows() {
//!     println!("{:?}", row.get(columns::ENCOUNTER_DATE));
//! }
//! ```

pub mod columns;
mod delimited;
mod decode;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{SourceEncoding, decode};

// === CSV Reading ===
pub use delimited::{FIELD_DELIMITER, load, load_path, read_bytes};

// === Raw Table ===
pub use table::{RawRow, RawTable};
