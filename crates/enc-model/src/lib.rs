//! Data model for the encounter dashboard pipeline.
//!
//! - [`CanonicalRecord`]: one encounter row after date validation and
//!   field derivation.
//! - [`CareClass`] / [`PayerClass`]: typed classification codes.
//! - [`FilterSpec`] / [`DateRange`]: the selection a caller applies to the
//!   canonical dataset.

pub mod enums;
pub mod filter;
pub mod record;

pub use enums::{CareClass, PayerClass};
pub use filter::{DateRange, FilterSpec};
pub use record::CanonicalRecord;
