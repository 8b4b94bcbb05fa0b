//! Library components of the encounter dashboard CLI.

pub mod format;
pub mod logging;
pub mod selection;
