//! Shared utilities for the encounter dashboard crates.

pub mod text;

pub use text::{canonical_header, fold_text, normalize};
