//! `;`-delimited export reading.

mod header;
mod reader;

pub use reader::{FIELD_DELIMITER, load, load_path, read_bytes};
