//! Load-once cache of the canonical dataset.
//!
//! The dataset is keyed by a SHA256 of the export bytes. Presenting the
//! same bytes again returns the shared dataset without re-parsing; any
//! other bytes replace the cached entry.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use enc_ingest::Result;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::dataset::Dataset;

/// Identity of an input file: hex SHA256 of its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity(String);

impl FileIdentity {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self(hex::encode(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Holds the dataset of the most recently loaded file.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(FileIdentity, Arc<Dataset>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset for `bytes`, loading it only when the file
    /// identity differs from the cached one.
    ///
    /// On a load error the previous entry is left untouched.
    pub fn get_or_load(&mut self, bytes: &[u8]) -> Result<Arc<Dataset>> {
        let identity = FileIdentity::of_bytes(bytes);
        if let Some((cached, dataset)) = &self.entry
            && *cached == identity
        {
            debug!(identity = %identity, "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Dataset::from_bytes(bytes)?);
        info!(
            identity = %identity,
            records = dataset.len(),
            "dataset cache populated"
        );
        self.entry = Some((identity, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Reads `path` and delegates to [`DatasetCache::get_or_load`].
    pub fn get_or_load_path(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        let bytes = enc_ingest::read_bytes(path)?;
        self.get_or_load(&bytes)
    }

    /// Identity of the cached file, if any.
    pub fn identity(&self) -> Option<&FileIdentity> {
        self.entry.as_ref().map(|(identity, _)| identity)
    }

    /// Drops the cached dataset.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
