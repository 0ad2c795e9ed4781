//! Serialized form of a suggestion index

use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tantivy::directory::RamDirectory;
use tantivy::{Directory, Index};

/// Bumped whenever the snapshot layout or the index schema changes
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

const META_FILE: &str = "meta.json";

/// One file of a committed Tantivy index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Path relative to the index directory
    pub path: String,

    /// Raw file contents, footer included
    pub bytes: Vec<u8>,
}

/// Every file needed to reopen a committed index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSnapshot {
    pub format_version: u32,
    pub files: Vec<SnapshotFile>,
}

impl IndexSnapshot {
    /// Copy the searchable segments and `meta.json` out of `index`
    pub fn capture(index: &Index) -> Result<Self> {
        let directory = index.directory();

        let mut paths: BTreeSet<PathBuf> = BTreeSet::new();
        for segment_meta in index.searchable_segment_metas()? {
            paths.extend(segment_meta.list_files());
        }
        paths.insert(PathBuf::from(META_FILE));

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            // list_files() names every component, some of which are never written
            let exists = directory
                .exists(&path)
                .map_err(|e| SuggestError::Search(format!("Failed to stat {:?}: {}", path, e)))?;
            if !exists {
                continue;
            }

            let bytes = directory
                .atomic_read(&path)
                .map_err(|e| SuggestError::Search(format!("Failed to read {:?}: {}", path, e)))?;

            files.push(SnapshotFile {
                path: path.to_string_lossy().into_owned(),
                bytes,
            });
        }

        Ok(Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            files,
        })
    }

    /// Materialize the files into a fresh RAM directory and open it
    pub fn restore(&self) -> Result<Index> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(SuggestError::MalformedIndex(format!(
                "Unsupported snapshot format version {} (expected {})",
                self.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        if !self.files.iter().any(|file| file.path == META_FILE) {
            return Err(SuggestError::MalformedIndex(format!(
                "Snapshot has no {}",
                META_FILE
            )));
        }

        let directory = RamDirectory::create();
        for file in &self.files {
            directory.atomic_write(Path::new(&file.path), &file.bytes)?;
        }

        Index::open(directory)
            .map_err(|e| SuggestError::MalformedIndex(format!("Failed to open index: {}", e)))
    }

    /// Encode with bincode
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`IndexSnapshot::encode`]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Total payload size in bytes
    pub fn size_bytes(&self) -> usize {
        self.files.iter().map(|file| file.bytes.len()).sum()
    }
}
