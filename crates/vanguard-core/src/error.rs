//! Error types shared by the pool, the wave data loader and the tools.
//!
//! None of these abort a run. The simulation logs them and skips the
//! affected unit of work.

use std::path::PathBuf;

use thiserror::Error;

/// Entity pool failures. Entities are identified by their raw id bits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("no archetype registered under pool tag '{0}'")]
    UnknownTag(String),
    #[error("entity {entity:#x} is already inactive in pool '{tag}'")]
    AlreadyInactive { tag: String, entity: u64 },
    #[error("entity {entity:#x} belongs to pool '{actual}', not '{requested}'")]
    TagMismatch {
        requested: String,
        actual: String,
        entity: u64,
    },
    #[error("entity {entity:#x} was not built by the pool")]
    NotPooled { entity: u64 },
}

/// Malformed authored wave data. Locations are zero-based indices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("wave {wave} ('{name}') has no enemy groups")]
    NoGroups { wave: usize, name: String },
    #[error("wave {wave}: negative pre-wave delay {delay}")]
    NegativePreWaveDelay { wave: usize, delay: f64 },
    #[error("wave {wave} group {group}: formation '{formation}' is not defined")]
    MissingFormation {
        wave: usize,
        group: usize,
        formation: String,
    },
    #[error("wave {wave} group {group}: formation '{formation}' has no points")]
    EmptyFormation {
        wave: usize,
        group: usize,
        formation: String,
    },
    #[error("wave {wave} group {group}: pool tag is empty")]
    EmptyPoolTag { wave: usize, group: usize },
    #[error("wave {wave} group {group}: pool tag '{tag}' has no registered archetype")]
    UnknownPoolTag {
        wave: usize,
        group: usize,
        tag: String,
    },
    #[error("wave {wave} group {group}: repeat count is zero")]
    ZeroRepeat { wave: usize, group: usize },
    #[error("wave {wave} group {group} point {point}: negative spawn delay {delay}")]
    NegativeSpawnDelay {
        wave: usize,
        group: usize,
        point: usize,
        delay: f64,
    },
}

/// Failure to load authored JSON (wave sets, session config).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
