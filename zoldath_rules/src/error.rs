//! Errors raised while loading static world data.

use thiserror::Error;

/// Failures while parsing maps or behavior catalogs.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("map contains no rows")]
    EmptyMap,

    #[error("map row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("catalog entry has an empty icon")]
    EmptyIcon,

    #[error("invalid catalog: {0}")]
    Catalog(#[from] toml::de::Error),
}
