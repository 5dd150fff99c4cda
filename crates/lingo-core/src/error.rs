//! Error taxonomy.
//!
//! Only name-based resolution can fail in a caller-visible way: every
//! byte/filename/extension/doctype/mode query returns `Option` because
//! absence is a normal outcome there. Malformed individual rules are
//! logged and dropped, never raised; a descriptor pack that fails to load
//! is an error from [`pack::load_pack`](crate::pack::load_pack) but is
//! absorbed (warn and skip) by pack discovery.

use thiserror::Error;

pub type LingoResult<T> = Result<T, LingoError>;

#[derive(Debug, Error)]
pub enum LingoError {
    /// No descriptor with this (normalized) name is registered.
    #[error("no language named `{name}` is registered")]
    UnknownLanguage { name: String },

    /// A descriptor pack file could not be read.
    #[cfg(feature = "filesystem")]
    #[error("failed to read descriptor pack: {path}")]
    PackRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A descriptor pack file is not valid TOML (or not pack-shaped).
    #[cfg(feature = "filesystem")]
    #[error("failed to parse descriptor pack: {path}")]
    PackParse {
        path: std::path::PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}
