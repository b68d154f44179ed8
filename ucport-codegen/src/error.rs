// Error types for declaration conversion and the file pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single declaration fragment could not be converted.
///
/// All variants are local to one declaration; the pipeline logs them and
/// moves on to the next fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The type or the name of a member line could not be resolved.
    #[error("invalid variable declaration: {0}")]
    InvalidVariable(String),
    /// An enum block lacks its qualifier line or its brace body.
    #[error("invalid enum declaration: {0}")]
    InvalidEnum(String),
    /// A recognized type that UnrealScript cannot express (e.g. `FScriptDelegate`).
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),
}

/// Convenience alias for per-declaration results.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Fatal errors of a conversion run (I/O and configuration).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
