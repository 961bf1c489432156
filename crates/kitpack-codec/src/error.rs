//! Codec errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("YAML parse error: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("missing type metadata: {0}")]
    MissingTypeMeta(&'static str),

    #[error("unsupported mapping key: {0}")]
    InvalidKey(String),

    #[error("unknown kind {kind} in {api_version}")]
    UnknownKind { api_version: String, kind: String },

    #[error("invalid {kind}: {source}")]
    Shape {
        kind: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to encode {kind}: {source}")]
    Encode {
        kind: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unexpected object {found}, expected {expected}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
