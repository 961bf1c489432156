//! Expansion errors.
//!
//! Every variant names the locator it concerns. Load and decode failures also
//! name the referrer, the locator of the Kit holding the reference.

use kitpack_codec::CodecError;
use kitpack_core::{Gvkn, IdentityError, LoadError, TransformError};
use thiserror::Error;

/// Referrer used for a Kit passed in by value rather than loaded.
pub const ROOT_LOCATOR: &str = "<root>";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{referrer}: {locator} not found")]
    LoadNotFound { referrer: String, locator: String },

    #[error("{referrer}: failed to load {locator}: {source}")]
    LoadIo {
        referrer: String,
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{referrer}: error parsing {locator}: {source}")]
    Decode {
        referrer: String,
        locator: String,
        #[source]
        source: CodecError,
    },

    #[error("{referrer}: unexpected object {found} in {locator}, expected {expected}")]
    KindMismatch {
        referrer: String,
        locator: String,
        expected: &'static str,
        found: String,
    },

    #[error("{locator}: invalid resource: {source}")]
    InvalidResource {
        locator: String,
        #[source]
        source: IdentityError,
    },

    #[error("{gvkn} from {duplicate} already exists in the map (declared by {existing})")]
    Conflict {
        gvkn: Gvkn,
        existing: String,
        duplicate: String,
    },

    #[error("cycle detected in bases: {0}")]
    Cycle(String),

    #[error("{locator}: patchset entry {index} sets both patch and source")]
    AmbiguousPatchset { locator: String, index: usize },

    #[error("invalid value for {field}: {message}")]
    InvalidConfig { field: String, message: String },

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
}

impl BuildError {
    pub(crate) fn load(referrer: &str, err: LoadError) -> Self {
        match err {
            LoadError::NotFound { locator } => Self::LoadNotFound {
                referrer: referrer.to_string(),
                locator,
            },
            LoadError::Io { locator, source } => Self::LoadIo {
                referrer: referrer.to_string(),
                locator,
                source,
            },
        }
    }
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_both_locators() {
        let err = BuildError::load("/path/to/kit.yaml", LoadError::not_found("base.yaml"));
        let message = err.to_string();
        assert!(message.contains("/path/to/kit.yaml"));
        assert!(message.contains("base.yaml"));
    }

    #[test]
    fn test_io_error_keeps_cause() {
        let err = BuildError::load(
            "kit.yaml",
            LoadError::io(
                "patch.yaml",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ),
        );
        let message = err.to_string();
        assert!(message.contains("kit.yaml"));
        assert!(message.contains("patch.yaml"));
        assert!(message.contains("denied"));
    }
}
