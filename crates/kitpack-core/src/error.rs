//! Error types shared across Kitpack crates.

use thiserror::Error;

use crate::Gvkn;

/// Failure to resolve a locator to bytes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("not found: {locator}")]
    NotFound { locator: String },

    #[error("failed to load {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn not_found(locator: impl Into<String>) -> Self {
        Self::NotFound {
            locator: locator.into(),
        }
    }

    pub fn io(locator: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            locator: locator.into(),
            source,
        }
    }

    /// The locator that failed to load.
    pub fn locator(&self) -> &str {
        match self {
            Self::NotFound { locator } | Self::Io { locator, .. } => locator,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A resource document that cannot be identified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("resource is not an object")]
    NotAnObject,

    #[error("resource is missing {0}")]
    MissingField(&'static str),
}

/// Failure to insert into a [`ResourceCollection`](crate::ResourceCollection).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("{0} already exists in the collection")]
    Duplicate(Gvkn),
}

/// Failure reported by the patch pipeline.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid patch: {0}")]
    InvalidPatch(#[from] IdentityError),

    #[error("no resource matches patch target {0}")]
    NoMatch(Gvkn),

    #[error("{transformer} failed: {message}")]
    Failed {
        transformer: String,
        message: String,
    },
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
pub type TransformResult<T> = std::result::Result<T, TransformError>;
