//! Kit expansion for Kitpack.
//!
//! Resolves a Kit's bases depth-first, aggregates every resource into a
//! deduplicated collection and runs the patch pipeline over the result.

pub mod builder;
pub mod config;
pub mod error;

pub use builder::{Builder, CollectedResource, Expansion, default_pipeline};
pub use config::{BuilderConfig, PatchsetPolicy};
pub use error::{BuildError, BuildResult, ROOT_LOCATOR};
