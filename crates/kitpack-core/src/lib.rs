//! Core domain types and traits for Kitpack.
//!
//! This crate contains:
//! - The packaging object model (Kit, Patchset)
//! - Resource identity (GVKN) and the aggregated resource collection
//! - Loader trait for resolving locators to raw bytes
//! - Transformer trait for the patch pipeline

pub mod error;
pub mod gvkn;
pub mod kit;
pub mod loader;
pub mod object;
pub mod patchset;
pub mod resource;
pub mod transformer;

pub use error::{
    CollectionError, IdentityError, LoadError, LoadResult, TransformError, TransformResult,
};
pub use gvkn::Gvkn;
pub use kit::{Kit, KitBase, KitPatchset, KitSpec};
pub use loader::Loader;
pub use object::{API_GROUP, API_GROUP_VERSION, API_VERSION, PackagingObject};
pub use patchset::{PatchSpec, Patchset, PatchsetSpec};
pub use resource::{Resource, ResourceCollection};
pub use transformer::Transformer;
