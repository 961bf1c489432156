//! Patch pipeline for Kitpack.
//!
//! Provides transformer implementations:
//! - Overlay (structural patches merged into matching resources)
//! - Multi (ordered chain of transformers)

pub mod merge;
pub mod multi;
pub mod overlay;

pub use kitpack_core::{TransformError, Transformer};
pub use merge::merge_patch;
pub use multi::MultiTransformer;
pub use overlay::OverlayTransformer;
