//! Source loaders for Kitpack.
//!
//! Provides loader implementations:
//! - Filesystem, rooted at a directory
//! - In-memory (tests, embedding)

pub mod file;
pub mod memory;

pub use file::FileLoader;
pub use kitpack_core::{LoadError, Loader};
pub use memory::MemoryLoader;
