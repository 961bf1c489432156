//! Packaging document codec for Kitpack.
//!
//! This crate handles:
//! - Kind dispatch on the embedded `apiVersion`/`kind` fields
//! - Decoding into the [`Document`] sum type and encoding back to YAML
//! - Multi-document resource streams for emission

pub mod codec;
pub mod document;
pub mod error;
mod keys;
pub mod registry;
pub mod stream;

pub use codec::Codec;
pub use document::Document;
pub use error::{CodecError, CodecResult};
pub use registry::{DecodeFn, KindRegistry};
pub use stream::{decode_resources, encode_resources};
