//! Kind-dispatching decoder and encoder.

use kitpack_core::gvkn::{join_api_version, split_api_version};
use kitpack_core::{Kit, PackagingObject, Patchset};
use kube::core::{GroupVersionKind, TypeMeta};
use serde::Serialize;
use tracing::trace;

use crate::keys::normalize_keys;
use crate::{CodecError, CodecResult, Document, KindRegistry};

/// Decodes bytes into one of the registered kinds and encodes documents back.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: KindRegistry,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(KindRegistry::packaging())
    }
}

impl Codec {
    pub fn new(registry: KindRegistry) -> Self {
        Self { registry }
    }

    /// Decode a single document.
    ///
    /// Only `apiVersion` and `kind` are inspected first; the rest of the
    /// document is materialized by the decode function registered for that
    /// pair. The observed kind is returned alongside the document.
    pub fn decode(&self, data: &[u8]) -> CodecResult<(Document, GroupVersionKind)> {
        let mut value: serde_yaml::Value = serde_yaml::from_slice(data)?;
        normalize_keys(&mut value)?;
        let types = type_meta(&value)?;

        let decode = self
            .registry
            .lookup(&types.api_version, &types.kind)
            .ok_or_else(|| CodecError::UnknownKind {
                api_version: types.api_version.clone(),
                kind: types.kind.clone(),
            })?;
        let document = decode(value).map_err(|source| CodecError::Shape {
            kind: types.kind.clone(),
            source,
        })?;

        let (group, version) = split_api_version(&types.api_version);
        trace!(kind = %types.kind, "decoded document");
        Ok((document, GroupVersionKind::gvk(group, version, &types.kind)))
    }

    /// Encode a document as YAML, stamping its `apiVersion` and `kind`.
    pub fn encode(&self, document: &Document) -> CodecResult<Vec<u8>> {
        match document {
            Document::Kit(kit) => encode_object::<Kit>(kit),
            Document::Patchset(patchset) => encode_object::<Patchset>(patchset),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    #[serde(flatten)]
    types: TypeMeta,
    #[serde(flatten)]
    object: &'a T,
}

fn encode_object<T: PackagingObject>(object: &T) -> CodecResult<Vec<u8>> {
    let gvk = T::gvk();
    let envelope = Envelope {
        types: TypeMeta {
            api_version: join_api_version(&gvk.group, &gvk.version),
            kind: T::KIND.to_string(),
        },
        object,
    };
    serde_yaml::to_string(&envelope)
        .map(String::into_bytes)
        .map_err(|source| CodecError::Encode {
            kind: T::KIND.to_string(),
            source,
        })
}

fn type_meta(value: &serde_yaml::Value) -> CodecResult<TypeMeta> {
    let field = |name: &'static str| {
        value
            .get(name)
            .and_then(serde_yaml::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(CodecError::MissingTypeMeta(name))
    };

    Ok(TypeMeta {
        api_version: field("apiVersion")?,
        kind: field("kind")?,
    })
}
