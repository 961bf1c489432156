//! Decoded packaging documents.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kitpack_core::{Kit, PackagingObject, Patchset};
use kube::core::GroupVersionKind;

use crate::{CodecError, CodecResult};

/// One of the known packaging kinds.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Document {
    Kit(Kit),
    Patchset(Patchset),
}

impl Document {
    /// Value of the document's `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Kit(_) => Kit::KIND,
            Document::Patchset(_) => Patchset::KIND,
        }
    }

    pub fn gvk(&self) -> GroupVersionKind {
        match self {
            Document::Kit(_) => Kit::gvk(),
            Document::Patchset(_) => Patchset::gvk(),
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Document::Kit(kit) => kit.metadata(),
            Document::Patchset(patchset) => patchset.metadata(),
        }
    }

    pub fn into_kit(self) -> CodecResult<Kit> {
        match self {
            Document::Kit(kit) => Ok(kit),
            other => Err(CodecError::KindMismatch {
                expected: Kit::KIND,
                found: other.kind(),
            }),
        }
    }

    pub fn into_patchset(self) -> CodecResult<Patchset> {
        match self {
            Document::Patchset(patchset) => Ok(patchset),
            other => Err(CodecError::KindMismatch {
                expected: Patchset::KIND,
                found: other.kind(),
            }),
        }
    }
}

impl From<Kit> for Document {
    fn from(kit: Kit) -> Self {
        Document::Kit(kit)
    }
}

impl From<Patchset> for Document {
    fn from(patchset: Patchset) -> Self {
        Document::Patchset(patchset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_kit_rejects_patchset() {
        let doc = Document::from(Patchset::new("ps"));
        match doc.into_kit() {
            Err(CodecError::KindMismatch { expected, found }) => {
                assert_eq!(expected, "Kit");
                assert_eq!(found, "Patchset");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_metadata_passthrough() {
        let doc = Document::from(Kit::new("coredns-base"));
        assert_eq!(doc.metadata().name.as_deref(), Some("coredns-base"));
        assert_eq!(doc.gvk().kind, "Kit");
    }
}
