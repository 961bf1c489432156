//! Known document kinds.

use kitpack_core::gvkn::{join_api_version, split_api_version};
use kitpack_core::{API_GROUP_VERSION, Kit, PackagingObject, Patchset};
use kube::core::GroupVersionKind;
use std::collections::HashMap;

use crate::Document;

/// Materializes a document once its kind is known.
pub type DecodeFn = fn(serde_yaml::Value) -> Result<Document, serde_yaml::Error>;

/// Mapping from `(apiVersion, kind)` to a decode function.
///
/// The registry is an ordinary value handed to a [`Codec`](crate::Codec);
/// nothing is registered globally.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: HashMap<(String, String), DecodeFn>,
}

impl KindRegistry {
    /// An empty registry. Every decode fails with an unknown kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the packaging kinds, `Kit` and `Patchset`.
    pub fn packaging() -> Self {
        Self::new()
            .with_kind(API_GROUP_VERSION, Kit::KIND, decode_kit)
            .with_kind(API_GROUP_VERSION, Patchset::KIND, decode_patchset)
    }

    pub fn register(
        &mut self,
        api_version: impl Into<String>,
        kind: impl Into<String>,
        decode: DecodeFn,
    ) {
        self.kinds.insert((api_version.into(), kind.into()), decode);
    }

    pub fn with_kind(
        mut self,
        api_version: impl Into<String>,
        kind: impl Into<String>,
        decode: DecodeFn,
    ) -> Self {
        self.register(api_version, kind, decode);
        self
    }

    pub fn lookup(&self, api_version: &str, kind: &str) -> Option<DecodeFn> {
        self.kinds
            .get(&(api_version.to_string(), kind.to_string()))
            .copied()
    }

    pub fn contains(&self, gvk: &GroupVersionKind) -> bool {
        self.lookup(&join_api_version(&gvk.group, &gvk.version), &gvk.kind)
            .is_some()
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = GroupVersionKind> + '_ {
        self.kinds.keys().map(|(api_version, kind)| {
            let (group, version) = split_api_version(api_version);
            GroupVersionKind::gvk(group, version, kind)
        })
    }
}

fn decode_kit(value: serde_yaml::Value) -> Result<Document, serde_yaml::Error> {
    serde_yaml::from_value::<Kit>(value).map(Document::Kit)
}

fn decode_patchset(value: serde_yaml::Value) -> Result<Document, serde_yaml::Error> {
    serde_yaml::from_value::<Patchset>(value).map(Document::Patchset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaging_registry() {
        let registry = KindRegistry::packaging();
        assert!(registry.contains(&Kit::gvk()));
        assert!(registry.contains(&Patchset::gvk()));
        assert!(registry.lookup(API_GROUP_VERSION, "Deployment").is_none());
        assert!(registry.lookup("v1", "Kit").is_none());
        assert_eq!(registry.kinds().count(), 2);
    }

    #[test]
    fn test_reduced_registry() {
        let registry = KindRegistry::new().with_kind(API_GROUP_VERSION, Kit::KIND, decode_kit);
        assert!(registry.contains(&Kit::gvk()));
        assert!(!registry.contains(&Patchset::gvk()));
    }
}
