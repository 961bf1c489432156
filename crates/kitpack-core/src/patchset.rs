//! Patchset: a reusable bundle of structural patches.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::object::PackagingObject;
use crate::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patchset {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PatchsetSpec,
}

impl PackagingObject for Patchset {
    const KIND: &'static str = "Patchset";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Patchset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            spec: PatchsetSpec::default(),
        }
    }

    pub fn with_patch(mut self, patch: Resource) -> Self {
        self.spec.patches.push(PatchSpec { patch: Some(patch) });
        self
    }

    /// Patches in declaration order, skipping empty entries.
    pub fn patches(&self) -> impl Iterator<Item = &Resource> {
        self.spec.patches.iter().filter_map(|spec| spec.patch.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchsetSpec {
    #[serde(default)]
    pub patches: Vec<PatchSpec>,
}

/// An individual patch, part of a Patchset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Resource>,
}
