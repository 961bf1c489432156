//! Kit: a composable configuration package.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::object::PackagingObject;
use crate::resource::Resource;

/// A named configuration package that may inherit from base Kits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: KitSpec,
}

impl PackagingObject for Kit {
    const KIND: &'static str = "Kit";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitSpec {
    /// Base Kits, expanded in order before this Kit's own content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<KitBase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patchsets: Vec<KitPatchset>,
    /// Inline resources owned by this Kit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<Resource>,
}

/// Reference to a base package, which can be seen as inheritance or inclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitBase {
    pub source: String,
    /// Tolerate the source being absent.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl KitBase {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            optional: false,
        }
    }

    pub fn optional(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            optional: true,
        }
    }
}

/// A patchset included into a Kit, either inline or by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitPatchset {
    /// Inline patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Resource>,
    /// Reference to an external Patchset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl KitPatchset {
    pub fn inline(patch: Resource) -> Self {
        Self {
            patch: Some(patch),
            source: None,
        }
    }

    pub fn external(source: impl Into<String>) -> Self {
        Self {
            patch: None,
            source: Some(source.into()),
        }
    }

    /// The referenced source, treating an empty string as unset.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

impl Kit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            spec: KitSpec::default(),
        }
    }

    pub fn with_base(mut self, base: KitBase) -> Self {
        self.spec.bases.push(base);
        self
    }

    pub fn with_object(mut self, object: Resource) -> Self {
        self.spec.objects.push(object);
        self
    }

    pub fn with_patchset(mut self, patchset: KitPatchset) -> Self {
        self.spec.patchsets.push(patchset);
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
