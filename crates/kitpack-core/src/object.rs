//! Packaging API identity.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::GroupVersionKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const API_GROUP: &str = "packaging.kitpack.dev";
pub const API_VERSION: &str = "v1alpha1";
pub const API_GROUP_VERSION: &str = "packaging.kitpack.dev/v1alpha1";

/// A top-level document of the packaging API.
pub trait PackagingObject: Serialize + DeserializeOwned {
    /// Value of the `kind` field.
    const KIND: &'static str;

    fn metadata(&self) -> &ObjectMeta;

    fn gvk() -> GroupVersionKind {
        GroupVersionKind::gvk(API_GROUP, API_VERSION, Self::KIND)
    }

    /// Object name, or the empty string when unnamed.
    fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or_default()
    }
}
