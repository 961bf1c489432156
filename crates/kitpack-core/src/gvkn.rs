//! Resource identity.

use kube::core::GroupVersionKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group, version, kind, namespace and name of a resource.
///
/// This is the uniqueness key of a [`ResourceCollection`](crate::ResourceCollection).
/// Ordering is lexicographic over the fields in declaration order, which keeps
/// collection iteration stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gvkn {
    /// API group; empty for the core group.
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Namespace; empty for cluster-scoped or unqualified resources.
    pub namespace: String,
    pub name: String,
}

impl Gvkn {
    pub fn new(
        gvk: GroupVersionKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: gvk.group,
            version: gvk.version,
            kind: gvk.kind,
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The group/version/kind part of the key.
    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, &self.kind)
    }

    /// The `apiVersion` string this key was derived from.
    pub fn api_version(&self) -> String {
        join_api_version(&self.group, &self.version)
    }
}

impl fmt::Display for Gvkn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Kind={}, {}/{}",
            self.api_version(),
            self.kind,
            self.namespace,
            self.name
        )
    }
}

/// Split an `apiVersion` into group and version.
///
/// `apps/v1` yields `("apps", "v1")`; a bare `v1` belongs to the core group.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    api_version.rsplit_once('/').unwrap_or(("", api_version))
}

pub fn join_api_version(group: &str, version: &str) -> String {
    if group.is_empty() {
        version.to_string()
    } else {
        format!("{group}/{version}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_api_version() {
        assert_eq!(split_api_version("apps/v1"), ("apps", "v1"));
        assert_eq!(split_api_version("v1"), ("", "v1"));
        assert_eq!(
            split_api_version("packaging.kitpack.dev/v1alpha1"),
            ("packaging.kitpack.dev", "v1alpha1")
        );
    }

    #[test]
    fn test_display_core_group() {
        let key = Gvkn::new(GroupVersionKind::gvk("", "v1", "ConfigMap"), "default", "foo");
        assert_eq!(key.to_string(), "v1, Kind=ConfigMap, default/foo");
        assert_eq!(key.api_version(), "v1");
    }

    #[test]
    fn test_ordering_is_field_order() {
        let a = Gvkn::new(GroupVersionKind::gvk("", "v1", "ConfigMap"), "default", "b");
        let b = Gvkn::new(GroupVersionKind::gvk("apps", "v1", "Deployment"), "default", "a");
        assert!(a < b);
    }
}
