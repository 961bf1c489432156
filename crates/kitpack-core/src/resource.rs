//! Resources and the aggregated resource collection.

use kube::core::GroupVersionKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::error::{CollectionError, IdentityError};
use crate::gvkn::{Gvkn, split_api_version};

/// A single structured document.
///
/// The payload is opaque apart from its identity fields: `apiVersion`, `kind`,
/// `metadata.namespace` and `metadata.name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    data: Value,
}

impl Resource {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Value {
        &mut self.data
    }

    pub fn api_version(&self) -> Option<&str> {
        self.data.get("apiVersion").and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.data.get("kind").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata_field("name")
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata_field("namespace")
    }

    /// Derive the identity key of this resource.
    pub fn gvkn(&self) -> Result<Gvkn, IdentityError> {
        if !self.data.is_object() {
            return Err(IdentityError::NotAnObject);
        }
        let api_version = self
            .api_version()
            .ok_or(IdentityError::MissingField("apiVersion"))?;
        let kind = self.kind().ok_or(IdentityError::MissingField("kind"))?;
        let name = self
            .name()
            .filter(|name| !name.is_empty())
            .ok_or(IdentityError::MissingField("metadata.name"))?;
        let (group, version) = split_api_version(api_version);

        Ok(Gvkn::new(
            GroupVersionKind::gvk(group, version, kind),
            self.namespace().unwrap_or_default(),
            name,
        ))
    }

    fn metadata_field(&self, field: &str) -> Option<&str> {
        self.data
            .get("metadata")
            .and_then(|metadata| metadata.get(field))
            .and_then(Value::as_str)
    }
}

impl From<Value> for Resource {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Resources keyed by GVKN.
///
/// Keys are unique by construction: [`insert`](Self::insert) refuses a
/// resource whose key is already present. Iteration follows key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCollection {
    entries: BTreeMap<Gvkn, Resource>,
}

impl ResourceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource under its derived key, failing on a duplicate.
    pub fn insert(&mut self, resource: Resource) -> Result<Gvkn, CollectionError> {
        let key = resource.gvkn()?;
        match self.entries.entry(key.clone()) {
            btree_map::Entry::Occupied(_) => Err(CollectionError::Duplicate(key)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(resource);
                Ok(key)
            }
        }
    }

    pub fn get(&self, key: &Gvkn) -> Option<&Resource> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Gvkn) -> Option<&mut Resource> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &Gvkn) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Gvkn> {
        self.entries.keys()
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Gvkn, Resource> {
        self.entries.iter()
    }
}

impl IntoIterator for ResourceCollection {
    type Item = (Gvkn, Resource);
    type IntoIter = btree_map::IntoIter<Gvkn, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceCollection {
    type Item = (&'a Gvkn, &'a Resource);
    type IntoIter = btree_map::Iter<'a, Gvkn, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_map(namespace: &str, name: &str) -> Resource {
        Resource::new(json!({
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": { "name": name, "namespace": namespace },
        }))
    }

    #[test]
    fn test_gvkn_from_core_resource() {
        let key = config_map("default", "foo").gvkn().unwrap();
        assert_eq!(key.group, "");
        assert_eq!(key.version, "v1");
        assert_eq!(key.kind, "ConfigMap");
        assert_eq!(key.namespace, "default");
        assert_eq!(key.name, "foo");
    }

    #[test]
    fn test_gvkn_without_namespace() {
        let resource = Resource::new(json!({
            "apiVersion": "rbac.authorization.k8s.io/v1",
            "kind": "ClusterRole",
            "metadata": { "name": "reader" },
        }));
        let key = resource.gvkn().unwrap();
        assert_eq!(key.group, "rbac.authorization.k8s.io");
        assert_eq!(key.namespace, "");
    }

    #[test]
    fn test_gvkn_missing_fields() {
        let no_kind = Resource::new(json!({ "apiVersion": "v1", "metadata": { "name": "x" } }));
        assert_eq!(no_kind.gvkn(), Err(IdentityError::MissingField("kind")));

        let no_name = Resource::new(json!({ "apiVersion": "v1", "kind": "ConfigMap" }));
        assert_eq!(
            no_name.gvkn(),
            Err(IdentityError::MissingField("metadata.name"))
        );

        let scalar = Resource::new(json!("hello"));
        assert_eq!(scalar.gvkn(), Err(IdentityError::NotAnObject));
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut collection = ResourceCollection::new();
        collection.insert(config_map("default", "foo")).unwrap();

        let err = collection.insert(config_map("default", "foo")).unwrap_err();
        match err {
            CollectionError::Duplicate(key) => assert_eq!(key.name, "foo"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_same_name_different_namespace_is_distinct() {
        let mut collection = ResourceCollection::new();
        collection.insert(config_map("default", "foo")).unwrap();
        collection.insert(config_map("kube-system", "foo")).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut collection = ResourceCollection::new();
        collection.insert(config_map("default", "zeta")).unwrap();
        collection.insert(config_map("default", "alpha")).unwrap();

        let names: Vec<_> = collection.keys().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
