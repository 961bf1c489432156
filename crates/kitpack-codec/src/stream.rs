//! Multi-document resource streams.

use kitpack_core::{Resource, ResourceCollection};
use serde::Deserialize;

use crate::keys::normalize_keys;
use crate::{CodecError, CodecResult};

/// Emit a collection as `---`-separated YAML documents, in collection order.
pub fn encode_resources(resources: &ResourceCollection) -> CodecResult<String> {
    let mut out = String::new();
    for (key, resource) in resources {
        if !out.is_empty() {
            out.push_str("---\n");
        }
        let document =
            serde_yaml::to_string(resource.data()).map_err(|source| CodecError::Encode {
                kind: key.kind.clone(),
                source,
            })?;
        out.push_str(&document);
    }
    Ok(out)
}

/// Read every document of a YAML stream as a resource. Empty documents are skipped.
pub fn decode_resources(data: &[u8]) -> CodecResult<Vec<Resource>> {
    let mut resources = Vec::new();
    for document in serde_yaml::Deserializer::from_slice(data) {
        let mut value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        normalize_keys(&mut value)?;
        resources.push(Resource::new(serde_yaml::from_value(value)?));
    }
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emit_in_key_order() {
        let mut collection = ResourceCollection::new();
        collection
            .insert(Resource::new(json!({
                "apiVersion": "apps/v1",
                "kind": "Deployment",
                "metadata": { "name": "bar", "namespace": "default" },
            })))
            .unwrap();
        collection
            .insert(Resource::new(json!({
                "apiVersion": "v1",
                "kind": "ConfigMap",
                "metadata": { "name": "foo", "namespace": "default" },
            })))
            .unwrap();

        let text = encode_resources(&collection).unwrap();
        assert_eq!(text.matches("---\n").count(), 1);

        let resources = decode_resources(text.as_bytes()).unwrap();
        let kinds: Vec<_> = resources.iter().filter_map(Resource::kind).collect();
        assert_eq!(kinds, vec!["ConfigMap", "Deployment"]);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(encode_resources(&ResourceCollection::new()).unwrap(), "");
    }

    #[test]
    fn test_leading_separator() {
        let data = b"---\napiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: a\n---\napiVersion: v1\nkind: Secret\nmetadata:\n  name: b\n";
        let resources = decode_resources(data).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].kind(), Some("Secret"));
    }

    #[test]
    fn test_decode_stringifies_scalar_keys() {
        let data = b"apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: ports\ndata:\n  80: http\n";
        let resources = decode_resources(data).unwrap();
        assert_eq!(resources[0].data()["data"]["80"], "http");
    }
}
