//! Structural merge of patch documents.
//!
//! - Objects: merged by key (recursive)
//! - Arrays: replaced
//! - Scalars: replaced
//! - Null: removes the key

use serde_json::{Map, Value};

/// Merge `patch` into `target` in place.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(overlay) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(base) = target {
        for (key, value) in overlay {
            if value.is_null() {
                base.remove(key);
            } else {
                merge_patch(base.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let mut target = json!({"replicas": 1});
        merge_patch(&mut target, &json!({"replicas": 3}));
        assert_eq!(target["replicas"], 3);
    }

    #[test]
    fn test_object_deep_merge() {
        let mut target = json!({
            "metadata": {
                "name": "foo",
                "labels": { "app": "foo" }
            }
        });
        merge_patch(
            &mut target,
            &json!({ "metadata": { "labels": { "tier": "web" } } }),
        );

        assert_eq!(target["metadata"]["name"], "foo");
        assert_eq!(target["metadata"]["labels"]["app"], "foo");
        assert_eq!(target["metadata"]["labels"]["tier"], "web");
    }

    #[test]
    fn test_array_replace() {
        let mut target = json!({"args": ["a", "b"]});
        merge_patch(&mut target, &json!({"args": ["c"]}));
        assert_eq!(target["args"], json!(["c"]));
    }

    #[test]
    fn test_null_removes_key() {
        let mut target = json!({"data": {"a": "1", "b": "2"}});
        merge_patch(&mut target, &json!({"data": {"a": null}}));
        assert_eq!(target, json!({"data": {"b": "2"}}));
    }

    #[test]
    fn test_object_replaces_scalar() {
        let mut target = json!({"spec": "none"});
        merge_patch(&mut target, &json!({"spec": {"replicas": 2, "paused": null}}));
        assert_eq!(target, json!({"spec": {"replicas": 2}}));
    }
}
