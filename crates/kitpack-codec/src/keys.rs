//! Mapping key normalization.
//!
//! Resource payloads are JSON trees, so every mapping key must be a string.
//! Scalar keys are rendered as strings; sequence, mapping and tagged keys are
//! rejected.

use serde_yaml::Value;

use crate::{CodecError, CodecResult};

/// Rewrite every mapping key in `value` as a string, recursively.
pub(crate) fn normalize_keys(value: &mut Value) -> CodecResult<()> {
    match value {
        Value::Mapping(mapping) => {
            let entries = std::mem::take(mapping);
            for (key, mut item) in entries {
                normalize_keys(&mut item)?;
                let key = string_key(key)?;
                if mapping.contains_key(&key) {
                    return Err(CodecError::InvalidKey(format!(
                        "duplicate key {}",
                        describe(&key)
                    )));
                }
                mapping.insert(key, item);
            }
            Ok(())
        }
        Value::Sequence(items) => items.iter_mut().try_for_each(normalize_keys),
        Value::Tagged(tagged) => normalize_keys(&mut tagged.value),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}

fn string_key(key: Value) -> CodecResult<Value> {
    match key {
        Value::String(_) => Ok(key),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        Value::Null => Ok(Value::String("null".to_string())),
        other => Err(CodecError::InvalidKey(format!(
            "non-scalar key {}",
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| "<unprintable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let mut value = parse("data:\n  8080: web\n  true: yes\n  ~: none\n  name: plain\n");
        normalize_keys(&mut value).unwrap();

        let json: serde_json::Value = serde_yaml::from_value(value).unwrap();
        assert_eq!(json["data"]["8080"], "web");
        assert_eq!(json["data"]["true"], "yes");
        assert_eq!(json["data"]["null"], "none");
        assert_eq!(json["data"]["name"], "plain");
    }

    #[test]
    fn test_nested_in_sequences() {
        let mut value = parse("items:\n  - 1: one\n  - nested:\n      2: two\n");
        normalize_keys(&mut value).unwrap();

        let json: serde_json::Value = serde_yaml::from_value(value).unwrap();
        assert_eq!(json["items"][0]["1"], "one");
        assert_eq!(json["items"][1]["nested"]["2"], "two");
    }

    #[test]
    fn test_non_scalar_key_rejected() {
        let mut value = parse("? [a, b]\n: pair\n");
        let err = normalize_keys(&mut value).unwrap_err();
        assert!(matches!(err, CodecError::InvalidKey(_)));
    }

    #[test]
    fn test_colliding_keys_rejected() {
        let mut value = parse("1: int\n\"1\": string\n");
        let err = normalize_keys(&mut value).unwrap_err();
        assert!(err.to_string().contains("duplicate key"), "{err}");
    }
}
