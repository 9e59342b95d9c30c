use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON scalar into its text form.
///
/// The content endpoint is inconsistent about types: `empNo` and history years arrive as
/// strings for some companies and as numbers for others. Strings are kept verbatim, numbers
/// and booleans become their JSON text, and `null` becomes an empty string.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(value_to_text).unwrap_or_default())
}

/// Deserializes a list of labels, treating `null` as empty and a bare string as one label.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(value_to_text)
            .collect(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(other) => vec![value_to_text(other)],
    })
}

/// Deserializes a list of records, treating `null` as empty and skipping `null` entries.
pub fn deserialize_skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().flatten().collect())
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "deserialize_string_list")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_skip_null_items")]
        points: Vec<u32>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_lenient_string_accepts_scalars() {
        assert_eq!(probe(r#"{"text": "50人"}"#).text, "50人");
        assert_eq!(probe(r#"{"text": 120}"#).text, "120");
        assert_eq!(probe(r#"{"text": 1.5}"#).text, "1.5");
        assert_eq!(probe(r#"{"text": true}"#).text, "true");
        assert_eq!(probe(r#"{"text": null}"#).text, "");
        assert_eq!(probe("{}").text, "");
    }

    #[test]
    fn test_string_list_shapes() {
        assert_eq!(probe(r#"{"list": ["a", "b"]}"#).list, vec!["a", "b"]);
        assert_eq!(probe(r#"{"list": ["a", null, 3]}"#).list, vec!["a", "3"]);
        assert!(probe(r#"{"list": null}"#).list.is_empty());
        assert!(probe(r#"{"list": ""}"#).list.is_empty());
        assert_eq!(probe(r#"{"list": "solo"}"#).list, vec!["solo"]);
        assert!(probe("{}").list.is_empty());
    }

    #[test]
    fn test_skip_null_items() {
        assert_eq!(probe(r#"{"points": [null, 4, null, 5]}"#).points, vec![4, 5]);
        assert!(probe(r#"{"points": null}"#).points.is_empty());
        assert!(probe("{}").points.is_empty());
    }
}
