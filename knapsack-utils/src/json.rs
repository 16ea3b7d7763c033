use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{to_string, to_value, Deserializer, Map, Value};
use std::io::Read;

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Reads every JSON document from a stream of whitespace separated documents.
pub fn read_documents<R: Read>(reader: R) -> Result<Vec<Value>> {
    Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .enumerate()
        .map(|(i, doc)| doc.map_err(|e| anyhow!("Failed to parse document {}: {}", i, e)))
        .collect()
}
