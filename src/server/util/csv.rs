//! Flattening a JSON document into `key,value` CSV rows.

use serde_json::Value;

/// Renders `value` as a two-column CSV document with a `key,value` header.
///
/// Nested objects are flattened with dotted keys, arrays are written as their JSON
/// encoding, and nulls become empty cells. Every cell is quoted with `"` doubled.
pub fn to_key_value_csv(value: &Value) -> String {
    let mut rows = vec![("key".to_string(), "value".to_string())];
    flatten(value, String::new(), &mut rows);

    rows.iter()
        .map(|(k, v)| format!("{},{}", quote(k), quote(v)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn flatten(value: &Value, prefix: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(v, key, out);
            }
        }
        Value::Null if prefix.is_empty() => {}
        Value::Null => out.push((prefix, String::new())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(_) => out.push((prefix, value.to_string())),
        Value::Bool(_) | Value::Number(_) => out.push((prefix, value.to_string())),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
