use serde_json::{Map, Value};
use std::io::{self, Write};

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|key| (key.clone(), sort_keys(&map[key])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Indented JSON with sorted keys.
pub fn render(result: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&sort_keys(result))
}

pub fn print_result<W: Write>(out: &mut W, result: &Value) -> io::Result<()> {
    let rendered = render(result)?;
    writeln!(out, "{}", rendered)
}

/// 1 when the top-level object carries an `error` key, else 0.
pub fn exit_code(result: &Value) -> u8 {
    match result {
        Value::Object(map) if map.contains_key("error") => 1,
        _ => 0,
    }
}
