//! Ordered TOML emission for generated config documents.
//!
//! Depth-first over a JSON value tree: at each level scalar pairs are
//! written before nested tables, each table is headed by its full dotted
//! path separated from prior output by a blank line, and a table with no
//! emittable entries at or below it is omitted header-and-all. Unsupported
//! value shapes fail hard rather than emitting malformed text.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Serialize a value tree to TOML text. The root must be a table.
pub fn serialize_toml(root: &Value) -> Result<String> {
    let Value::Object(table) = root else {
        return Err(Error::UnsupportedTomlValue {
            kind: value_kind(root),
        });
    };
    let mut lines = Vec::new();
    append_table(&mut Vec::new(), table, &mut lines)?;
    Ok(format!("{}\n", lines.join("\n")))
}

fn append_table(path: &mut Vec<String>, table: &Map<String, Value>, lines: &mut Vec<String>) -> Result<()> {
    if !path.is_empty() && !has_emittable_entries(table) {
        return Ok(());
    }

    if !path.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let dotted: Vec<String> = path.iter().map(|key| escape_key(key)).collect();
        lines.push(format!("[{}]", dotted.join(".")));
    }

    for (key, value) in table {
        if value.is_null() || value.is_object() {
            continue;
        }
        lines.push(format!("{} = {}", escape_key(key), format_value(value)?));
    }

    for (key, value) in table {
        if let Value::Object(nested) = value {
            path.push(key.clone());
            append_table(path, nested, lines)?;
            path.pop();
        }
    }

    Ok(())
}

/// Whether the table holds anything to emit, at any depth.
fn has_emittable_entries(table: &Map<String, Value>) -> bool {
    table.values().any(|value| match value {
        Value::Null => false,
        Value::Object(nested) => has_emittable_entries(nested),
        _ => true,
    })
}

fn format_value(value: &Value) -> Result<String> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => format_scalar(value),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(format_scalar)
                .collect::<Result<_>>()?;
            Ok(format!("[{}]", rendered.join(", ")))
        }
        Value::Null | Value::Object(_) => Err(Error::UnsupportedTomlValue {
            kind: value_kind(value),
        }),
    }
}

/// Arrays hold homogeneous scalars only; nested composites fail hard.
fn format_scalar(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(format!("\"{}\"", escape_string(s))),
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if !f.is_finite() {
                    return Err(Error::NonFiniteNumber { value: f });
                }
            }
            Ok(n.to_string())
        }
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::UnsupportedTomlValue {
            kind: value_kind(value),
        }),
    }
}

fn escape_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare {
        key.to_string()
    } else {
        format!("\"{}\"", escape_string(key))
    }
}

pub(crate) fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_scalars_before_tables() {
        let toml = serialize_toml(&json!({"a": 1, "b": {"c": "x"}})).unwrap();
        assert_eq!(toml, "a = 1\n\n[b]\nc = \"x\"\n");
    }

    #[test]
    fn test_nested_dotted_headers() {
        let toml = serialize_toml(&json!({
            "sandbox_workspace_write": {"writable_roots": ["/hub", "/proj"]},
            "mcp_servers": {"ctx": {"command": "npx", "args": ["-y", "ctx-mcp"]}}
        }))
        .unwrap();
        assert_eq!(
            toml,
            "[mcp_servers]\n\n[mcp_servers.ctx]\ncommand = \"npx\"\nargs = [\"-y\", \"ctx-mcp\"]\n\n[sandbox_workspace_write]\nwritable_roots = [\"/hub\", \"/proj\"]\n"
        );
    }

    #[test]
    fn test_empty_table_omitted_entirely() {
        let toml = serialize_toml(&json!({"a": 1, "empty": {}, "deep": {"inner": {}}})).unwrap();
        assert_eq!(toml, "a = 1\n");
    }

    #[test]
    fn test_null_entries_skipped() {
        let toml = serialize_toml(&json!({"a": null, "b": true})).unwrap();
        assert_eq!(toml, "b = true\n");
    }

    #[test]
    fn test_string_escaping() {
        let toml = serialize_toml(&json!({"s": "line\nwith \"quotes\" and \\slash\ttab"})).unwrap();
        assert_eq!(toml, "s = \"line\\nwith \\\"quotes\\\" and \\\\slash\\ttab\"\n");
    }

    #[test]
    fn test_non_bare_keys_quoted() {
        let toml = serialize_toml(&json!({"needs quoting": 1, "nested": {"a.b": 2}})).unwrap();
        assert_eq!(toml, "\"needs quoting\" = 1\n\n[nested]\n\"a.b\" = 2\n");
    }

    #[test]
    fn test_output_parses_back() {
        let text = serialize_toml(&json!({
            "approval_policy": "on-request",
            "sandbox_workspace_write": {"writable_roots": ["/hub"]}
        }))
        .unwrap();
        let parsed: ::toml::Value = text.parse().unwrap();
        assert_eq!(parsed["approval_policy"].as_str(), Some("on-request"));
        assert_eq!(
            parsed["sandbox_workspace_write"]["writable_roots"][0].as_str(),
            Some("/hub")
        );
    }

    #[rstest]
    #[case(json!({"arr": [[1, 2]]}))]
    #[case(json!({"arr": [{"k": 1}]}))]
    #[case(json!({"arr": [null]}))]
    fn test_composite_array_elements_rejected(#[case] root: Value) {
        assert!(matches!(
            serialize_toml(&root),
            Err(Error::UnsupportedTomlValue { .. })
        ));
    }

    #[test]
    fn test_non_table_root_rejected() {
        assert!(serialize_toml(&json!("just a string")).is_err());
        assert!(serialize_toml(&json!([1, 2])).is_err());
    }
}
