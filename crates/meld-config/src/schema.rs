//! Structural validation of the raw configuration tree.
//!
//! Validation runs over the parsed-but-untyped value tree so that every
//! violation can be reported in one pass. Only the presence check for the
//! four required top-level keys fails fast; past that point all remaining
//! violations are accumulated and returned together.

use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{AgentKind, Config};

const REQUIRED_KEYS: [&str; 4] = ["projects", "agents", "mcp", "ide"];

/// Validate a raw config tree.
///
/// Returns every accumulated violation, never just the first.
pub fn validate(raw: &Value) -> std::result::Result<(), Vec<String>> {
    let Some(obj) = raw.as_object() else {
        return Err(vec!["Config must be an object".to_string()]);
    };

    let mut errors = Vec::new();

    for key in REQUIRED_KEYS {
        if !obj.contains_key(key) {
            errors.push(format!("Missing required key: {key}"));
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    for key in REQUIRED_KEYS {
        if !obj[key].is_object() {
            errors.push(format!("{key} must be an object"));
        }
    }

    if let Some(agents) = obj["agents"].as_object() {
        for (name, agent) in agents {
            if AgentKind::from_str(name).is_err() {
                errors.push(format!(
                    "Invalid agent name: {name}. Must be one of: {}",
                    valid_agent_names()
                ));
            }
            if let Some(overrides) = agent.get("overrides") {
                if !overrides.is_null() && !overrides.is_object() {
                    errors.push(format!("Agent \"{name}\" overrides must be an object"));
                }
            }
        }
    }

    if let Some(mcp) = obj["mcp"].as_object() {
        for (server_name, server) in mcp {
            validate_mcp_server(server_name, server, &mut errors);
        }
    }

    if let Some(context) = obj.get("context") {
        if !context.is_null() && !context.is_string() {
            errors.push("context must be a string path".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_mcp_server(server_name: &str, server: &Value, errors: &mut Vec<String>) {
    let Some(s) = server.as_object() else {
        errors.push(format!("MCP server \"{server_name}\" must be an object"));
        return;
    };

    if s.get("type").and_then(Value::as_str) == Some("http") {
        match s.get("url").and_then(Value::as_str) {
            Some(url) if !url.is_empty() => {}
            _ => errors.push(format!(
                "MCP server \"{server_name}\" (http) must have a \"url\" string"
            )),
        }
    } else {
        match s.get("command").and_then(Value::as_str) {
            Some(command) if !command.is_empty() => {}
            _ => errors.push(format!(
                "MCP server \"{server_name}\" (stdio) must have a \"command\" string"
            )),
        }
        if !matches!(s.get("args"), Some(Value::Array(_))) {
            errors.push(format!(
                "MCP server \"{server_name}\" (stdio) must have an \"args\" array"
            ));
        }
    }

    if let Some(Value::Array(scope)) = s.get("agents") {
        for entry in scope {
            let valid = entry
                .as_str()
                .is_some_and(|name| AgentKind::from_str(name).is_ok());
            if !valid {
                errors.push(format!(
                    "MCP server \"{server_name}\" has invalid agent scope: {}",
                    scope_entry_display(entry)
                ));
            }
        }
    }
}

fn scope_entry_display(entry: &Value) -> String {
    match entry.as_str() {
        Some(s) => s.to_string(),
        None => entry.to_string(),
    }
}

fn valid_agent_names() -> String {
    let names: Vec<&str> = AgentKind::ALL.iter().map(AgentKind::as_str).collect();
    names.join(", ")
}

/// Convert a validated raw tree into the typed [`Config`].
///
/// Shape mismatches that slip past [`validate`] (e.g. a project entry
/// missing `path`) surface as a single validation error.
pub fn parse(raw: Value) -> Result<Config> {
    serde_json::from_value(raw).map_err(|e| Error::Validation {
        errors: vec![format!("Invalid config structure: {e}")],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn valid_config() -> Value {
        json!({
            "projects": {"myapp": {"path": "~/myapp", "aliases": ["app"]}},
            "agents": {
                "claude-code": {"enabled": true},
                "codex-cli": {"enabled": false},
                "gemini-cli": {"enabled": false}
            },
            "mcp": {},
            "ide": {"default": "cursor", "workspaceName": "hub"}
        })
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_non_object_config() {
        let errors = validate(&json!("nope")).unwrap_err();
        assert_eq!(errors, vec!["Config must be an object".to_string()]);
    }

    #[test]
    fn test_missing_keys_reported_individually() {
        let errors = validate(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&"Missing required key: projects".to_string()));
        assert!(errors.contains(&"Missing required key: agents".to_string()));
        assert!(errors.contains(&"Missing required key: mcp".to_string()));
        assert!(errors.contains(&"Missing required key: ide".to_string()));
    }

    #[test]
    fn test_unknown_agent_name() {
        let mut config = valid_config();
        config["agents"]["cursor"] = json!({"enabled": true});
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Invalid agent name: cursor"));
        assert!(errors[0].contains("claude-code, codex-cli, gemini-cli"));
    }

    #[test]
    fn test_non_object_overrides() {
        let mut config = valid_config();
        config["agents"]["claude-code"]["overrides"] = json!(["not", "an", "object"]);
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec!["Agent \"claude-code\" overrides must be an object".to_string()]
        );
    }

    #[test]
    fn test_null_overrides_allowed() {
        let mut config = valid_config();
        config["agents"]["claude-code"]["overrides"] = json!(null);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_http_server_requires_url() {
        let mut config = valid_config();
        config["mcp"]["ctx"] = json!({"type": "http", "url": ""});
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec!["MCP server \"ctx\" (http) must have a \"url\" string".to_string()]
        );
    }

    #[test]
    fn test_stdio_server_requires_command_and_args() {
        let mut config = valid_config();
        config["mcp"]["local"] = json!({"command": ""});
        let errors = validate(&config).unwrap_err();
        assert!(errors
            .contains(&"MCP server \"local\" (stdio) must have a \"command\" string".to_string()));
        assert!(errors
            .contains(&"MCP server \"local\" (stdio) must have an \"args\" array".to_string()));
    }

    #[test]
    fn test_invalid_agent_scope() {
        let mut config = valid_config();
        config["mcp"]["scoped"] =
            json!({"command": "npx", "args": [], "agents": ["claude-code", "cursor"]});
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec!["MCP server \"scoped\" has invalid agent scope: cursor".to_string()]
        );
    }

    #[test]
    fn test_non_string_context() {
        let mut config = valid_config();
        config["context"] = json!(42);
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors, vec!["context must be a string path".to_string()]);
    }

    #[test]
    fn test_errors_accumulate_past_presence_check() {
        let mut config = valid_config();
        config["agents"]["cursor"] = json!({"enabled": true});
        config["mcp"]["bad"] = json!({"type": "http"});
        config["context"] = json!(false);
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_non_object_required_value() {
        let mut config = valid_config();
        config["agents"] = json!(3);
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors, vec!["agents must be an object".to_string()]);
    }

    #[test]
    fn test_parse_valid_config() {
        let config = parse(valid_config()).unwrap();
        assert_eq!(config.ide.workspace_name, "hub");
        assert_eq!(config.projects["myapp"].path, "~/myapp");
    }

    #[test]
    fn test_parse_shape_mismatch_is_validation_error() {
        let mut raw = valid_config();
        raw["projects"]["broken"] = json!({"aliases": []});
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
