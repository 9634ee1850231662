//! Per-agent skill materialization.
//!
//! Skills carry frontmatter whose `model` field is either a plain string
//! (passed through) or a per-agent map (resolved once for the target agent,
//! dropped when the target has no entry).

use serde_json::{Map, Value};

use meld_config::AgentKind;
use meld_context::SkillDoc;

/// Render a skill as a SKILL.md document for the given agent.
pub fn render_skill(skill: &SkillDoc, agent: AgentKind) -> String {
    let frontmatter = resolve_frontmatter(&skill.frontmatter, agent);
    format!(
        "---\n{}\n---\n\n{}",
        serialize_frontmatter(&frontmatter),
        skill.body
    )
}

/// Resolve the `model` field for one agent; all other fields pass through.
pub fn resolve_frontmatter(frontmatter: &Map<String, Value>, agent: AgentKind) -> Map<String, Value> {
    let mut resolved = frontmatter.clone();

    let per_agent = match frontmatter.get("model") {
        Some(Value::Object(model_map)) => Some(
            model_map
                .get(agent.as_str())
                .and_then(Value::as_str)
                .map(str::to_string),
        ),
        _ => None,
    };

    match per_agent {
        Some(Some(model)) => {
            resolved.insert("model".to_string(), Value::String(model));
        }
        // A map with no entry for this agent: omit the field, keep the rest
        Some(None) => {
            resolved.remove("model");
        }
        // Plain string (or absent): pass through unchanged
        None => {}
    }

    resolved
}

fn serialize_frontmatter(frontmatter: &Map<String, Value>) -> String {
    let mut lines = Vec::new();
    for (key, value) in frontmatter {
        match value {
            Value::String(s) => lines.push(format!("{key}: {s}")),
            Value::Bool(b) => lines.push(format!("{key}: {b}")),
            Value::Number(n) => lines.push(format!("{key}: {n}")),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().filter_map(scalar_text).collect();
                lines.push(format!("{key}: [{}]", rendered.join(", ")));
            }
            // Map-valued fields other than the resolved model are not
            // representable in the flat output format
            Value::Object(_) | Value::Null => continue,
        }
    }
    lines.join("\n")
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
