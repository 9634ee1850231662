//! Environment-variable interpolation over the config tree.
//!
//! Every `${NAME}` occurrence in a string value is substituted from an
//! explicit name→value map. Unset names leave the placeholder text in place
//! and produce a warning; interpolation itself never fails. Object keys are
//! never interpolated, only values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

/// Name→value map fed into interpolation.
///
/// Passed explicitly instead of reading ambient process state so tests are
/// deterministic; [`env_vars`] snapshots the process environment at the CLI
/// boundary.
pub type EnvVars = BTreeMap<String, String>;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid env var regex")
});

/// Snapshot the process environment.
pub fn env_vars() -> EnvVars {
    std::env::vars().collect()
}

/// Interpolate `${NAME}` placeholders throughout a value tree.
///
/// Returns the rewritten tree and one warning per unresolved occurrence.
pub fn interpolate(value: Value, vars: &EnvVars) -> (Value, Vec<String>) {
    let mut warnings = Vec::new();
    let resolved = walk(value, vars, &mut warnings);
    (resolved, warnings)
}

fn walk(value: Value, vars: &EnvVars, warnings: &mut Vec<String>) -> Value {
    match value {
        Value::String(s) => Value::String(substitute(&s, vars, warnings)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| walk(item, vars, warnings))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, walk(val, vars, warnings)))
                .collect(),
        ),
        other => other,
    }
}

fn substitute(input: &str, vars: &EnvVars, warnings: &mut Vec<String>) -> String {
    ENV_VAR
        .replace_all(input, |caps: &Captures| {
            let name = &caps[1];
            match vars.get(name) {
                Some(value) => value.clone(),
                None => {
                    warnings.push(format!("Environment variable not set: {name}"));
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
