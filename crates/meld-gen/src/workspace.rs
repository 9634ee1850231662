//! VS Code workspace file generation.

use serde_json::json;

use meld_config::Config;
use meld_context::ComposedContext;
use meld_fs::HubPath;

use crate::error::Result;
use crate::generator::{GeneratedFile, Generator};

#[derive(Debug, Default)]
pub struct WorkspaceGenerator;

impl Generator for WorkspaceGenerator {
    fn name(&self) -> &'static str {
        "workspace"
    }

    fn generate(&self, config: &Config, _context: &ComposedContext) -> Result<Vec<GeneratedFile>> {
        let mut folders = vec![json!({
            "name": config.ide.workspace_name,
            "path": ".",
        })];

        for (name, project) in &config.projects {
            folders.push(json!({
                "name": name,
                "path": resolve_tilde(&project.path),
            }));
        }

        let workspace = json!({
            "folders": folders,
            "settings": {},
        });

        Ok(vec![GeneratedFile::new(
            format!("{}.code-workspace", config.ide.workspace_name),
            serde_json::to_string_pretty(&workspace)?,
        )])
    }
}

/// Expand a leading `~/` to the invoking user's home directory.
fn resolve_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return HubPath::new(home).join(rest).as_str().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn make_config() -> Config {
        serde_json::from_value(json!({
            "projects": {
                "myapp": {"path": "~/myapp", "aliases": ["app"]},
                "tool": {"path": "/opt/tool", "aliases": []}
            },
            "agents": {"claude-code": {"enabled": true}},
            "mcp": {},
            "ide": {"default": "cursor", "workspaceName": "my-hub"}
        }))
        .unwrap()
    }

    fn make_context() -> ComposedContext {
        ComposedContext {
            hub_dir: HubPath::new("/tmp/hub"),
            hub_preamble: String::new(),
            project_table: String::new(),
            artifacts_section: String::new(),
            context: String::new(),
            context_files: vec![],
            commands: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_workspace_file_shape() {
        let files = WorkspaceGenerator.generate(&make_config(), &make_context()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "my-hub.code-workspace");

        let parsed: Value = serde_json::from_str(&files[0].content).unwrap();
        let folders = parsed["folders"].as_array().unwrap();
        assert_eq!(folders.len(), 3);
        // Hub root first
        assert_eq!(folders[0]["name"], json!("my-hub"));
        assert_eq!(folders[0]["path"], json!("."));
        assert_eq!(folders[1]["name"], json!("myapp"));
        assert_eq!(folders[2]["path"], json!("/opt/tool"));
        assert!(parsed["settings"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_tilde_expansion() {
        let expanded = resolve_tilde("~/myapp");
        if dirs::home_dir().is_some() {
            assert!(!expanded.starts_with("~/"));
            assert!(expanded.ends_with("/myapp"));
        } else {
            assert_eq!(expanded, "~/myapp");
        }
        assert_eq!(resolve_tilde("/absolute/path"), "/absolute/path");
    }
}
