use std::path::PathBuf;

use crate::core::ToolRegistry;
use crate::tools::ReadFileContentTool;

/// Model name attached to agents when no override is given.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Runtime configuration, built once in `main` from flags and environment
/// and passed down explicitly. Nothing in the crate reads the process
/// environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. Optional: the inspector and manifest paths never
    /// contact a provider, so it is only carried for the runtime that does.
    pub api_key: Option<String>,
    /// Model name stamped on every agent registration.
    pub model: String,
    /// Base directory for session logs.
    pub workspace_dir: PathBuf,
}

impl Config {
    pub fn new(api_key: Option<String>, model: String, workspace_dir: PathBuf) -> Self {
        Self {
            api_key,
            model,
            workspace_dir,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().map_or(false, |key| !key.is_empty())
    }
}

/// Register every tool the coordinator may call.
pub fn initialize_tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(ReadFileContentTool);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_the_inspector_tool() {
        let registry = initialize_tool_registry();
        assert!(registry.has_tool("read_file_content"));
        assert_eq!(registry.tool_names(), vec!["read_file_content".to_string()]);
    }

    #[test]
    fn credentials_require_a_non_empty_key() {
        let base = Config::new(None, DEFAULT_MODEL.to_string(), PathBuf::from("."));
        assert!(!base.has_credentials());

        let empty = Config::new(
            Some(String::new()),
            DEFAULT_MODEL.to_string(),
            PathBuf::from("."),
        );
        assert!(!empty.has_credentials());

        let set = Config::new(
            Some("sk-test".to_string()),
            DEFAULT_MODEL.to_string(),
            PathBuf::from("."),
        );
        assert!(set.has_credentials());
    }
}
