use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use coderev::agents::catalog::{AgentCatalog, COORDINATOR};
use coderev::config::{initialize_tool_registry, Config, DEFAULT_MODEL};
use coderev::core::{
    ParameterDefinition, Tool, ToolContext, ToolParameters, ToolRegistry, ToolResult,
};
use coderev::param;
use tempfile::TempDir;

fn context_for(dir: &TempDir) -> ToolContext {
    ToolContext::new(dir.path().to_path_buf(), "test-session".to_string())
}

fn file_path_params(path: &str) -> ToolParameters {
    ToolParameters::from_value(serde_json::json!({ "file_path": path })).unwrap()
}

#[tokio::test]
async fn read_file_content_returns_success_mapping() {
    let workspace = TempDir::new().unwrap();
    let sample = workspace.path().join("sample.py");
    fs::write(&sample, "a\nb\nc").unwrap();

    let registry = initialize_tool_registry();
    let result = registry
        .execute_tool(
            "read_file_content",
            file_path_params(sample.to_str().unwrap()),
            &context_for(&workspace),
        )
        .await;

    assert!(result.success);
    assert_eq!(result.output["status"], "success");
    assert_eq!(result.output["language"], "Python");
    assert_eq!(result.output["line_count"], 3);
    assert_eq!(result.output["char_count"], 5);
    assert_eq!(result.output["content"], "a\nb\nc");
    assert_eq!(result.output["file_path"], sample.to_str().unwrap());
}

#[tokio::test]
async fn read_file_content_reports_missing_file_as_data() {
    let workspace = TempDir::new().unwrap();
    let missing = workspace.path().join("missing.rs");

    let registry = initialize_tool_registry();
    let result = registry
        .execute_tool(
            "read_file_content",
            file_path_params(missing.to_str().unwrap()),
            &context_for(&workspace),
        )
        .await;

    // The tool call itself succeeds; the failure is in the payload for the
    // runtime to branch on.
    assert!(result.success);
    assert_eq!(result.output["status"], "error");
    assert!(result.output["message"]
        .as_str()
        .unwrap()
        .contains("File not found"));
}

#[tokio::test]
async fn read_file_content_rejects_directories() {
    let workspace = TempDir::new().unwrap();

    let registry = initialize_tool_registry();
    let result = registry
        .execute_tool(
            "read_file_content",
            file_path_params(workspace.path().to_str().unwrap()),
            &context_for(&workspace),
        )
        .await;

    assert!(result.success);
    assert_eq!(result.output["status"], "error");
    assert!(result.output["message"]
        .as_str()
        .unwrap()
        .contains("is not a file"));
}

#[tokio::test]
async fn missing_file_path_parameter_fails_the_call() {
    let workspace = TempDir::new().unwrap();

    let registry = initialize_tool_registry();
    let result = registry
        .execute_tool(
            "read_file_content",
            ToolParameters::default(),
            &context_for(&workspace),
        )
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("file_path"));
}

#[tokio::test]
async fn unknown_tool_names_fail_the_call() {
    let workspace = TempDir::new().unwrap();

    let registry = initialize_tool_registry();
    let result = registry
        .execute_tool(
            "delete_everything",
            ToolParameters::default(),
            &context_for(&workspace),
        )
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("not found"));
}

// Mock tool used to check registry behavior with more than one entry.
struct UptimeTool;

#[async_trait::async_trait]
impl Tool for UptimeTool {
    fn name(&self) -> &str {
        "uptime"
    }

    fn description(&self) -> &str {
        "Report a fixed uptime value"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([param!("unit", "string", "Unit for the reported value", optional, "s")])
    }

    async fn execute(&self, _params: ToolParameters, _context: &ToolContext) -> ToolResult {
        ToolResult::success(serde_json::json!({ "uptime": 42 }))
    }
}

#[tokio::test]
async fn definitions_are_sorted_by_tool_name() {
    let mut registry = initialize_tool_registry();
    registry.register(UptimeTool);

    let defs = registry.definitions();
    let names: Vec<&str> = defs
        .iter()
        .map(|def| def["function"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["read_file_content", "uptime"]);

    let read_def = &defs[0];
    assert_eq!(read_def["type"], "function");
    assert_eq!(
        read_def["function"]["parameters"]["required"][0],
        "file_path"
    );
    assert_eq!(
        read_def["function"]["parameters"]["properties"]["file_path"]["type"],
        "string"
    );
}

#[test]
fn builtin_catalog_round_trips_through_the_manifest() {
    let config = Config::new(
        Some("sk-test".to_string()),
        DEFAULT_MODEL.to_string(),
        PathBuf::from("."),
    );
    let registry = initialize_tool_registry();
    let catalog = AgentCatalog::builtin(&config);
    catalog.validate(&registry).unwrap();

    let manifest = catalog.manifest(&registry);
    assert_eq!(manifest["root_agent"], COORDINATOR);

    let agents = manifest["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 4);
    for agent in agents {
        assert_eq!(agent["model"], DEFAULT_MODEL);
        assert!(!agent["instruction"].as_str().unwrap().is_empty());
    }

    let coordinator = agents
        .iter()
        .find(|agent| agent["name"] == COORDINATOR)
        .unwrap();
    let sub_agents: Vec<&str> = coordinator["sub_agents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|name| name.as_str().unwrap())
        .collect();
    assert_eq!(
        sub_agents,
        vec!["code_reviewer", "quality_analyzer", "security_scanner"]
    );
}

#[tokio::test]
async fn empty_catalog_registry_pairing_is_rejected() {
    let config = Config::new(None, DEFAULT_MODEL.to_string(), PathBuf::from("."));
    let catalog = AgentCatalog::builtin(&config);

    // A registry without the inspector cannot satisfy the coordinator.
    let bare = ToolRegistry::new();
    assert!(catalog.validate(&bare).is_err());
}
