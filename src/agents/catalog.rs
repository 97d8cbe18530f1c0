use anyhow::{bail, Result};
use serde_json::{json, Value};

use crate::agents::agent_config::AgentConfig;
use crate::config::Config;
use crate::core::ToolRegistry;

pub const COORDINATOR: &str = "code_review_coordinator";
pub const CODE_REVIEWER: &str = "code_reviewer";
pub const QUALITY_ANALYZER: &str = "quality_analyzer";
pub const SECURITY_SCANNER: &str = "security_scanner";

// Instruction prompts are product content, embedded at compile time so the
// catalog needs no files at runtime.
const COORDINATOR_PROMPT: &str = include_str!("../../agents/prompts/coordinator.md");
const CODE_REVIEWER_PROMPT: &str = include_str!("../../agents/prompts/code_reviewer.md");
const QUALITY_ANALYZER_PROMPT: &str = include_str!("../../agents/prompts/quality_analyzer.md");
const SECURITY_SCANNER_PROMPT: &str = include_str!("../../agents/prompts/security_scanner.md");

/// The built-in agent catalog: one coordinator delegating to three
/// specialist sub-agents. Holds registration data only.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    agents: Vec<AgentConfig>,
}

impl AgentCatalog {
    /// Build the catalog against an explicit configuration. Every agent
    /// carries the configured model name; the runtime may rewrite this per
    /// agent when it registers them.
    pub fn builtin(config: &Config) -> Self {
        let model = &config.model;

        let agents = vec![
            AgentConfig {
                name: CODE_REVIEWER.to_string(),
                description: "A code reviewer who analyzes code changes, checks for best \
                              practices, design patterns, and suggests improvements."
                    .to_string(),
                model: model.clone(),
                system_prompt: CODE_REVIEWER_PROMPT.to_string(),
                tools: vec![],
                sub_agents: vec![],
            },
            AgentConfig {
                name: QUALITY_ANALYZER.to_string(),
                description: "A quality analyst who measures code quality metrics including \
                              complexity, maintainability, and technical debt indicators."
                    .to_string(),
                model: model.clone(),
                system_prompt: QUALITY_ANALYZER_PROMPT.to_string(),
                tools: vec![],
                sub_agents: vec![],
            },
            AgentConfig {
                name: SECURITY_SCANNER.to_string(),
                description: "A security analyst who scans code for potential vulnerabilities \
                              and security issues."
                    .to_string(),
                model: model.clone(),
                system_prompt: SECURITY_SCANNER_PROMPT.to_string(),
                tools: vec![],
                sub_agents: vec![],
            },
            AgentConfig {
                name: COORDINATOR.to_string(),
                description: "Code Review Assistant: An autonomous multi-agent system that \
                              reviews code, analyzes quality, and scans for security \
                              vulnerabilities. Provide a file path to get a comprehensive \
                              code analysis report."
                    .to_string(),
                model: model.clone(),
                system_prompt: COORDINATOR_PROMPT.to_string(),
                tools: vec!["read_file_content".to_string()],
                sub_agents: vec![
                    CODE_REVIEWER.to_string(),
                    QUALITY_ANALYZER.to_string(),
                    SECURITY_SCANNER.to_string(),
                ],
            },
        ];

        Self { agents }
    }

    pub fn agents(&self) -> &[AgentConfig] {
        &self.agents
    }

    pub fn get(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Check that every record is well formed and that its tool and
    /// sub-agent references resolve against the registry and the catalog.
    pub fn validate(&self, registry: &ToolRegistry) -> Result<()> {
        for agent in &self.agents {
            agent
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid agent config '{}': {}", agent.name, e))?;

            for tool in &agent.tools {
                if !registry.has_tool(tool) {
                    bail!("Agent '{}' references unknown tool '{}'", agent.name, tool);
                }
            }

            for sub_agent in &agent.sub_agents {
                if self.get(sub_agent).is_none() {
                    bail!(
                        "Agent '{}' references unknown sub-agent '{}'",
                        agent.name,
                        sub_agent
                    );
                }
            }
        }

        Ok(())
    }

    /// Render the registration manifest handed to the orchestration
    /// runtime: per agent its identity, instruction, full tool definitions
    /// and sub-agent names.
    pub fn manifest(&self, registry: &ToolRegistry) -> Value {
        let agents: Vec<Value> = self
            .agents
            .iter()
            .map(|agent| {
                let tools: Vec<Value> = agent
                    .tools
                    .iter()
                    .filter_map(|name| registry.get_tool(name))
                    .map(|tool| tool.to_openai_definition())
                    .collect();

                json!({
                    "name": agent.name,
                    "description": agent.description,
                    "model": agent.model,
                    "instruction": agent.system_prompt,
                    "tools": tools,
                    "sub_agents": agent.sub_agents,
                })
            })
            .collect();

        json!({
            "root_agent": COORDINATOR,
            "agents": agents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{initialize_tool_registry, Config};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config::new(None, "gpt-4o-mini".to_string(), PathBuf::from("."))
    }

    #[test]
    fn builtin_catalog_validates_against_registry() {
        let registry = initialize_tool_registry();
        let catalog = AgentCatalog::builtin(&test_config());

        catalog.validate(&registry).unwrap();
        assert_eq!(catalog.agents().len(), 4);

        let coordinator = catalog.get(COORDINATOR).unwrap();
        assert!(coordinator.is_coordinator());
        assert_eq!(coordinator.sub_agents.len(), 3);
        assert_eq!(coordinator.tools, vec!["read_file_content".to_string()]);
    }

    #[test]
    fn validation_rejects_unknown_tool_reference() {
        let registry = ToolRegistry::new();
        let catalog = AgentCatalog::builtin(&test_config());

        let err = catalog.validate(&registry).unwrap_err();
        assert!(err.to_string().contains("read_file_content"));
    }

    #[test]
    fn manifest_carries_tool_definitions_and_root() {
        let registry = initialize_tool_registry();
        let catalog = AgentCatalog::builtin(&test_config());

        let manifest = catalog.manifest(&registry);
        assert_eq!(manifest["root_agent"], COORDINATOR);

        let agents = manifest["agents"].as_array().unwrap();
        assert_eq!(agents.len(), 4);

        let coordinator = agents
            .iter()
            .find(|agent| agent["name"] == COORDINATOR)
            .unwrap();
        assert_eq!(
            coordinator["tools"][0]["function"]["name"],
            "read_file_content"
        );
        assert!(coordinator["instruction"]
            .as_str()
            .unwrap()
            .contains("Code Review Coordinator"));
    }
}
