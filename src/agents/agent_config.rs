use serde::{Deserialize, Serialize};

/// Declarative registration record for one agent: everything the external
/// orchestration runtime needs to stand the agent up. Execution (the LLM
/// loop, sub-agent delegation, report assembly) is owned by that runtime;
/// this crate only supplies the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub model: String,
    pub system_prompt: String,
    /// Names of tools the agent may call; empty for analysis-only agents.
    #[serde(default)]
    pub tools: Vec<String>,
    /// Names of agents this one coordinates; empty for leaf agents.
    #[serde(default)]
    pub sub_agents: Vec<String>,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Agent name cannot be empty".to_string());
        }

        if self.description.is_empty() {
            return Err("Agent description cannot be empty".to_string());
        }

        if self.system_prompt.is_empty() {
            return Err("System prompt cannot be empty".to_string());
        }

        if self.model.is_empty() {
            return Err("Agent model cannot be empty".to_string());
        }

        Ok(())
    }

    pub fn is_coordinator(&self) -> bool {
        !self.sub_agents.is_empty()
    }
}
