pub mod agent_config;
pub mod catalog;

pub use agent_config::AgentConfig;
pub use catalog::AgentCatalog;
