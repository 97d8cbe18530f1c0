use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use coderev::agents::AgentCatalog;
use coderev::config::{initialize_tool_registry, Config, DEFAULT_MODEL};
use coderev::core::{ToolContext, ToolParameters, ToolRegistry};
use coderev::inspect::FileInspection;
use coderev::logging::SessionLogger;

#[derive(Parser)]
#[command(
    name = "coderev",
    version,
    about = "Multi-agent code review assistant: inspect files and export agent registrations"
)]
struct Cli {
    /// Provider API key; carried for the orchestration runtime, never used locally
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Model name stamped on every agent registration
    #[arg(long, env = "DEFAULT_MODEL", default_value = DEFAULT_MODEL, global = true)]
    model: String,

    /// Workspace directory for session logs
    #[arg(long, default_value = ".", global = true)]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect a file and print the structured result
    Inspect {
        /// Path to the file, absolute or relative to the working directory
        path: String,

        /// Print the raw JSON mapping instead of a readable summary
        #[arg(long)]
        json: bool,
    },
    /// Print the agent registration manifest as JSON
    Agents,
    /// Print the registered tool definitions as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::new(cli.api_key, cli.model, cli.workspace);

    let registry = initialize_tool_registry();
    let catalog = AgentCatalog::builtin(&config);
    catalog
        .validate(&registry)
        .context("built-in agent catalog failed validation")?;

    match cli.command {
        Command::Inspect { path, json } => run_inspect(&config, &registry, &path, json).await,
        Command::Agents => {
            println!(
                "{}",
                serde_json::to_string_pretty(&catalog.manifest(&registry))?
            );
            Ok(())
        }
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
            Ok(())
        }
    }
}

async fn run_inspect(
    config: &Config,
    registry: &ToolRegistry,
    path: &str,
    json: bool,
) -> Result<()> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let mut logger = SessionLogger::new(&config.workspace_dir, &session_id)
        .await
        .context("failed to open session log")?;
    let context = ToolContext::new(config.workspace_dir.clone(), session_id);

    let arguments = serde_json::json!({ "file_path": path });
    let params = ToolParameters::from_value(arguments.clone())?;
    let result = registry
        .execute_tool("read_file_content", params, &context)
        .await;

    logger
        .log_invocation("read_file_content", &arguments, &result)
        .await;
    logger.shutdown().await;

    if let Some(error) = &result.error {
        println!("{} {}", "Tool call failed:".red(), error);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result.output)?);
        return Ok(());
    }

    let inspection: FileInspection =
        serde_json::from_value(result.output.clone()).context("unexpected tool output shape")?;

    match inspection {
        FileInspection::Success {
            file_path,
            language,
            line_count,
            char_count,
            content,
        } => {
            println!("{} {}", "File:".green().bold(), file_path);
            println!(
                "{} {} | {} {} | {} {}",
                "Language:".cyan(),
                language,
                "Lines:".cyan(),
                line_count,
                "Chars:".cyan(),
                char_count
            );
            println!();
            print!("{}", content);
            if !content.is_empty() && !content.ends_with('\n') {
                println!();
            }
        }
        FileInspection::Error { message } => {
            println!("{} {}", "Inspection failed:".red(), message);
        }
    }

    Ok(())
}
