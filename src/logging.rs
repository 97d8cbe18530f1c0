use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::core::ToolResult;

#[derive(Serialize)]
struct InvocationRecord<'a> {
    timestamp: String, // ISO-8601 UTC
    session_id: &'a str,
    tool: &'a str,
    arguments: &'a Value,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Append-only JSONL log of tool invocations for one session, written under
/// `<workspace>/logs/`.
pub struct SessionLogger {
    file_path: PathBuf,
    session_id: String,
    file: Option<tokio::fs::File>,
}

impl SessionLogger {
    /// Create a new logger; the file name is derived from the current UTC
    /// time so sessions never collide.
    pub async fn new(workspace: &Path, session_id: &str) -> Result<Self> {
        fs::create_dir_all(workspace).await?;

        let logs_dir = workspace.join("logs");
        fs::create_dir_all(&logs_dir).await?;

        let now: DateTime<Utc> = Utc::now();
        let filename = format!("coderev-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;

        Ok(Self {
            file_path,
            session_id: session_id.to_string(),
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Append one invocation record. Logging failures are reported to
    /// stderr and never fail the invocation itself.
    pub async fn log_invocation(&mut self, tool: &str, arguments: &Value, result: &ToolResult) {
        let record = InvocationRecord {
            timestamp: Utc::now().to_rfc3339(),
            session_id: &self.session_id,
            tool,
            arguments,
            success: result.success,
            error: result.error.as_deref(),
        };

        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&record) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                }
            }
        }
    }

    /// Flush and close the log file. Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}
