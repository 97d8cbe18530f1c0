use std::path::PathBuf;

/// Execution context handed to every tool call: the workspace directory the
/// session is anchored in (log location, future file tools) and the session
/// identifier used to correlate log records.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub work_dir: PathBuf,
    pub session_id: String,
}

impl ToolContext {
    pub fn new(work_dir: PathBuf, session_id: String) -> Self {
        Self {
            work_dir,
            session_id,
        }
    }
}
