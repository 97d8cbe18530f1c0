use crate::core::tool_context::ToolContext;
use crate::{
    core::tool::{ParameterDefinition, Tool, ToolParameters, ToolResult},
    param,
};
use async_trait::async_trait;
use std::collections::HashMap;

use crate::inspect;

/// Tool exposing the file inspector to the coordinator agent. The output is
/// the `status`-tagged mapping from [`inspect::FileInspection`]; a failed
/// inspection is still a successful tool call, so the runtime always gets a
/// payload to branch on.
pub struct ReadFileContentTool;

#[async_trait]
impl Tool for ReadFileContentTool {
    fn name(&self) -> &str {
        "read_file_content"
    }

    fn description(&self) -> &str {
        "Read a source file and return its content together with the detected language, line count and character count"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([param!(
            "file_path",
            "string",
            "Path to the file to inspect, absolute or relative to the working directory",
            required
        )])
    }

    async fn execute(&self, params: ToolParameters, _context: &ToolContext) -> ToolResult {
        let file_path = match params.get_required::<String>("file_path") {
            Ok(path) => path,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        ToolResult::success(inspect::inspect(&file_path))
    }
}
