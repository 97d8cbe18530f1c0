use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Result of inspecting a single file, in the exact shape the coordinator's
/// `read_file_content` tool hands back to the orchestration runtime. Callers
/// branch on the `status` discriminator before touching success-only fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileInspection {
    Success {
        file_path: String,
        language: String,
        line_count: usize,
        char_count: usize,
        content: String,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Error)]
enum InspectError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Path is not a file: {0}")]
    NotAFile(String),
    #[error("Error reading file: {0}")]
    Read(String),
}

/// Map a lowercased file extension (without the dot) to a display label.
/// The table is product data kept in sync with the review prompts, not
/// something inferred from file content.
pub fn language_for_extension(extension: &str) -> &'static str {
    match extension {
        "py" => "Python",
        "js" => "JavaScript",
        "ts" => "TypeScript",
        "jsx" => "React (JSX)",
        "tsx" => "React (TSX)",
        "go" => "Go",
        "rs" => "Rust",
        "java" => "Java",
        "kt" => "Kotlin",
        "cpp" => "C++",
        "c" => "C",
        "cs" => "C#",
        "php" => "PHP",
        "rb" => "Ruby",
        "swift" => "Swift",
        _ => "Unknown",
    }
}

fn detect_language(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => language_for_extension(&ext.to_lowercase()),
        None => "Unknown",
    }
}

/// Inspect a file: existence and regular-file checks, language lookup from
/// the extension, then a full UTF-8 read with line and character counts.
///
/// Every failure is returned as the `Error` variant rather than propagated;
/// the function never panics and holds no state across calls. Symlinks are
/// followed, so a link to a regular file inspects its target and a dangling
/// link reports "File not found".
pub fn inspect(path: impl AsRef<Path>) -> FileInspection {
    match try_inspect(path.as_ref()) {
        Ok(result) => result,
        Err(e) => FileInspection::Error {
            message: e.to_string(),
        },
    }
}

fn try_inspect(path: &Path) -> Result<FileInspection, InspectError> {
    let shown = path.display().to_string();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InspectError::NotFound(shown));
        }
        Err(e) => return Err(InspectError::Read(e.to_string())),
    };
    if !metadata.is_file() {
        return Err(InspectError::NotAFile(shown));
    }

    let language = detect_language(path);

    // Read raw bytes first so a decode failure reports the cause instead of
    // surfacing as a generic I/O error.
    let raw = fs::read(path).map_err(|e| InspectError::Read(e.to_string()))?;
    let content = String::from_utf8(raw).map_err(|e| InspectError::Read(e.to_string()))?;

    Ok(FileInspection::Success {
        file_path: shown,
        language: language.to_string(),
        // A trailing line without a final newline still counts; an empty
        // file has zero lines.
        line_count: content.lines().count(),
        // Characters as decoded, not bytes.
        char_count: content.chars().count(),
        content,
    })
}
