use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

/// Outcome of a compile-only syntax check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxCheck {
    /// The interpreter parsed the code without complaint
    Valid,
    /// Non-zero exit; carries the tool's diagnostic text verbatim
    SyntaxError(String),
    /// The check itself could not run (missing interpreter, IO failure)
    ToolError(String),
}

impl SyntaxCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, SyntaxCheck::Valid)
    }
}

/// Runs `python -m py_compile` against generated code written to a file in
/// a scoped temporary directory. The code is parsed, never executed; the
/// directory is removed on every exit path, including tool failure, taking
/// the source file and any bytecode cache the interpreter wrote beside it.
pub struct SyntaxChecker {
    python: String,
    temp_dir: PathBuf,
}

impl Default for SyntaxChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxChecker {
    pub fn new() -> Self {
        Self {
            python: "python3".to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Use a different interpreter binary
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Create the scratch directory under a specific parent
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Check that `code` is parseable Python. Infallible by signature: every
    /// failure mode is a structured `SyntaxCheck` value.
    pub async fn check(&self, code: &str) -> SyntaxCheck {
        let scratch = match tempfile::Builder::new()
            .prefix("agentforge-syntax-")
            .tempdir_in(&self.temp_dir)
        {
            Ok(dir) => dir,
            Err(e) => return SyntaxCheck::ToolError(format!("Failed to create temp dir: {}", e)),
        };

        let source_path = scratch.path().join("generated.py");
        if let Err(e) = std::fs::write(&source_path, code) {
            return SyntaxCheck::ToolError(format!("Failed to write temp file: {}", e));
        }

        let output = Command::new(&self.python)
            .arg("-m")
            .arg("py_compile")
            .arg(&source_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        // `scratch` is dropped after this point, which removes the directory
        // recursively (the source and the `__pycache__` py_compile writes)
        // regardless of how the subprocess fared
        match output {
            Ok(output) if output.status.success() => {
                debug!("syntax check passed");
                SyntaxCheck::Valid
            }
            Ok(output) => {
                let diagnostic = String::from_utf8_lossy(&output.stderr).into_owned();
                debug!(exit = ?output.status.code(), "syntax check failed");
                SyntaxCheck::SyntaxError(diagnostic)
            }
            Err(e) => {
                warn!(error = %e, "syntax check tool could not run");
                SyntaxCheck::ToolError(format!("Failed to run {}: {}", self.python, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Everything the check created must be gone, bytecode cache included
    fn leftover_entries(dir: &TempDir) -> usize {
        std::fs::read_dir(dir.path()).unwrap().count()
    }

    #[tokio::test]
    async fn test_valid_code() {
        let dir = TempDir::new().unwrap();
        let checker = SyntaxChecker::new().with_temp_dir(dir.path());

        let result = checker.check("def main():\n    return 42\n").await;
        assert_eq!(result, SyntaxCheck::Valid);
        assert_eq!(leftover_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_unmatched_bracket() {
        let dir = TempDir::new().unwrap();
        let checker = SyntaxChecker::new().with_temp_dir(dir.path());

        let result = checker.check("values = [1, 2, 3\n").await;
        match result {
            SyntaxCheck::SyntaxError(diagnostic) => assert!(!diagnostic.is_empty()),
            other => panic!("expected SyntaxError, got {:?}", other),
        }
        assert_eq!(leftover_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_missing_interpreter_is_tool_error() {
        let dir = TempDir::new().unwrap();
        let checker = SyntaxChecker::new()
            .with_python("definitely-not-a-python-binary")
            .with_temp_dir(dir.path());

        let result = checker.check("x = 1\n").await;
        assert!(matches!(result, SyntaxCheck::ToolError(_)));
        assert_eq!(leftover_entries(&dir), 0);
    }

    #[tokio::test]
    async fn test_empty_code_is_valid_python() {
        let dir = TempDir::new().unwrap();
        let checker = SyntaxChecker::new().with_temp_dir(dir.path());

        assert_eq!(checker.check("").await, SyntaxCheck::Valid);
    }
}
