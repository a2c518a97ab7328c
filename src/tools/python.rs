//! Python script execution in a subprocess with a wall-clock timeout.

use super::ToolError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Runs Python scripts and captures their output.
pub struct PythonRunner {
    python_bin: String,
    timeout: Duration,
}

impl PythonRunner {
    /// Create a runner using `python_bin` with the given timeout in seconds.
    pub fn new(python_bin: &str, timeout_seconds: u64) -> Self {
        Self {
            python_bin: python_bin.to_string(),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }

    /// Execute a script and return its stdout and stderr as labeled blocks.
    ///
    /// The child is killed when the timeout elapses; the call never blocks
    /// past the configured wall-clock limit.
    pub async fn execute(&self, file_path: &str) -> Result<String, ToolError> {
        let child = Command::new(&self.python_bin)
            .arg(file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| downstream(file_path, &e.to_string()))?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| downstream(file_path, &e.to_string()))?,
            Err(_) => return Err(ToolError::Timeout(self.timeout.as_secs())),
        };

        Ok(format!(
            "STDOUT:\n{}\nSTDERR:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ))
    }
}

fn downstream(file_path: &str, message: &str) -> ToolError {
    ToolError::Downstream(format!("executing {}: {}", file_path, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    // The runner only prepends the binary to the argument list, so any
    // executable stands in for the interpreter in tests.

    #[tokio::test]
    async fn test_execute_captures_stdout() {
        let runner = PythonRunner::new("echo", 5);
        let output = runner.execute("hello").await.unwrap();
        assert!(output.starts_with("STDOUT:\n"));
        assert!(output.contains("hello"));
        assert!(output.contains("STDERR:\n"));
    }

    #[tokio::test]
    async fn test_execute_times_out() {
        let runner = PythonRunner::new("sleep", 1);
        let start = Instant::now();
        let err = runner.execute("5").await.unwrap_err();

        assert!(matches!(err, ToolError::Timeout(1)));
        assert!(start.elapsed() < Duration::from_secs(3));
        assert!(err.to_string().starts_with("Error"));
    }

    #[tokio::test]
    async fn test_execute_missing_interpreter() {
        let runner = PythonRunner::new("definitely-not-a-real-binary", 5);
        let err = runner.execute("script.py").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Error executing script.py:"));
    }
}
