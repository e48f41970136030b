//! Error type for git invocations.

use thiserror::Error;

/// Failure of a git invocation.
///
/// The message is git's own diagnostic text, passed through verbatim apart
/// from the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExecutionError {
    message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Build an error from the captured streams of a failed process.
    ///
    /// Prefers stderr, then stdout, then the exit status description.
    pub fn from_output(stderr: &str, stdout: &str, status: std::process::ExitStatus) -> Self {
        let text = [stderr, stdout].into_iter().map(|s| s.trim_end_matches(['\n', '\r'])).find(|s| !s.is_empty());

        match text {
            Some(text) => Self::new(text),
            None => Self::new(format!("git exited with {}", status)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, ExecutionError>;
