//! Git repository queries
//!
//! This module handles:
//! - Running the `git` executable and capturing its output
//! - Reading the current commit hash (full and short)
//! - Finding the release tag at HEAD or the nearest reachable one
//! - Checking work-tree state (dirty, root, remote)
//!
//! Every query spawns one `git` process and waits for it. Nothing is cached
//! and nothing is retried; failures come back as [`ExecutionError`] carrying
//! git's own diagnostic text.

mod error;
mod remote;
#[cfg(test)]
pub(crate) mod testutil;

pub use error::{ExecutionError, Result};
pub use remote::strip_credentials;

use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the executable looked up on `PATH`
const GIT: &str = "git";

/// Prepended to every invocation; keeps signature checks out of `log`/`show` output
const BASE_ARGS: [&str; 2] = ["-c", "log.showSignature=false"];

/// Remotes consulted by [`Git::remote_url`], in order
const REMOTES: [&str; 2] = ["origin", "upstream"];

/// Handle for running git commands, optionally inside a fixed directory.
#[derive(Debug, Clone)]
pub struct Git {
    binary: PathBuf,
    working_dir: Option<PathBuf>,
    envs: Vec<(OsString, OsString)>,
}

impl Git {
    /// Resolve `git` on `PATH`.
    pub fn new() -> Result<Self> {
        Self::with_binary(GIT)
    }

    /// Use a specific git executable. Bare names are searched on `PATH`,
    /// anything with a path separator must point at an executable file.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Result<Self> {
        let requested = binary.into();
        let binary = which::which(&requested)
            .map_err(|e| ExecutionError::new(format!("git executable {} not found: {}", requested.display(), e)))?;

        debug!("Using git executable {:?}", binary);

        Ok(Self { binary, working_dir: None, envs: Vec::new() })
    }

    /// Run every command in `dir` instead of the inherited working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set an extra environment variable for every command.
    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Run `git <args...>` and return its raw standard output.
    ///
    /// Fails when git cannot be started or exits non-zero. The error message
    /// is git's diagnostic text without the trailing newline.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        debug!("Running git {} in {:?}", args.join(" "), self.working_dir);

        let mut cmd = Command::new(&self.binary);
        cmd.args(BASE_ARGS);
        cmd.args(args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        // Diagnostics are matched and surfaced verbatim, keep them in English
        cmd.env("LC_ALL", "C");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd
            .output()
            .map_err(|e| ExecutionError::new(format!("failed to execute {}: {}", self.binary.display(), e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExecutionError::from_output(&stderr, &stdout, output.status));
        }

        Ok(stdout.into_owned())
    }

    /// Trim trailing whitespace from a successful result.
    ///
    /// Errors pass through untouched and any partial output is dropped.
    pub fn clean(result: Result<String>) -> Result<String> {
        result.map(|out| out.trim_end().to_string())
    }

    /// Full 40-character hash of HEAD
    pub fn full_commit(&self) -> Result<String> {
        Self::clean(self.run(&["rev-parse", "HEAD"]))
    }

    /// Abbreviated hash of HEAD (7 characters unless git needs more to stay unique)
    pub fn short_commit(&self) -> Result<String> {
        Self::clean(self.run(&["rev-parse", "--short=7", "HEAD"]))
    }

    /// Most recently created tag pointing exactly at HEAD.
    ///
    /// Tags are ordered newest first by creation date, never by name or
    /// version. Returns `None` when HEAD carries no tag.
    pub fn tags_points_at(&self) -> Result<Option<String>> {
        let out = Self::clean(self.run(&["tag", "--points-at", "HEAD", "--sort=-creatordate"]))?;
        Ok(out.lines().map(str::trim).find(|line| !line.is_empty()).map(str::to_string))
    }

    /// Nearest tag reachable from HEAD, whether or not HEAD itself is tagged.
    pub fn describe_tags(&self) -> Result<String> {
        Self::clean(self.run(&["describe", "--tags", "--abbrev=0"]))
    }

    /// Whether the working directory is inside a git work tree
    pub fn is_inside_work_tree(&self) -> bool {
        Self::clean(self.run(&["rev-parse", "--is-inside-work-tree"])).map(|out| out == "true").unwrap_or(false)
    }

    /// Whether the work tree has modified, staged or untracked files
    pub fn is_dirty(&self) -> Result<bool> {
        let out = Self::clean(self.run(&["status", "--porcelain"]))?;
        Ok(!out.is_empty())
    }

    /// Top-level directory of the work tree
    pub fn root_dir(&self) -> Result<PathBuf> {
        Self::clean(self.run(&["rev-parse", "--show-toplevel"])).map(PathBuf::from)
    }

    /// Location of the repository metadata directory.
    ///
    /// git reports it relative to the working directory when it can, so a
    /// relative answer is joined onto the configured directory.
    pub fn git_dir(&self) -> Result<PathBuf> {
        let dir = PathBuf::from(Self::clean(self.run(&["rev-parse", "--git-dir"]))?);

        match self.working_dir {
            Some(ref base) if dir.is_relative() => Ok(base.join(dir)),
            _ => Ok(dir),
        }
    }

    /// URL of the `origin` remote, falling back to `upstream`.
    ///
    /// Credentials embedded in URL-style remotes are removed.
    pub fn remote_url(&self) -> Result<String> {
        for remote in REMOTES {
            if let Ok(url) = Self::clean(self.run(&["remote", "get-url", remote]))
                && !url.is_empty()
            {
                return Ok(strip_credentials(&url));
            }
        }

        Err(ExecutionError::new("no remote URL found for either origin or upstream"))
    }
}
