/// Configuration resolution module
///
/// This module handles:
/// - Resolving the git executable and repository directory from CLI arguments
/// - Checking that the directory is inside a work tree
/// - Choosing how the stamp is rendered
use crate::cli::CliArgs;
use git_stamp::git::Git;
use git_stamp::stamp::{Field, Stamp};
use log::debug;
use std::path::PathBuf;

/// How the stamp is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Field(Field),
}

impl OutputFormat {
    pub fn render(&self, stamp: &Stamp) -> Result<String, String> {
        match self {
            OutputFormat::Text => Ok(stamp.to_text()),
            OutputFormat::Json => {
                let mut json = stamp.to_json().map_err(|e| format!("Failed to serialize stamp: {}", e))?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Field(field) => Ok(format!("{}\n", stamp.field(*field).unwrap_or_default())),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct StampConfig {
    pub git: Git,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Build a StampConfig from CLI arguments
pub fn build_stamp_config(args: &CliArgs) -> Result<StampConfig, String> {
    debug!("Building stamp config from CLI args");

    let git = match args.git_binary {
        Some(ref binary) => Git::with_binary(binary),
        None => Git::new(),
    }
    .map_err(|e| e.to_string())?;

    let git = match args.dir {
        Some(ref dir) => git.with_working_dir(dir),
        None => git,
    };

    if !git.is_inside_work_tree() {
        let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        return Err(format!("{} is not inside a git work tree", dir.display()));
    }

    let format = match (args.json, args.field) {
        (_, Some(field)) => OutputFormat::Field(field),
        (true, None) => OutputFormat::Json,
        (false, None) => OutputFormat::Text,
    };

    debug!("Using {:?} in {:?}, format {:?}", git.binary(), git.working_dir(), format);

    Ok(StampConfig { git, format, output: args.output.clone() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
