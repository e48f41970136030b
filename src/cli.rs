use clap::Parser;
use git_stamp::stamp::Field;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "git-stamp")]
#[command(about = "Print the commit hash, short hash and release tag of a git repository for build stamping")]
#[command(version)]
pub struct CliArgs {
    /// Repository to inspect (default: current directory)
    #[arg(long, short = 'C', value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// git executable to run (default: `git` found on PATH)
    #[arg(long = "git", value_name = "PATH")]
    pub git_binary: Option<PathBuf>,

    /// Output the stamp as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only this field's value (empty line when absent)
    #[arg(long, value_enum, value_name = "NAME")]
    pub field: Option<Field>,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.json && self.field.is_some() {
            return Err("Cannot specify both --json and --field".to_string());
        }

        if let Some(ref dir) = self.dir
            && !dir.is_dir()
        {
            return Err(format!("Repository directory {} does not exist", dir.display()));
        }

        if let Some(ref output) = self.output
            && output.is_dir()
        {
            return Err(format!("Output path {} is a directory", output.display()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs { dir: None, git_binary: None, json: false, field: None, output: None }
    }

    #[test]
    fn test_validate_defaults_succeed() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn test_validate_json_and_field_fails() {
        let args = CliArgs { json: true, field: Some(Field::Tag), ..args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_missing_dir_fails() {
        let args = CliArgs { dir: Some(PathBuf::from("/nonexistent/git-stamp/repo")), ..args() };
        let err = args.validate().unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_validate_output_directory_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = CliArgs { output: Some(temp_dir.path().to_path_buf()), ..args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_parse_field_names() {
        let args = CliArgs::try_parse_from(["git-stamp", "--field", "short-commit", "-C", "."]).unwrap();
        assert_eq!(args.field, Some(Field::ShortCommit));
        assert_eq!(args.dir, Some(PathBuf::from(".")));

        assert!(CliArgs::try_parse_from(["git-stamp", "--field", "nope"]).is_err());
    }
}
