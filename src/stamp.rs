/// Build stamp collection and rendering
///
/// This module handles:
/// - Gathering the repository metadata embedded into build artifacts
/// - Deriving the revision string (commit plus `-dirty` marker)
/// - Rendering the stamp as `key=value` lines or JSON
use crate::git::{self, Git};
use chrono::{SecondsFormat, Utc};
use log::debug;
use serde::Serialize;

/// Suffix appended to the revision when the work tree has local changes
pub const DIRTY_SUFFIX: &str = "-dirty";

/// Repository metadata for one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stamp {
    pub revision: String,
    pub commit: String,
    pub short_commit: String,
    pub dirty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub built_at: String,
}

/// Single stamp value selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Field {
    Commit,
    ShortCommit,
    Revision,
    Tag,
    NearestTag,
    Version,
    Source,
    Dirty,
    BuiltAt,
}

impl Stamp {
    /// Query `git` for everything a stamp needs.
    ///
    /// The commit hashes and dirty state are required; tags and the remote
    /// are optional and become `None` when git has nothing to report.
    pub fn collect(git: &Git) -> git::Result<Self> {
        let commit = git.full_commit()?;
        let short_commit = git.short_commit()?;
        let dirty = git.is_dirty()?;

        let tag = git.tags_points_at().unwrap_or_else(|e| {
            debug!("Tag lookup at HEAD failed: {}", e);
            None
        });
        let nearest_tag = optional("nearest tag", git.describe_tags());
        let source = optional("remote URL", git.remote_url());

        Ok(Self {
            revision: revision(&commit, dirty),
            commit,
            short_commit,
            dirty,
            tag,
            nearest_tag,
            source,
            built_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Release version: tag at HEAD, else nearest tag, else short commit
    pub fn version(&self) -> &str {
        self.tag.as_deref().or(self.nearest_tag.as_deref()).unwrap_or(&self.short_commit)
    }

    /// Value of a single field, `None` when that field is absent
    pub fn field(&self, field: Field) -> Option<String> {
        match field {
            Field::Commit => Some(self.commit.clone()),
            Field::ShortCommit => Some(self.short_commit.clone()),
            Field::Revision => Some(self.revision.clone()),
            Field::Tag => self.tag.clone(),
            Field::NearestTag => self.nearest_tag.clone(),
            Field::Version => Some(self.version().to_string()),
            Field::Source => self.source.clone(),
            Field::Dirty => Some(self.dirty.to_string()),
            Field::BuiltAt => Some(self.built_at.clone()),
        }
    }

    /// One `key=value` line per present field, in a fixed order
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("version={}", self.version()),
            format!("revision={}", self.revision),
            format!("commit={}", self.commit),
            format!("short_commit={}", self.short_commit),
            format!("dirty={}", self.dirty),
        ];

        if let Some(ref tag) = self.tag {
            lines.push(format!("tag={}", tag));
        }
        if let Some(ref nearest) = self.nearest_tag {
            lines.push(format!("nearest_tag={}", nearest));
        }
        if let Some(ref source) = self.source {
            lines.push(format!("source={}", source));
        }
        lines.push(format!("built_at={}", self.built_at));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        use serde_json::json;

        let mut value = serde_json::to_value(self)?;
        if let Some(map) = value.as_object_mut() {
            map.insert("version".to_string(), json!(self.version()));
        }

        serde_json::to_string_pretty(&value)
    }
}

/// Commit hash with the dirty marker when needed
pub fn revision(commit: &str, dirty: bool) -> String {
    if dirty { format!("{}{}", commit, DIRTY_SUFFIX) } else { commit.to_string() }
}

fn optional(what: &str, result: git::Result<String>) -> Option<String> {
    match result {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(e) => {
            debug!("No {}: {}", what, e);
            None
        }
    }
}
