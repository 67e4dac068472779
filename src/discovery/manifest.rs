//! Project manifest (compo.yaml) parsing.
//!
//! The manifest says where character directories live, which character to
//! select by default, and what the three source files are called.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CompoError, Result};

/// Project manifest loaded from compo.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory holding one sub-directory per character.
    #[serde(default = "default_characters")]
    pub characters: PathBuf,

    /// Character selected when none is named explicitly.
    #[serde(default)]
    pub default_character: Option<String>,

    /// Source file names inside a character directory.
    #[serde(default)]
    pub files: SourceFiles,

    /// Patterns of character directories to skip.
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Names of the text blobs that make up a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    /// Layer catalog (`group:name:order` lines). Required.
    pub catalog: String,
    /// Composition registry (`name:part,...` lines).
    pub compositions: String,
    /// Default baseline (single `head:tail` line).
    pub baseline: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            catalog: "layers.txt".to_string(),
            compositions: "compositions.txt".to_string(),
            baseline: "default.txt".to_string(),
        }
    }
}

fn default_characters() -> PathBuf {
    PathBuf::from("characters")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            characters: default_characters(),
            default_character: None,
            files: SourceFiles::default(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a compo.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CompoError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CompoError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check compo.yaml syntax".to_string()),
        })
    }

    /// Check if a character directory should be skipped.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob matching: a leading or trailing `*` matches any
    /// sequence, anything else must appear as a path component.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix('*') {
            return path.ends_with(suffix);
        }
        if let Some(prefix) = pattern.strip_suffix('*') {
            return path
                .rsplit('/')
                .next()
                .is_some_and(|name| name.starts_with(prefix));
        }
        path.split('/').any(|component| component == pattern)
    }
}
