//! File system scanner for discovering character directories.
//!
//! A character directory is any direct sub-directory of the characters
//! root that contains a catalog file.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// A discovered character directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDir {
    /// Character name (the directory name).
    pub name: String,
    /// Path to the directory.
    pub path: PathBuf,
}

/// Result of scanning for characters.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered characters, sorted by name.
    pub characters: Vec<CharacterDir>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a character by name.
    pub fn find(&self, name: &str) -> Option<&CharacterDir> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Character names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|c| c.name.as_str())
    }

    /// Get the total number of discovered characters.
    pub fn total(&self) -> usize {
        self.characters.len()
    }

    /// Check if no characters were discovered.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Scan a characters root for character directories.
pub fn scan_characters(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.is_dir() {
        return result;
    }

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if !path.join(&manifest.files.catalog).is_file() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            result.characters.push(CharacterDir {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    result
}
