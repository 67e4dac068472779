//! Character discovery and loading for compo projects.
//!
//! A project is a directory with an optional `compo.yaml` manifest and a
//! characters directory holding one sub-directory per character.
//!
//! # Example
//!
//! ```ignore
//! use compo::discovery::discover;
//!
//! let project = discover("./my-project")?;
//! println!("Found {} characters", project.scan.total());
//!
//! let hero = project.load(Some("hero"))?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::character::Character;
use crate::error::{CompoError, Result};

pub use loader::load_character;
pub use manifest::{Manifest, SourceFiles};
pub use scanner::{scan_characters, CharacterDir, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "compo.yaml";

/// Result of discovering characters in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no compo.yaml found).
    pub manifest: Manifest,

    /// Whether a compo.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered character directories.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Pick which character to use.
    ///
    /// An explicit name wins, then the manifest's `default_character`, then
    /// the only character if there is exactly one.
    pub fn select<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a CharacterDir> {
        let wanted = explicit.or(self.manifest.default_character.as_deref());

        match wanted {
            Some(name) => self.scan.find(name).ok_or_else(|| CompoError::UnknownCharacter {
                name: name.to_string(),
                help: Some(self.available_help()),
            }),
            None if self.scan.total() == 1 => Ok(&self.scan.characters[0]),
            None => Err(CompoError::UnknownCharacter {
                name: "(none selected)".to_string(),
                help: Some(format!(
                    "Pass --character or set default_character in {}. {}",
                    MANIFEST_FILENAME,
                    self.available_help()
                )),
            }),
        }
    }

    /// Select and load a character.
    pub fn load(&self, explicit: Option<&str>) -> Result<Character> {
        let dir = self.select(explicit)?;
        load_character(dir, &self.manifest.files)
    }

    /// Load every discovered character, keeping per-character failures.
    pub fn load_all(&self) -> Vec<(String, Result<Character>)> {
        self.scan
            .characters
            .iter()
            .map(|dir| (dir.name.clone(), load_character(dir, &self.manifest.files)))
            .collect()
    }

    fn available_help(&self) -> String {
        if self.scan.is_empty() {
            format!(
                "No characters found under {}",
                self.root.join(&self.manifest.characters).display()
            )
        } else {
            format!(
                "Available: {}",
                self.scan.names().collect::<Vec<_>>().join(", ")
            )
        }
    }
}

/// Discover characters in a project directory.
///
/// Reads `compo.yaml` from the root if present, then scans the configured
/// characters directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let characters_root = if manifest.characters.is_absolute() {
        manifest.characters.clone()
    } else {
        root.join(&manifest.characters)
    };
    let scan = scan_characters(&characters_root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}
