//! Character loader - reads a character directory's text blobs.

use std::fs;
use std::path::Path;

use crate::character::{Character, CharacterSources};
use crate::error::{CompoError, Result};

use super::manifest::SourceFiles;
use super::scanner::CharacterDir;

/// Load one character directory.
///
/// The catalog file is required. Missing compositions or baseline files
/// load as empty.
pub fn load_character(dir: &CharacterDir, files: &SourceFiles) -> Result<Character> {
    let catalog = read_required(&dir.path.join(&files.catalog))?;
    let compositions = read_optional(&dir.path.join(&files.compositions))?;
    let baseline = read_optional(&dir.path.join(&files.baseline))?;

    Ok(Character::from_sources(CharacterSources {
        name: dir.name.clone(),
        catalog,
        compositions,
        baseline,
    }))
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CompoError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read catalog: {}", e),
    })
}

fn read_optional(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).map_err(|e| CompoError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_character() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("layers.txt"), "Eyes:Open:1\nEyes:Closed:1\n").unwrap();
        fs::write(dir.path().join("compositions.txt"), "Blink:Eyes>Closed\n").unwrap();
        fs::write(dir.path().join("default.txt"), "Blink:\n").unwrap();

        let character = load_character(
            &CharacterDir {
                name: "hero".to_string(),
                path: dir.path().to_path_buf(),
            },
            &SourceFiles::default(),
        )
        .unwrap();

        assert_eq!(character.name, "hero");
        assert_eq!(character.catalog().len(), 2);
        assert!(character.registry().contains("Blink"));
        assert_eq!(character.baseline().preset_names, vec!["Blink"]);
    }

    #[test]
    fn test_optional_files_missing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("layers.txt"), "Eyes:Open:1\n").unwrap();

        let character = load_character(
            &CharacterDir {
                name: "bare".to_string(),
                path: dir.path().to_path_buf(),
            },
            &SourceFiles::default(),
        )
        .unwrap();

        assert!(character.registry().is_empty());
        assert!(character.baseline().is_empty());
    }

    #[test]
    fn test_missing_catalog_is_error() {
        let dir = tempdir().unwrap();
        let result = load_character(
            &CharacterDir {
                name: "ghost".to_string(),
                path: dir.path().to_path_buf(),
            },
            &SourceFiles::default(),
        );
        assert!(matches!(result, Err(CompoError::Io { .. })));
    }
}
