//! Init command implementation.
//!
//! Generates a `compo.yaml` manifest from the characters found on disk.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{CompoError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a compo project by generating a compo.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing compo.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(CompoError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILENAME),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let mut discovery = discover(&args.path)?;

    // An existing manifest (with --force) keeps its settings.
    if discovery.manifest.default_character.is_none() {
        discovery.manifest.default_character =
            discovery.scan.names().next().map(str::to_string);
    }

    let yaml = serde_yaml::to_string(&discovery.manifest).map_err(|e| CompoError::Output {
        message: format!("Failed to encode manifest: {}", e),
    })?;

    fs::write(&manifest_path, &yaml).map_err(|e| CompoError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !discovery.scan.is_empty() {
        let names: Vec<&str> = discovery.scan.names().collect();
        printer.info("Discovered", &names.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "character", "characters")
        ),
    );

    Ok(())
}
