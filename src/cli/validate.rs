//! Validate command implementation.
//!
//! Loads one character (or all of them) and reports diagnostics without
//! resolving anything.

use clap::Args;

use crate::character::Character;
use crate::discovery::discover;
use crate::error::{CompoError, Result};
use crate::output::{plural, Printer};
use crate::validation::{validate_character, ValidationResult};

use super::ProjectArgs;

/// Check character definitions for problems
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Validate every character in the project
    #[arg(long, conflicts_with = "character")]
    pub all: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut failed = 0;

    if args.all {
        let project = discover(&args.project.root)?;
        let loaded = project.load_all();

        for (name, character) in &loaded {
            match character {
                Ok(character) => {
                    if !report(character, args.strict, printer) {
                        failed += 1;
                    }
                }
                Err(e) => {
                    printer.error("Failed", &format!("{}: {}", name, e));
                    failed += 1;
                }
            }
        }

        printer.info("Validated", &plural(loaded.len(), "character", "characters"));
    } else {
        let character = args.project.load(printer)?;
        if !report(&character, args.strict, printer) {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CompoError::Validation {
            message: format!("{} failed validation", plural(failed, "character", "characters")),
            help: if args.strict {
                Some("Warnings count as errors with --strict".to_string())
            } else {
                None
            },
        });
    }

    Ok(())
}

/// Print diagnostics for one character. Returns false if it failed.
fn report(character: &Character, strict: bool, printer: &Printer) -> bool {
    let result = validate_character(character);
    printer.validation(&character.name, &result);
    passes(&result, strict)
}

fn passes(result: &ValidationResult, strict: bool) -> bool {
    if strict {
        result.is_ok()
    } else {
        !result.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Diagnostic;

    #[test]
    fn test_passes() {
        let mut result = ValidationResult::new();
        assert!(passes(&result, true));

        result.push(Diagnostic::warning("compo::validate::unknown-layer", "x"));
        assert!(passes(&result, false));
        assert!(!passes(&result, true));

        result.push(Diagnostic::error("compo::validate::cycle", "y"));
        assert!(!passes(&result, false));
    }
}
