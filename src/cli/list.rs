//! List command implementation.
//!
//! Without a character, prints the characters the project contains. With
//! one, prints its layer groups and compositions.

use clap::Args;

use crate::character::Character;
use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

/// List characters, groups and compositions
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Show which compositions reference which
    #[arg(long)]
    pub deps: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    if args.project.character.is_none() && !args.deps {
        return print_characters(&args.project, printer);
    }

    let character = args.project.load(printer)?;
    if args.deps {
        print_deps(&character, printer);
    } else {
        print_inventory(&character, printer);
    }

    Ok(())
}

fn print_characters(project: &ProjectArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&project.root)?;
    let default = discovery.manifest.default_character.as_deref();

    if discovery.scan.is_empty() {
        printer.warning("Empty", &display_path(&discovery.root));
        return Ok(());
    }

    for dir in &discovery.scan.characters {
        if Some(dir.name.as_str()) == default {
            printer.info(
                "Character",
                &format!("{} {}", printer.bold(&dir.name), printer.dim("(default)")),
            );
        } else {
            printer.info("Character", &dir.name);
        }
    }

    printer.status(
        "Found",
        &plural(discovery.scan.total(), "character", "characters"),
    );
    Ok(())
}

fn print_inventory(character: &Character, printer: &Printer) {
    let catalog = character.catalog();

    for group in catalog.groups() {
        let names: Vec<&str> = catalog.group(group).map(|l| l.name.as_str()).collect();
        printer.info(group, &names.join(", "));
    }

    let compositions = sorted_names(character.registry().names());
    if !compositions.is_empty() {
        printer.info("Compositions", &compositions.join(", "));
    }

    let presets: Vec<&str> = character.baseline().preset_names.iter().map(String::as_str).collect();
    if !presets.is_empty() {
        printer.info("Presets", &presets.join(", "));
    }
}

fn print_deps(character: &Character, printer: &Printer) {
    let graph = character.registry().graph();

    for name in sorted_names(graph.nodes()) {
        let refs: Vec<&str> = graph.references_of(&name).collect();
        let used_by: Vec<&str> = graph.referenced_by(&name).collect();

        let mut line = name.clone();
        if !refs.is_empty() {
            line.push_str(&format!(" {} {}", printer.dim("->"), refs.join(", ")));
        }
        if !used_by.is_empty() {
            line.push_str(&format!(" {} {}", printer.dim("<-"), used_by.join(", ")));
        }
        printer.info("Composition", &line);
    }
}

fn sorted_names<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = iter.map(|s| s.to_string()).collect();
    names.sort();
    names
}
