//! Synth command implementation.
//!
//! Takes an exact set of layers plus the compositions to keep active and
//! prints the shortest expression that reproduces them.

use clap::Args;

use crate::character::Character;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{ActivationMap, ActiveMacroSet};

use super::ProjectArgs;

/// Build the expression for an exact set of layers
#[derive(Args, Debug)]
pub struct SynthArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Compositions to keep active, in order (comma-separated)
    #[arg(long, short, value_delimiter = ',')]
    pub macros: Vec<String>,

    /// Layer ids that should be on, e.g. Eyes/Closed (comma-separated)
    #[arg(long, short, value_delimiter = ',')]
    pub layers: Vec<String>,
}

pub fn run(args: SynthArgs, printer: &Printer) -> Result<()> {
    let character = args.project.load(printer)?;

    for name in unknown_names(&character, &args.macros, &args.layers) {
        printer.warning("Ignoring", &name);
    }

    let active: ActiveMacroSet = args
        .macros
        .iter()
        .filter(|name| character.registry().contains(name.as_str()))
        .map(String::as_str)
        .collect();
    let state: ActivationMap = args
        .layers
        .iter()
        .filter(|id| character.catalog().contains(id.as_str()))
        .map(|id| (id.clone(), true))
        .collect();

    println!("{}", character.synthesize(&state, &active)?);
    Ok(())
}

/// Describe each composition name or layer id the character does not have.
fn unknown_names(character: &Character, macros: &[String], layers: &[String]) -> Vec<String> {
    let unknown_macros = macros
        .iter()
        .filter(|name| !character.registry().contains(name.as_str()))
        .map(|name| format!("unknown composition '{}'", name));
    let unknown_layers = layers
        .iter()
        .filter(|id| !character.catalog().contains(id.as_str()))
        .map(|id| format!("unknown layer '{}'", id));

    unknown_macros.chain(unknown_layers).collect()
}
