pub mod canon;
pub mod completions;
pub mod init;
pub mod list;
pub mod resolve;
pub mod synth;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::character::Character;
use crate::discovery::discover;
use crate::error::Result;
use crate::output::{plural, Printer};

/// compo - Layered character composition resolver
#[derive(Parser, Debug)]
#[command(name = "compo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable coloured status output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an expression to the layers it turns on
    Resolve(resolve::ResolveArgs),

    /// Rewrite an expression in its canonical minimal form
    Canon(canon::CanonArgs),

    /// Build the expression for an exact set of layers
    Synth(synth::SynthArgs),

    /// Check character definitions for problems
    Validate(validate::ValidateArgs),

    /// List characters, groups and compositions
    List(list::ListArgs),

    /// Initialize a compo project (generates compo.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where to find the project and which character to use.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing compo.yaml and the characters directory
    #[arg(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Character to use (default: manifest's default_character)
    #[arg(long, short)]
    pub character: Option<String>,
}

impl ProjectArgs {
    /// Discover the project and load the selected character.
    pub fn load(&self, printer: &Printer) -> Result<Character> {
        let project = discover(&self.root)?;
        let character = project.load(self.character.as_deref())?;

        printer.status(
            "Loaded",
            &format!(
                "{} ({}, {})",
                character.name,
                plural(character.catalog().len(), "layer", "layers"),
                plural(character.registry().len(), "composition", "compositions")
            ),
        );

        Ok(character)
    }
}
