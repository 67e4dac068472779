//! Resolve command implementation.
//!
//! Prints the layers an expression turns on, in render order.

use clap::Args;
use serde::Serialize;

use crate::character::Character;
use crate::error::{CompoError, Result};
use crate::output::Printer;
use crate::parser::Expression;
use crate::types::{ActiveMacroSet, Layer};

use super::ProjectArgs;

/// Resolve an expression to the layers it turns on
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Expression, e.g. "Smile,Blink,Mouth+Frown" (default: the character's presets)
    pub expression: Option<String>,

    /// Print a JSON document instead of one layer id per line
    #[arg(long)]
    pub json: bool,
}

/// What `--json` prints.
#[derive(Debug, Serialize)]
pub struct Resolution<'a> {
    pub character: &'a str,
    pub expression: String,
    pub compositions: &'a ActiveMacroSet,
    pub layers: Vec<&'a Layer>,
}

pub fn run(args: ResolveArgs, printer: &Printer) -> Result<()> {
    let character = args.project.load(printer)?;
    let output = render(&character, args.expression.as_deref(), args.json)?;
    println!("{}", output);
    Ok(())
}

/// Resolve an expression (or the presets) and format it for output.
pub fn render(character: &Character, expression: Option<&str>, json: bool) -> Result<String> {
    let expr = match expression {
        Some(text) => character.parse_expression(text),
        None => Expression {
            macros: character.presets(),
            ..Expression::default()
        },
    };

    let overrides = expr.overrides(character.catalog());
    let state = character.resolve(&expr.macros, &overrides)?;
    let layers = state.active_layers(character.catalog());

    if json {
        let resolution = Resolution {
            character: &character.name,
            expression: character.synthesize(&state, &expr.macros)?,
            compositions: &expr.macros,
            layers,
        };
        serde_json::to_string_pretty(&resolution).map_err(|e| CompoError::Output {
            message: format!("Failed to encode JSON: {}", e),
        })
    } else {
        Ok(layers
            .iter()
            .map(|layer| layer.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
