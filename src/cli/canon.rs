use clap::Args;

use crate::error::Result;
use crate::output::Printer;

use super::ProjectArgs;

/// Rewrite an expression in its canonical minimal form
#[derive(Args, Debug)]
pub struct CanonArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Expression to canonicalize, e.g. "Smile,Mouth>Grin"
    pub expression: String,
}

pub fn run(args: CanonArgs, printer: &Printer) -> Result<()> {
    let character = args.project.load(printer)?;
    println!("{}", character.canonicalize(&args.expression)?);
    Ok(())
}
