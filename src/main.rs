use clap::Parser;
use compo::cli::{Cli, Commands};
use compo::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.no_color {
        Printer::plain()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Resolve(args) => compo::cli::resolve::run(args, &printer)?,
        Commands::Canon(args) => compo::cli::canon::run(args, &printer)?,
        Commands::Synth(args) => compo::cli::synth::run(args, &printer)?,
        Commands::Validate(args) => compo::cli::validate::run(args, &printer)?,
        Commands::List(args) => compo::cli::list::run(args, &printer)?,
        Commands::Init(args) => compo::cli::init::run(args, &printer)?,
        Commands::Completions(args) => compo::cli::completions::run(args)?,
    }

    Ok(())
}
