mod cli;
mod commands;
mod logging;
mod output;

use anyhow::anyhow;
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match (cli.list_patterns, cli.input_file) {
        (true, _) => commands::patterns::run(cli.json),
        (false, Some(input)) => commands::expand::run(&input, cli.output.as_deref()),
        (false, None) => Err(anyhow!("an input file is required")),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
