mod commands;
mod input_output;
mod logging;
mod stopword_selector;

use clap::Parser;
use commands::Commands;

/// wvec: tokenize, vectorize and embed text.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
