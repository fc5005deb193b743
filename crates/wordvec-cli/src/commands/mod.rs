use crate::commands::{embed::EmbedArgs, tokenize::TokenizeArgs, vectorize::VectorizeArgs};

pub mod embed;
pub mod tokenize;
pub mod vectorize;

/// Subcommands for wvec
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Tokenize text, one line at a time.
    Tokenize(TokenizeArgs),

    /// Fit a vectorizer to a corpus and vectorize text.
    Vectorize(VectorizeArgs),

    /// Train skip-gram embeddings and print word vectors.
    Embed(EmbedArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Vectorize(cmd) => cmd.run(),
            Commands::Embed(cmd) => cmd.run(),
        }
    }
}
