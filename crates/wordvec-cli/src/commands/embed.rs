use std::io::Write;

use wordvec::{
    embedding::{PairSource, SkipGramOptions, SkipGramTrainer},
    tokenizers::TokenizerKind,
    vocab::{Corpus, VocabularyBuilder, VocabularyOptions},
};

use crate::{
    input_output::{OutputArgs, read_file_lines},
    logging::LogArgs,
    stopword_selector::StopwordArgs,
};

/// Args for the embed command.
#[derive(clap::Args, Debug)]
pub struct EmbedArgs {
    /// Words to print embeddings for.
    words: Vec<String>,

    /// Training corpus, one sentence per line.
    #[arg(long)]
    corpus: String,

    /// Context window radius.
    #[arg(long, default_value = "3")]
    window: usize,

    /// Embedding dimension.
    #[arg(long, default_value = "16")]
    dim: usize,

    /// Learning rate.
    #[arg(long, default_value = "0.05")]
    lr: f64,

    /// Training epochs.
    #[arg(long, default_value = "100")]
    epochs: usize,

    /// RNG seed for reproducible weights.
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Slide context windows over corpus sentences
    /// rather than the sorted vocabulary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    sentence_pairs: bool,

    /// Drop stopwords from the vocabulary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    drop_stopwords: bool,

    #[command(flatten)]
    stopwords: StopwordArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EmbedArgs {
    fn options(&self) -> SkipGramOptions {
        SkipGramOptions::default()
            .with_window_size(self.window)
            .with_embedding_size(self.dim)
            .with_learning_rate(self.lr)
            .with_epochs(self.epochs)
            .with_seed(self.seed)
            .with_pair_source(if self.sentence_pairs {
                PairSource::Sentences
            } else {
                PairSource::VocabularyOrder
            })
    }

    /// Run the embed command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let corpus = Corpus::from(read_file_lines(&self.corpus)?);
        log::info!("corpus: {} sentences", corpus.len());

        let builder = VocabularyBuilder::new(
            VocabularyOptions::default().with_ignore_stopwords(!self.drop_stopwords),
            TokenizerKind::Punct.build_handle()?,
            self.stopwords.source(),
        );
        let mut trainer = SkipGramTrainer::new(self.options(), builder);
        trainer.fit_with(&corpus, |epoch, loss| {
            log::trace!("epoch {epoch}: {loss}");
            core::ops::ControlFlow::Continue(())
        })?;

        let mut writer = self.output.open_writer()?;
        write_embeddings(&mut writer, &trainer, &self.words)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_embeddings(
    writer: &mut dyn Write,
    trainer: &SkipGramTrainer,
    words: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    for word in words {
        let embedding = trainer.sample(&word.to_lowercase())?;
        let value = serde_json::json!({
            "word": word,
            "embedding": embedding.to_vec(),
        });
        writeln!(writer, "{value}")?;
    }
    Ok(())
}
