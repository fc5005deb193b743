use std::{fs::File, io::Write};

use wordvec::{
    vectorizers::{VectorBatch, VectorizerKind, VectorizerOptions},
    vocab::Corpus,
};

use crate::{
    input_output::{InputArgs, OutputArgs, read_file_lines, read_lines},
    logging::LogArgs,
    stopword_selector::StopwordArgs,
};

/// Output formats for the vectorize command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VectorFormat {
    /// Space separated numbers; matrix rows separated by ``;``.
    Text,

    /// One JSON value per line.
    Json,
}

/// Args for the vectorize command.
#[derive(clap::Args, Debug)]
pub struct VectorizeArgs {
    /// Vectorizer: count, tfidf, one-hot or skip-gram;
    /// overrides the config file.
    #[arg(long, default_value = None)]
    kind: Option<VectorizerKind>,

    /// JSON vectorizer config file.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// Corpus to fit, one sentence per line; defaults to the input.
    #[arg(long, default_value = None)]
    corpus: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: VectorFormat,

    #[command(flatten)]
    stopwords: StopwordArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VectorizeArgs {
    fn options(&self) -> Result<VectorizerOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => serde_json::from_reader(File::open(path)?)?,
            None => VectorizerOptions::default(),
        };
        if let Some(kind) = self.kind {
            options = options.with_kind(kind);
        }
        Ok(options)
    }

    /// Run the vectorize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.options()?;
        log::info!("vectorizer: {}", options.kind);

        let mut reader = self.input.open_reader()?;
        let input = Corpus::from(read_lines(&mut reader)?);
        let corpus = match &self.corpus {
            Some(path) => Corpus::from(read_file_lines(path)?),
            None => input.clone(),
        };

        let mut vectorizer = options.build_with_stopwords(self.stopwords.source())?;
        vectorizer.fit(&corpus)?;
        let batch = vectorizer.transform(&input)?;

        let mut writer = self.output.open_writer()?;
        write_batch(&mut writer, &batch, self.format)?;
        writer.flush()?;
        Ok(())
    }
}

fn format_row<I>(row: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    row.into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_batch(
    writer: &mut dyn Write,
    batch: &VectorBatch,
    format: VectorFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        VectorFormat::Json => {
            for value in batch.to_json_rows() {
                writeln!(writer, "{value}")?;
            }
        }
        VectorFormat::Text => match batch {
            VectorBatch::Counts(rows) => {
                for row in rows {
                    writeln!(writer, "{}", format_row(row))?;
                }
            }
            VectorBatch::Weights(rows) => {
                for row in rows {
                    writeln!(writer, "{}", format_row(row))?;
                }
            }
            VectorBatch::Matrices(matrices) => {
                for m in matrices {
                    let rows: Vec<String> = m.rows().into_iter().map(format_row).collect();
                    writeln!(writer, "{}", rows.join("; "))?;
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_write_batch() {
        let batch = VectorBatch::Counts(vec![vec![1, 0, 2], vec![0, 0, 0]]);

        let mut out: Vec<u8> = Vec::new();
        write_batch(&mut out, &batch, VectorFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 0 2\n0 0 0\n");

        let mut out: Vec<u8> = Vec::new();
        write_batch(&mut out, &batch, VectorFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1,0,2]\n[0,0,0]\n");
    }

    #[test]
    fn test_write_weights() {
        let batch = VectorBatch::Weights(vec![vec![0.5, 1.0]]);
        let mut out: Vec<u8> = Vec::new();
        write_batch(&mut out, &batch, VectorFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 1\n");
    }

    #[test]
    fn test_write_matrices() {
        let batch = VectorBatch::Matrices(vec![array![[1.0, 0.0], [0.0, 1.0]]]);
        let mut out: Vec<u8> = Vec::new();
        write_batch(&mut out, &batch, VectorFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 0; 0 1\n");
    }
}
