use std::io::{BufRead, Write};

use wordvec::tokenizers::{TextTokenizer, TokenizerKind};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    /// Tokenizer: whitespace, naive-punct or punct.
    #[arg(long, default_value_t = TokenizerKind::Punct)]
    tokenizer: TokenizerKind,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.build()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_tokenize(&mut reader, &mut writer, &tokenizer)
    }
}

fn run_tokenize(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &dyn TextTokenizer,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", tokenizer.tokenize(&line).join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_run_tokenize() {
        let tokenizer = TokenizerKind::Punct.build().unwrap();
        let mut reader = Cursor::new("Hello, world.\nWait... what?!\n");
        let mut out: Vec<u8> = Vec::new();

        run_tokenize(&mut reader, &mut out, &tokenizer).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello , world.\nWait ... what ? !\n"
        );
    }
}
