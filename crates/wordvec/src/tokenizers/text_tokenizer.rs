//! # Text Tokenizer Trait

use std::sync::Arc;

use crate::{
    errors::WVResult,
    tokenizers::{
        RegexTokenizer,
        RegexTokenizerOptions,
        patterns::{NAIVE_PUNCT_PATTERN, PUNCT_AWARE_PATTERN, WHITESPACE_GAP_PATTERN},
    },
};

/// Common Tokenizer Handle Type
pub type TokenizerHandle = Arc<dyn TextTokenizer>;

/// Splits text into an ordered sequence of tokens.
///
/// Tokens borrow from the input text. Tokenization is total:
/// every string, including the empty string, yields a (possibly empty)
/// sequence.
pub trait TextTokenizer: Send + Sync + core::fmt::Debug {
    /// Tokenize a single text.
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str>;

    /// Tokenize each text in turn.
    fn tokenize_many<'a>(
        &self,
        texts: &[&'a str],
    ) -> Vec<Vec<&'a str>> {
        texts.iter().map(|text| self.tokenize(text)).collect()
    }
}

/// The built-in tokenizer variants.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TokenizerKind {
    /// Split on runs of whitespace.
    Whitespace,

    /// Alternate word-character runs and punctuation runs.
    NaivePunct,

    /// Separate leading/trailing punctuation from words,
    /// keeping decimals, ``--`` and ``...`` whole.
    #[default]
    Punct,
}

impl TokenizerKind {
    /// Build the tokenizer for this variant.
    pub fn build(self) -> WVResult<RegexTokenizer> {
        match self {
            Self::Whitespace => RegexTokenizer::new(
                WHITESPACE_GAP_PATTERN,
                RegexTokenizerOptions::default().with_find_gaps(true),
            ),
            Self::NaivePunct => {
                RegexTokenizer::new(NAIVE_PUNCT_PATTERN, RegexTokenizerOptions::default())
            }
            Self::Punct => {
                RegexTokenizer::new(PUNCT_AWARE_PATTERN, RegexTokenizerOptions::default())
            }
        }
    }

    /// Build the tokenizer for this variant, as a shared handle.
    pub fn build_handle(self) -> WVResult<TokenizerHandle> {
        Ok(Arc::new(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_kind_names() {
        for kind in TokenizerKind::iter() {
            assert_eq!(TokenizerKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert_eq!(
            TokenizerKind::from_str("naive-punct").unwrap(),
            TokenizerKind::NaivePunct
        );
        assert!(TokenizerKind::from_str("bogus").is_err());
        assert_eq!(TokenizerKind::default(), TokenizerKind::Punct);
    }

    #[test]
    fn test_tokenize_many() {
        let tokenizer = TokenizerKind::Whitespace.build_handle().unwrap();
        assert_eq!(
            tokenizer.tokenize_many(&["a b", "", "c"]),
            vec![vec!["a", "b"], vec![], vec!["c"]]
        );
    }
}
