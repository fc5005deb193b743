//! # Vocabulary Builder

use std::sync::Arc;

use crate::{
    errors::WVResult,
    stopwords::{BuiltinStopwords, DEFAULT_LANGUAGE, StopwordSourceHandle},
    tokenizers::{TokenizerHandle, TokenizerKind},
    types::WVHashSet,
    vocab::{Corpus, Vocabulary, normalize::normalized_tokens},
};

/// Options for [`VocabularyBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VocabularyOptions {
    /// Treat stopwords like any other token.
    ///
    /// When `true` (the default), stopwords are kept in the vocabulary
    /// and also recorded; when `false`, they are only recorded.
    pub ignore_stopwords: bool,

    /// The stopword language.
    pub language: String,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            ignore_stopwords: true,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl VocabularyOptions {
    /// Set whether stopwords are kept for scoring.
    pub fn with_ignore_stopwords(
        self,
        ignore_stopwords: bool,
    ) -> Self {
        Self {
            ignore_stopwords,
            ..self
        }
    }

    /// Set the stopword language.
    pub fn with_language<S: Into<String>>(
        self,
        language: S,
    ) -> Self {
        Self {
            language: language.into(),
            ..self
        }
    }
}

/// Builds a [`Vocabulary`] from a [`Corpus`].
///
/// The tokenizer and stopword source are explicit dependencies.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    options: VocabularyOptions,
    tokenizer: TokenizerHandle,
    stopwords: StopwordSourceHandle,
}

impl VocabularyBuilder {
    /// Create a new builder.
    ///
    /// ## Arguments
    /// * `options` - Stopword handling.
    /// * `tokenizer` - The tokenizer for fitting and transforming.
    /// * `stopwords` - The stopword source.
    pub fn new(
        options: VocabularyOptions,
        tokenizer: TokenizerHandle,
        stopwords: StopwordSourceHandle,
    ) -> Self {
        Self {
            options,
            tokenizer,
            stopwords,
        }
    }

    /// A builder with the punctuation-aware tokenizer and built-in stopwords.
    pub fn try_default() -> WVResult<Self> {
        Ok(Self::new(
            VocabularyOptions::default(),
            TokenizerKind::default().build_handle()?,
            Arc::new(BuiltinStopwords),
        ))
    }

    /// Replace the options.
    pub fn with_options(
        self,
        options: VocabularyOptions,
    ) -> Self {
        Self { options, ..self }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(
        self,
        tokenizer: TokenizerHandle,
    ) -> Self {
        Self { tokenizer, ..self }
    }

    /// Replace the stopword source.
    pub fn with_stopwords(
        self,
        stopwords: StopwordSourceHandle,
    ) -> Self {
        Self { stopwords, ..self }
    }

    /// The options.
    pub fn options(&self) -> &VocabularyOptions {
        &self.options
    }

    /// The tokenizer.
    pub fn tokenizer(&self) -> &TokenizerHandle {
        &self.tokenizer
    }

    /// Tokenize and normalize a sentence the way fitting does.
    pub fn normalized_tokens(
        &self,
        sentence: &str,
    ) -> Vec<String> {
        normalized_tokens(self.tokenizer.as_ref(), sentence)
    }

    /// Fit a vocabulary to `corpus`.
    ///
    /// The stopword list is fetched first; failure to fetch it fails the
    /// whole fit.
    ///
    /// ## Returns
    /// The new vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fit(
        &self,
        corpus: &Corpus,
    ) -> WVResult<Vocabulary> {
        let lang_stopwords = self.stopwords.get_stopwords(&self.options.language)?;

        let mut seen: WVHashSet<String> = WVHashSet::default();
        let mut accepted: Vec<String> = Vec::new();
        let mut stopwords: Vec<String> = Vec::new();

        for sentence in corpus.iter() {
            for token in self.normalized_tokens(sentence) {
                if seen.contains(&token) {
                    continue;
                }
                if lang_stopwords.contains(&token) {
                    if self.options.ignore_stopwords {
                        accepted.push(token.clone());
                    }
                    stopwords.push(token.clone());
                } else {
                    accepted.push(token.clone());
                }
                seen.insert(token);
            }
        }

        let vocab = Vocabulary::new(accepted, stopwords);
        log::info!(
            "fitted vocabulary: {} tokens ({} stopwords seen) from {} sentences",
            vocab.len(),
            vocab.stopwords().len(),
            corpus.len()
        );
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WordvecError,
        stopwords::{FixedStopwords, StopwordSourceHandle},
    };

    fn builder(ignore_stopwords: bool) -> VocabularyBuilder {
        let stopwords: StopwordSourceHandle = Arc::new(FixedStopwords::new("english", ["the"]));
        VocabularyBuilder::try_default()
            .unwrap()
            .with_stopwords(stopwords)
            .with_options(VocabularyOptions::default().with_ignore_stopwords(ignore_stopwords))
    }

    #[test]
    fn test_fit_keeps_stopwords_by_default() {
        let vocab = builder(true)
            .fit(&Corpus::from(["the cat sat", "the dog sat"]))
            .unwrap();

        assert_eq!(vocab.tokens(), ["cat", "dog", "sat", "the"]);
        assert_eq!(vocab.index_of("cat"), Some(0));
        assert_eq!(vocab.index_of("dog"), Some(1));
        assert_eq!(vocab.index_of("sat"), Some(2));
        assert_eq!(vocab.index_of("the"), Some(3));
        assert_eq!(vocab.stopwords(), ["the"]);
    }

    #[test]
    fn test_fit_drops_stopwords() {
        let vocab = builder(false)
            .fit(&Corpus::from(["The cat sat.", "the dog sat"]))
            .unwrap();

        assert_eq!(vocab.tokens(), ["cat", "dog", "sat"]);
        assert!(vocab.is_stopword("the"));
        assert!(!vocab.contains("the"));
    }

    #[test]
    fn test_end_of_sentence_normalization() {
        let vocab = builder(true)
            .fit(&Corpus::from(["It is the end.", "The END"]))
            .unwrap();
        assert!(vocab.contains("end"));
        assert!(!vocab.contains("end."));
        assert_eq!(vocab.tokens(), ["end", "is", "it", "the"]);
    }

    #[test]
    fn test_punctuation_skipped() {
        let vocab = builder(true)
            .fit(&Corpus::from("Wait... what?! -- $5.4, 42"))
            .unwrap();
        assert_eq!(vocab.tokens(), ["$5.4", "42", "wait", "what"]);
    }

    #[test]
    fn test_missing_stopword_language_is_fatal() {
        let builder =
            builder(true).with_options(VocabularyOptions::default().with_language("french"));
        assert!(matches!(
            builder.fit(&Corpus::from("le chat")),
            Err(WordvecError::StopwordsUnavailable { .. })
        ));
    }

    #[test]
    fn test_options_serde() {
        let options: VocabularyOptions =
            serde_json::from_str(r#"{"ignore_stopwords": false}"#).unwrap();
        assert!(!options.ignore_stopwords);
        assert_eq!(options.language, "english");
    }
}
