//! # Count Vectorizer

use crate::{
    errors::WVResult,
    vectorizers::CorpusVectorizer,
    vocab::{Corpus, Vocabulary, VocabularyBuilder},
};

/// Count occurrences of vocabulary tokens.
///
/// ## Arguments
/// * `vocab` - The vocabulary.
/// * `tokens` - Normalized tokens; out-of-vocabulary tokens are ignored.
///
/// ## Returns
/// A vocabulary-length count vector.
pub fn count_tokens<S: AsRef<str>>(
    vocab: &Vocabulary,
    tokens: &[S],
) -> Vec<usize> {
    let mut counts = vec![0; vocab.len()];
    for tok in tokens {
        if let Some(idx) = vocab.index_of(tok.as_ref()) {
            counts[idx] += 1;
        }
    }
    counts
}

/// Bag-of-words vectorizer.
///
/// Each sentence becomes a vocabulary-length vector of occurrence counts.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    builder: VocabularyBuilder,
    vocab: Option<Vocabulary>,
}

impl CountVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(builder: VocabularyBuilder) -> Self {
        Self {
            builder,
            vocab: None,
        }
    }

    /// The vocabulary builder.
    pub fn builder(&self) -> &VocabularyBuilder {
        &self.builder
    }
}

impl CorpusVectorizer for CountVectorizer {
    type Output = Vec<usize>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()> {
        let vocab = self.builder.fit(corpus)?;
        self.vocab = Some(vocab);
        Ok(())
    }

    fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocab.as_ref()
    }

    fn transform_sentence(
        &self,
        sentence: &str,
    ) -> WVResult<Vec<usize>> {
        let vocab = self.fitted_vocabulary()?;
        let tokens = self.builder.normalized_tokens(sentence);
        Ok(count_tokens(vocab, tokens.as_slice()))
    }
}
