//! # Corpus Vectorizer Trait

use crate::{
    WordvecError,
    errors::WVResult,
    vocab::{Corpus, Vocabulary},
};

/// A strategy mapping sentences onto numeric vectors over a fitted
/// [`Vocabulary`].
///
/// Fitting replaces all fitted state wholesale; on error the previous
/// state is left untouched.
pub trait CorpusVectorizer {
    /// The per-sentence output.
    type Output;

    /// Fit to `corpus`.
    fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()>;

    /// The fitted vocabulary, if any.
    fn vocabulary(&self) -> Option<&Vocabulary>;

    /// The fitted vocabulary.
    ///
    /// ## Returns
    /// The vocabulary, or [`WordvecError::NotFitted`].
    fn fitted_vocabulary(&self) -> WVResult<&Vocabulary> {
        self.vocabulary().ok_or(WordvecError::NotFitted)
    }

    /// Is this vectorizer fitted?
    fn is_fitted(&self) -> bool {
        self.vocabulary().is_some()
    }

    /// Transform a single sentence.
    fn transform_sentence(
        &self,
        sentence: &str,
    ) -> WVResult<Self::Output>;

    /// Transform each sentence of `corpus`.
    fn transform(
        &self,
        corpus: &Corpus,
    ) -> WVResult<Vec<Self::Output>> {
        corpus
            .iter()
            .map(|sentence| self.transform_sentence(sentence))
            .collect()
    }

    /// Fit to `corpus`, then transform it.
    fn fit_transform(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<Vec<Self::Output>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}
