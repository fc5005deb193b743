//! # TF-IDF Vectorizer
//!
//! Term counts weighted by a smoothed inverse document frequency:
//!
//! ```text
//! idf(t) = 1 + ln((1 + N) / (1 + df(t)))
//! ```
//!
//! where ``N`` is the number of fitted sentences and ``df(t)`` is the
//! number of those sentences containing ``t`` after normalization.

use crate::{
    WordvecError,
    errors::WVResult,
    types::WVHashSet,
    vectorizers::{CorpusVectorizer, count_tokens},
    vocab::{Corpus, Vocabulary, VocabularyBuilder},
};

/// How idf weights are applied to term counts.
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
pub enum IdfApplication {
    /// ``count / idf``.
    #[default]
    Divide,

    /// ``count * idf``; the conventional tf-idf.
    Multiply,
}

impl IdfApplication {
    /// Apply `idf` to a nonzero `count`.
    pub fn apply(
        self,
        count: usize,
        idf: f64,
    ) -> f64 {
        match self {
            Self::Divide => count as f64 / idf,
            Self::Multiply => count as f64 * idf,
        }
    }
}

/// Options for [`TfIdfVectorizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TfIdfOptions {
    /// How idf weights are applied.
    pub idf_application: IdfApplication,
}

impl TfIdfOptions {
    /// Set how idf weights are applied.
    pub fn with_idf_application(
        self,
        idf_application: IdfApplication,
    ) -> Self {
        Self { idf_application }
    }
}

/// Compute the smoothed idf weight.
///
/// ## Arguments
/// * `num_docs` - ``N``, the number of documents.
/// * `doc_freq` - ``df``, the number of documents containing the term.
pub fn smoothed_idf(
    num_docs: usize,
    doc_freq: usize,
) -> f64 {
    1.0 + ((1.0 + num_docs as f64) / (1.0 + doc_freq as f64)).ln()
}

#[derive(Debug, Clone)]
struct TfIdfState {
    vocab: Vocabulary,

    /// ``{ position -> df }``
    document_frequency: Vec<usize>,

    /// ``{ position -> idf }``
    idf: Vec<f64>,
}

/// TF-IDF vectorizer.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    options: TfIdfOptions,
    builder: VocabularyBuilder,
    state: Option<TfIdfState>,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(
        options: TfIdfOptions,
        builder: VocabularyBuilder,
    ) -> Self {
        Self {
            options,
            builder,
            state: None,
        }
    }

    /// The options.
    pub fn options(&self) -> &TfIdfOptions {
        &self.options
    }

    fn state(&self) -> WVResult<&TfIdfState> {
        self.state.as_ref().ok_or(WordvecError::NotFitted)
    }

    /// The number of fitted sentences containing `token`.
    pub fn document_frequency(
        &self,
        token: &str,
    ) -> WVResult<usize> {
        let state = self.state()?;
        Ok(state.document_frequency[state.vocab.try_index_of(token)?])
    }

    /// The idf weight of `token`.
    ///
    /// ## Returns
    /// The weight; or [`WordvecError::NotFitted`] before `fit`,
    /// or [`WordvecError::NotInVocabulary`] for unknown tokens.
    pub fn idf(
        &self,
        token: &str,
    ) -> WVResult<f64> {
        let state = self.state()?;
        Ok(state.idf[state.vocab.try_index_of(token)?])
    }

    /// All idf weights, in vocabulary position order.
    pub fn idf_weights(&self) -> WVResult<&[f64]> {
        Ok(&self.state()?.idf)
    }
}

impl CorpusVectorizer for TfIdfVectorizer {
    type Output = Vec<f64>;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()> {
        let vocab = self.builder.fit(corpus)?;

        let mut document_frequency = vec![0; vocab.len()];
        for sentence in corpus.iter() {
            let present: WVHashSet<usize> = self
                .builder
                .normalized_tokens(sentence)
                .iter()
                .filter_map(|tok| vocab.index_of(tok))
                .collect();
            for idx in present {
                document_frequency[idx] += 1;
            }
        }

        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| smoothed_idf(corpus.len(), df))
            .collect();

        log::debug!("computed idf weights for {} tokens", idf.len());

        self.state = Some(TfIdfState {
            vocab,
            document_frequency,
            idf,
        });
        Ok(())
    }

    fn vocabulary(&self) -> Option<&Vocabulary> {
        self.state.as_ref().map(|s| &s.vocab)
    }

    fn transform_sentence(
        &self,
        sentence: &str,
    ) -> WVResult<Vec<f64>> {
        let state = self.state()?;
        let tokens = self.builder.normalized_tokens(sentence);
        let counts = count_tokens(&state.vocab, tokens.as_slice());

        Ok(counts
            .iter()
            .zip(state.idf.iter())
            .map(|(&count, &idf)| {
                if count == 0 {
                    0.0
                } else {
                    self.options.idf_application.apply(count, idf)
                }
            })
            .collect())
    }
}
