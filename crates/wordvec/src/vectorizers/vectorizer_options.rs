//! # Vectorizer Selection

use std::sync::Arc;

use ndarray::Array2;

use crate::{
    WordvecError,
    embedding::{SkipGramOptions, SkipGramTrainer},
    errors::WVResult,
    stopwords::{BuiltinStopwords, StopwordSourceHandle},
    tokenizers::TokenizerKind,
    vectorizers::{
        CorpusVectorizer,
        CountVectorizer,
        OneHotVectorizer,
        TfIdfOptions,
        TfIdfVectorizer,
        promotion::{NumericKind, result_kind},
    },
    vocab::{Corpus, Vocabulary, VocabularyBuilder, VocabularyOptions},
};

/// The vectorization strategies.
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
pub enum VectorizerKind {
    /// [`CountVectorizer`].
    #[default]
    Count,

    /// [`TfIdfVectorizer`].
    Tfidf,

    /// [`OneHotVectorizer`].
    OneHot,

    /// [`SkipGramTrainer`].
    SkipGram,
}

/// Full vectorizer configuration.
///
/// Loadable from JSON; every field is optional:
/// ```json
/// { "kind": "tfidf", "tokenizer": "punct",
///   "vocabulary": { "ignore_stopwords": false },
///   "tfidf": { "idf_application": "multiply" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VectorizerOptions {
    /// The strategy.
    pub kind: VectorizerKind,

    /// The tokenizer.
    pub tokenizer: TokenizerKind,

    /// Vocabulary options.
    pub vocabulary: VocabularyOptions,

    /// TF-IDF options; used by [`VectorizerKind::Tfidf`].
    pub tfidf: TfIdfOptions,

    /// Skip-gram options; used by [`VectorizerKind::SkipGram`].
    pub skip_gram: SkipGramOptions,
}

impl VectorizerOptions {
    /// Set the strategy.
    pub fn with_kind(
        self,
        kind: VectorizerKind,
    ) -> Self {
        Self { kind, ..self }
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(
        self,
        tokenizer: TokenizerKind,
    ) -> Self {
        Self { tokenizer, ..self }
    }

    /// Set the vocabulary options.
    pub fn with_vocabulary(
        self,
        vocabulary: VocabularyOptions,
    ) -> Self {
        Self { vocabulary, ..self }
    }

    /// Set the TF-IDF options.
    pub fn with_tfidf(
        self,
        tfidf: TfIdfOptions,
    ) -> Self {
        Self { tfidf, ..self }
    }

    /// Set the skip-gram options.
    pub fn with_skip_gram(
        self,
        skip_gram: SkipGramOptions,
    ) -> Self {
        Self { skip_gram, ..self }
    }

    /// Build an unfitted vectorizer with the built-in stopwords.
    pub fn build(&self) -> WVResult<Vectorizer> {
        self.build_with_stopwords(Arc::new(BuiltinStopwords))
    }

    /// Build an unfitted vectorizer.
    ///
    /// ## Arguments
    /// * `stopwords` - The stopword source for fitting.
    pub fn build_with_stopwords(
        &self,
        stopwords: StopwordSourceHandle,
    ) -> WVResult<Vectorizer> {
        let builder = VocabularyBuilder::new(
            self.vocabulary.clone(),
            self.tokenizer.build_handle()?,
            stopwords,
        );

        Ok(match self.kind {
            VectorizerKind::Count => Vectorizer::Count(CountVectorizer::new(builder)),
            VectorizerKind::Tfidf => Vectorizer::TfIdf(TfIdfVectorizer::new(self.tfidf, builder)),
            VectorizerKind::OneHot => Vectorizer::OneHot(OneHotVectorizer::new(builder)),
            VectorizerKind::SkipGram => {
                self.skip_gram.validate()?;
                Vectorizer::SkipGram(SkipGramTrainer::new(self.skip_gram.clone(), builder))
            }
        })
    }
}

/// The transformed output of a corpus, one entry per sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorBatch {
    /// Count vectors.
    Counts(Vec<Vec<usize>>),

    /// Weight vectors.
    Weights(Vec<Vec<f64>>),

    /// Per-sentence matrices, one row per in-vocabulary token.
    Matrices(Vec<Array2<f64>>),
}

impl VectorBatch {
    /// The numeric kind of the entries.
    pub fn numeric_kind(&self) -> NumericKind {
        match self {
            Self::Counts(_) => NumericKind::Count,
            Self::Weights(_) | Self::Matrices(_) => NumericKind::Weight,
        }
    }

    /// The number of sentences.
    pub fn len(&self) -> usize {
        match self {
            Self::Counts(v) => v.len(),
            Self::Weights(v) => v.len(),
            Self::Matrices(v) => v.len(),
        }
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn describe(&self) -> String {
        match self {
            Self::Counts(v) => format!("counts[{}]", v.len()),
            Self::Weights(v) => format!("weights[{}]", v.len()),
            Self::Matrices(v) => format!("matrices[{}]", v.len()),
        }
    }

    fn shape_mismatch(
        &self,
        other: &Self,
    ) -> WordvecError {
        WordvecError::UnsupportedCombination {
            left: self.describe(),
            right: other.describe(),
        }
    }

    /// Add two batches element-wise.
    ///
    /// ## Returns
    /// The sum; or [`WordvecError::UnsupportedCombination`] when the
    /// numeric kinds or shapes differ.
    pub fn combine(
        &self,
        other: &Self,
    ) -> WVResult<Self> {
        result_kind(self.numeric_kind(), other.numeric_kind())?;

        if self.len() != other.len() {
            return Err(self.shape_mismatch(other));
        }

        match (self, other) {
            (Self::Counts(a), Self::Counts(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    if x.len() != y.len() {
                        return Err(self.shape_mismatch(other));
                    }
                    Ok(x.iter().zip(y).map(|(p, q)| p + q).collect::<Vec<_>>())
                })
                .collect::<WVResult<_>>()
                .map(Self::Counts),
            (Self::Weights(a), Self::Weights(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    if x.len() != y.len() {
                        return Err(self.shape_mismatch(other));
                    }
                    Ok(x.iter().zip(y).map(|(p, q)| p + q).collect::<Vec<_>>())
                })
                .collect::<WVResult<_>>()
                .map(Self::Weights),
            (Self::Matrices(a), Self::Matrices(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    if x.shape() != y.shape() {
                        return Err(self.shape_mismatch(other));
                    }
                    Ok(x + y)
                })
                .collect::<WVResult<_>>()
                .map(Self::Matrices),
            _ => Err(self.shape_mismatch(other)),
        }
    }

    /// One JSON value per sentence: a vector, or a list of rows.
    pub fn to_json_rows(&self) -> Vec<serde_json::Value> {
        match self {
            Self::Counts(v) => v.iter().map(|row| serde_json::json!(row)).collect(),
            Self::Weights(v) => v.iter().map(|row| serde_json::json!(row)).collect(),
            Self::Matrices(v) => v
                .iter()
                .map(|m| {
                    let rows: Vec<Vec<f64>> = m.rows().into_iter().map(|r| r.to_vec()).collect();
                    serde_json::json!(rows)
                })
                .collect(),
        }
    }
}

/// A vectorizer of any [`VectorizerKind`].
#[derive(Debug, Clone)]
pub enum Vectorizer {
    /// Counts.
    Count(CountVectorizer),

    /// TF-IDF weights.
    TfIdf(TfIdfVectorizer),

    /// One-hot rows.
    OneHot(OneHotVectorizer),

    /// Skip-gram embeddings.
    SkipGram(SkipGramTrainer),
}

impl Vectorizer {
    /// The strategy.
    pub fn kind(&self) -> VectorizerKind {
        match self {
            Self::Count(_) => VectorizerKind::Count,
            Self::TfIdf(_) => VectorizerKind::Tfidf,
            Self::OneHot(_) => VectorizerKind::OneHot,
            Self::SkipGram(_) => VectorizerKind::SkipGram,
        }
    }

    /// Fit to `corpus`.
    pub fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()> {
        match self {
            Self::Count(v) => v.fit(corpus),
            Self::TfIdf(v) => v.fit(corpus),
            Self::OneHot(v) => v.fit(corpus),
            Self::SkipGram(v) => v.fit(corpus),
        }
    }

    /// The fitted vocabulary, if any.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        match self {
            Self::Count(v) => v.vocabulary(),
            Self::TfIdf(v) => v.vocabulary(),
            Self::OneHot(v) => v.vocabulary(),
            Self::SkipGram(v) => v.vocabulary(),
        }
    }

    /// Transform each sentence of `corpus`.
    pub fn transform(
        &self,
        corpus: &Corpus,
    ) -> WVResult<VectorBatch> {
        Ok(match self {
            Self::Count(v) => VectorBatch::Counts(v.transform(corpus)?),
            Self::TfIdf(v) => VectorBatch::Weights(v.transform(corpus)?),
            Self::OneHot(v) => VectorBatch::Matrices(v.transform(corpus)?),
            Self::SkipGram(v) => VectorBatch::Matrices(v.transform(corpus)?),
        })
    }

    /// Fit to `corpus`, then transform it.
    pub fn fit_transform(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<VectorBatch> {
        self.fit(corpus)?;
        self.transform(corpus)
    }
}
