//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from wordvec operations.
#[derive(Debug, thiserror::Error)]
pub enum WordvecError {
    /// A corpus element is not text.
    #[error("corpus element {index} is not text: {detail}")]
    InputKind {
        /// Position of the offending element in the corpus.
        index: usize,

        /// What was found instead.
        detail: String,
    },

    /// A transform or weighting was requested before `fit`.
    #[error("vectorizer is not fitted; call fit() first")]
    NotFitted,

    /// Lookup of a word that was never seen while fitting.
    #[error("word {word:?} is not in the vocabulary")]
    NotInVocabulary {
        /// The missing word.
        word: String,
    },

    /// No mapping is defined for the requested pairing.
    #[error("unsupported combination: {left} and {right}")]
    UnsupportedCombination {
        /// The left operand kind.
        left: String,

        /// The right operand kind.
        right: String,
    },

    /// A tokenizer pattern failed to compile.
    #[error("invalid tokenizer pattern: {0}")]
    InvalidPattern(#[from] ErrorWrapper),

    /// A stopword list could not be retrieved.
    #[error("stopwords for {language:?} are unavailable: {reason}")]
    StopwordsUnavailable {
        /// The requested language.
        language: String,

        /// Why the list could not be produced.
        reason: String,
    },

    /// Option values that cannot be used together.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WordvecError {
    /// Build a [`WordvecError::NotInVocabulary`] for `word`.
    pub fn not_in_vocabulary<S: Into<String>>(word: S) -> Self {
        Self::NotInVocabulary { word: word.into() }
    }
}

/// Result type for wordvec operations.
pub type WVResult<T> = core::result::Result<T, WordvecError>;
