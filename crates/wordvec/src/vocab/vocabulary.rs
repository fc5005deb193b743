//! # Vocabulary

use ndarray::Array1;

use crate::{
    WordvecError,
    errors::WVResult,
    types::{WVHashMap, WVHashSet, hash_map_with_capacity},
};

/// A fitted, immutable vocabulary.
///
/// Positions are assigned by sorting the accepted tokens lexicographically;
/// [`Self::index_of`] and [`Self::token_at`] are exact inverses.
///
/// Stopwords that were seen while fitting are recorded in
/// [`Self::stopwords`] whether or not they were kept for scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    /// ``{ position -> token }``
    tokens: Vec<String>,

    /// ``{ token -> position }``
    index: WVHashMap<String, usize>,

    /// Stopwords, in first-seen order.
    stopwords: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from accepted tokens and a stopword record.
    ///
    /// Duplicate tokens are collapsed.
    ///
    /// ## Arguments
    /// * `tokens` - The accepted (scoring) tokens, in any order.
    /// * `stopwords` - The stopword record.
    pub fn new<I, S>(
        tokens: I,
        stopwords: Vec<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: WVHashSet<String> = tokens.into_iter().map(Into::into).collect();
        let mut tokens: Vec<String> = unique.into_iter().collect();
        tokens.sort_unstable();

        let mut index = hash_map_with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            index.insert(token.clone(), idx);
        }

        Self {
            tokens,
            index,
            stopwords,
        }
    }

    /// Build a vocabulary with no stopword record.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tokens, Vec::new())
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The position of `token`, if present.
    pub fn index_of(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// The token at `position`, if in range.
    pub fn token_at(
        &self,
        position: usize,
    ) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    /// Is `token` in the vocabulary?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// The position of `token`.
    ///
    /// ## Returns
    /// The position, or [`WordvecError::NotInVocabulary`].
    pub fn try_index_of(
        &self,
        token: &str,
    ) -> WVResult<usize> {
        self.index_of(token)
            .ok_or_else(|| WordvecError::not_in_vocabulary(token))
    }

    /// The tokens, in position order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over ``(position, token)`` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(idx, tok)| (idx, tok.as_str()))
    }

    /// The stopword record.
    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    /// Was `token` recorded as a stopword?
    pub fn is_stopword(
        &self,
        token: &str,
    ) -> bool {
        self.stopwords.iter().any(|s| s == token)
    }

    /// The one-hot vector for `token`.
    ///
    /// ## Returns
    /// A vocabulary-length vector with a single ``1.0``,
    /// or [`WordvecError::NotInVocabulary`].
    pub fn one_hot(
        &self,
        token: &str,
    ) -> WVResult<Array1<f64>> {
        let idx = self.try_index_of(token)?;
        let mut v = Array1::zeros(self.len());
        v[idx] = 1.0;
        Ok(v)
    }
}
