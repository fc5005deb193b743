//! # Skip-Gram Options

use crate::{WordvecError, errors::WVResult};

/// Where skip-gram context windows slide.
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
pub enum PairSource {
    /// Slide over the sorted vocabulary.
    ///
    /// Pairs are unrelated to real co-occurrence; kept for compatibility.
    #[default]
    VocabularyOrder,

    /// Slide over each sentence's normalized, in-vocabulary tokens.
    Sentences,
}

/// Options for [`crate::embedding::SkipGramTrainer`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkipGramOptions {
    /// Context window radius.
    pub window_size: usize,

    /// Hidden layer width.
    pub embedding_size: usize,

    /// Gradient descent step size.
    pub learning_rate: f64,

    /// Number of full-batch epochs.
    pub epochs: usize,

    /// RNG seed for weight initialization; `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Where context windows slide.
    pub pair_source: PairSource,
}

impl Default for SkipGramOptions {
    fn default() -> Self {
        Self {
            window_size: 3,
            embedding_size: 16,
            learning_rate: 0.05,
            epochs: 100,
            seed: None,
            pair_source: PairSource::default(),
        }
    }
}

impl SkipGramOptions {
    /// Set the context window radius.
    pub fn with_window_size(
        self,
        window_size: usize,
    ) -> Self {
        Self {
            window_size,
            ..self
        }
    }

    /// Set the hidden layer width.
    pub fn with_embedding_size(
        self,
        embedding_size: usize,
    ) -> Self {
        Self {
            embedding_size,
            ..self
        }
    }

    /// Set the learning rate.
    pub fn with_learning_rate(
        self,
        learning_rate: f64,
    ) -> Self {
        Self {
            learning_rate,
            ..self
        }
    }

    /// Set the epoch count.
    pub fn with_epochs(
        self,
        epochs: usize,
    ) -> Self {
        Self { epochs, ..self }
    }

    /// Set the RNG seed.
    pub fn with_seed(
        self,
        seed: Option<u64>,
    ) -> Self {
        Self { seed, ..self }
    }

    /// Set the pair source.
    pub fn with_pair_source(
        self,
        pair_source: PairSource,
    ) -> Self {
        Self {
            pair_source,
            ..self
        }
    }

    /// Check the options can be trained with.
    ///
    /// ## Returns
    /// `Ok(())`, or [`WordvecError::InvalidConfig`].
    pub fn validate(&self) -> WVResult<()> {
        if self.embedding_size == 0 {
            return Err(WordvecError::InvalidConfig(
                "embedding_size must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(WordvecError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
