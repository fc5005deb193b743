//! # Vectorizers
//!
//! Strategies mapping sentences onto numeric vectors over a fitted
//! vocabulary. Each implements [`CorpusVectorizer`]:
//! * [`CountVectorizer`] - occurrence counts.
//! * [`TfIdfVectorizer`] - counts weighted by smoothed idf.
//! * [`OneHotVectorizer`] - one one-hot row per token.
//! * [`crate::embedding::SkipGramTrainer`] - learned embeddings.
//!
//! [`VectorizerOptions`] selects a strategy by configuration and builds a
//! [`Vectorizer`], whose output is a [`VectorBatch`].
//!
//! ## Example
//! ```rust,no_run
//! use wordvec::{
//!     vectorizers::{VectorBatch, VectorizerKind, VectorizerOptions},
//!     vocab::Corpus,
//! };
//!
//! fn example() -> wordvec::WVResult<()> {
//!     let mut vectorizer = VectorizerOptions::default()
//!         .with_kind(VectorizerKind::Count)
//!         .build()?;
//!
//!     let corpus = Corpus::from(["the cat sat", "the dog sat"]);
//!     vectorizer.fit(&corpus)?;
//!
//!     let batch = vectorizer.transform(&Corpus::from("the cat"))?;
//!     assert_eq!(batch, VectorBatch::Counts(vec![vec![1, 0, 0, 1]]));
//!     Ok(())
//! }
//! ```

pub mod promotion;

mod corpus_vectorizer;
mod count_vectorizer;
mod one_hot_vectorizer;
mod tfidf_vectorizer;
mod vectorizer_options;

#[doc(inline)]
pub use corpus_vectorizer::CorpusVectorizer;
#[doc(inline)]
pub use count_vectorizer::{CountVectorizer, count_tokens};
#[doc(inline)]
pub use one_hot_vectorizer::OneHotVectorizer;
#[doc(inline)]
pub use tfidf_vectorizer::{IdfApplication, TfIdfOptions, TfIdfVectorizer, smoothed_idf};
#[doc(inline)]
pub use vectorizer_options::{VectorBatch, Vectorizer, VectorizerKind, VectorizerOptions};
