//! # `wordvec` Text Vectorization
//!
//! Turns raw text into numeric vectors:
//!
//! ```text
//! text -> tokens -> vocabulary -> vectors
//! ```
//!
//! See:
//! * [`tokenizers`] to split text into tokens.
//! * [`stopwords`] to supply stopword lists.
//! * [`vocab`] to fit a [`vocab::Vocabulary`] to a [`vocab::Corpus`].
//! * [`vectorizers`] for count, tf-idf and one-hot vectors.
//! * [`embedding`] to train skip-gram word embeddings.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Counting Words
//!
//! ```rust
//! use wordvec::{
//!     vectorizers::{CorpusVectorizer, CountVectorizer},
//!     vocab::{Corpus, VocabularyBuilder},
//! };
//!
//! let mut vectorizer = CountVectorizer::new(VocabularyBuilder::try_default().unwrap());
//! vectorizer
//!     .fit(&Corpus::from(["the cat sat", "the dog sat"]))
//!     .unwrap();
//!
//! // cat=0, dog=1, sat=2, the=3
//! assert_eq!(
//!     vectorizer.transform_sentence("the cat").unwrap(),
//!     vec![1, 0, 0, 1]
//! );
//! ```
#![warn(missing_docs, unused)]

pub mod embedding;
pub mod errors;
pub mod regex;
pub mod stopwords;
pub mod tokenizers;
pub mod types;
pub mod vectorizers;
pub mod vocab;

#[doc(inline)]
pub use errors::{WVResult, WordvecError};
