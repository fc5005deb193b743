//! # Vocabulary
//!
//! A [`VocabularyBuilder`] scans a [`Corpus`] and produces an immutable
//! [`Vocabulary`]: the sorted set of accepted tokens, the
//! ``token <-> position`` maps, and the record of stopwords seen.
//!
//! Tokens are normalized the same way when fitting and when transforming;
//! see [`normalize`].

pub mod normalize;

mod corpus;
mod vocabulary;
mod vocabulary_builder;

#[doc(inline)]
pub use corpus::Corpus;
#[doc(inline)]
pub use vocabulary::Vocabulary;
#[doc(inline)]
pub use vocabulary_builder::{VocabularyBuilder, VocabularyOptions};
