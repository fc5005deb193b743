//! # Skip-Gram Embeddings
//!
//! [`SkipGramTrainer`] learns a dense vector per vocabulary word by
//! predicting context words from center words.
//!
//! ## Example
//! ```rust,no_run
//! use wordvec::{
//!     embedding::{SkipGramOptions, SkipGramTrainer},
//!     vectorizers::CorpusVectorizer,
//!     vocab::{Corpus, VocabularyBuilder},
//! };
//!
//! fn example() -> wordvec::WVResult<()> {
//!     let mut trainer = SkipGramTrainer::new(
//!         SkipGramOptions::default().with_seed(Some(7)),
//!         VocabularyBuilder::try_default()?,
//!     );
//!     trainer.fit(&Corpus::from(["the cat sat", "the dog sat"]))?;
//!     let cat = trainer.embedding("cat")?;
//!     assert_eq!(cat.len(), 16);
//!     Ok(())
//! }
//! ```

pub mod training_pairs;

mod skip_gram_options;
mod skip_gram_trainer;

#[doc(inline)]
pub use skip_gram_options::{PairSource, SkipGramOptions};
#[doc(inline)]
pub use skip_gram_trainer::{SkipGramTrainer, cross_entropy, softmax_rows};
#[doc(inline)]
pub use training_pairs::TrainingPair;
