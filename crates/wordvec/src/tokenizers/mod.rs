//! # Tokenizers
//!
//! A tokenizer turns text into an ordered sequence of token slices.
//!
//! All built-in tokenizers are a [`RegexTokenizer`] over one of the
//! [`patterns`]; [`TokenizerKind`] selects between them:
//! * [`TokenizerKind::Whitespace`] - split on whitespace runs.
//! * [`TokenizerKind::NaivePunct`] - ``\w+|[^\w\s]+``.
//! * [`TokenizerKind::Punct`] - the punctuation-aware pattern.
//!
//! [`TokenKind`] classifies individual tokens as words, numbers or punctuation.

pub mod patterns;

mod regex_tokenizer;
mod text_tokenizer;
mod token_kind;

#[doc(inline)]
pub use regex_tokenizer::{RegexTokenizer, RegexTokenizerOptions};
#[doc(inline)]
pub use text_tokenizer::{TextTokenizer, TokenizerHandle, TokenizerKind};
#[doc(inline)]
pub use token_kind::{TokenKind, is_punct, is_sentence_final};
