//! # Regex Utilities
//!
//! The whitespace and naive-punctuation tokenizers are plain [`regex`] patterns;
//! the punctuation-aware tokenizer needs look-ahead, which only [`fancy_regex`]
//! provides. We'd prefer the standard [`regex`] crate when a pattern permits it.
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{
    ConstRegexWrapperPattern,
    ErrorWrapper,
    MatchRanges,
    RegexWrapper,
    RegexWrapperPattern,
};
