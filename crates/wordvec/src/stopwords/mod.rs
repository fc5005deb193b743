//! # Stopword Sources
//!
//! Stopword lists are an injected dependency of the vocabulary builder,
//! never global state. A [`StopwordSource`] maps a language name
//! (``"english"``) to a [`StopwordSet`].
//!
//! * [`BuiltinStopwords`] - the embedded English list.
//! * [`DirectoryStopwords`] - one file per language, one word per line.
//! * [`FixedStopwords`] - an explicit list for a single language.
//! * [`CachedStopwordSource`] - memoizes another source per language.

mod builtin;
mod cached;
mod directory;
mod stopword_source;

#[doc(inline)]
pub use builtin::{BuiltinStopwords, ENGLISH_STOPWORDS};
#[doc(inline)]
pub use cached::CachedStopwordSource;
#[doc(inline)]
pub use directory::DirectoryStopwords;
#[doc(inline)]
pub use stopword_source::{
    DEFAULT_LANGUAGE,
    FixedStopwords,
    StopwordSet,
    StopwordSource,
    StopwordSourceHandle,
};
