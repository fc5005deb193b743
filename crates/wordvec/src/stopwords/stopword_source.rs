//! # Stopword Source Trait

use std::sync::Arc;

use crate::{WordvecError, errors::WVResult, types::WVHashSet};

/// The default stopword language.
pub const DEFAULT_LANGUAGE: &str = "english";

/// A set of stopwords.
pub type StopwordSet = WVHashSet<String>;

/// Common Stopword Source Handle Type
pub type StopwordSourceHandle = Arc<dyn StopwordSource>;

/// Supplies stopword lists by language.
pub trait StopwordSource: Send + Sync {
    /// Get the stopwords for `language`.
    ///
    /// ## Returns
    /// The set, or [`WordvecError::StopwordsUnavailable`].
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>>;
}

impl core::fmt::Debug for dyn StopwordSource {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "StopwordSource")
    }
}

impl<S: StopwordSource + ?Sized> StopwordSource for Arc<S> {
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>> {
        (**self).get_stopwords(language)
    }
}

/// A fixed stopword list for a single language.
#[derive(Debug, Clone)]
pub struct FixedStopwords {
    language: String,
    words: Arc<StopwordSet>,
}

impl FixedStopwords {
    /// Build a fixed list for `language`.
    pub fn new<L, W, S>(
        language: L,
        words: W,
    ) -> Self
    where
        L: Into<String>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.into(),
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// A list with no stopwords at all.
    pub fn empty<L: Into<String>>(language: L) -> Self {
        Self::new(language, core::iter::empty::<String>())
    }
}

impl StopwordSource for FixedStopwords {
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>> {
        if language == self.language {
            Ok(self.words.clone())
        } else {
            Err(WordvecError::StopwordsUnavailable {
                language: language.to_string(),
                reason: format!("only {:?} is configured", self.language),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_stopwords() {
        let source = FixedStopwords::new("english", ["the", "a"]);
        let words = source.get_stopwords("english").unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("the"));

        let err = source.get_stopwords("french").unwrap_err();
        assert!(matches!(
            err,
            WordvecError::StopwordsUnavailable { ref language, .. } if language == "french"
        ));

        assert!(FixedStopwords::empty("x").get_stopwords("x").unwrap().is_empty());
    }

    #[test]
    fn test_shared_handle() {
        let handle: StopwordSourceHandle = Arc::new(FixedStopwords::new("english", ["the"]));
        assert!(handle.get_stopwords("english").unwrap().contains("the"));
        assert_eq!(format!("{handle:?}"), "StopwordSource");
    }
}
