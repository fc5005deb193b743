//! # Built-in Stopwords

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::{
    WordvecError,
    errors::WVResult,
    stopwords::{StopwordSet, StopwordSource},
};

/// The standard English stopword list (as distributed with NLTK).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH_SET: Lazy<Arc<StopwordSet>> =
    Lazy::new(|| Arc::new(ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()));

/// Stopwords compiled into the crate.
///
/// Only ``"english"`` is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopwords;

impl StopwordSource for BuiltinStopwords {
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>> {
        match language {
            "english" => Ok(ENGLISH_SET.clone()),
            _ => Err(WordvecError::StopwordsUnavailable {
                language: language.to_string(),
                reason: "no built-in list".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english() {
        let words = BuiltinStopwords.get_stopwords("english").unwrap();
        assert_eq!(words.len(), ENGLISH_STOPWORDS.len());
        for w in ["the", "a", "don't", "wouldn't", "ourselves"] {
            assert!(words.contains(w), "{w}");
        }
        assert!(!words.contains("cat"));
    }

    #[test]
    fn test_unknown_language() {
        assert!(matches!(
            BuiltinStopwords.get_stopwords("klingon"),
            Err(WordvecError::StopwordsUnavailable { .. })
        ));
    }
}
