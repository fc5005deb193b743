//! # Corpus Input

use crate::{WordvecError, errors::WVResult};

/// A validated corpus: an ordered list of sentences.
///
/// A single string is a one-element corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Corpus {
    sentences: Vec<String>,
}

impl Corpus {
    /// Build a corpus from sentences.
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// Build a corpus from raw byte elements.
    ///
    /// ## Returns
    /// The corpus, or [`WordvecError::InputKind`] naming the first
    /// element which is not valid UTF-8 text.
    pub fn try_from_bytes<B: AsRef<[u8]>>(elements: &[B]) -> WVResult<Self> {
        elements
            .iter()
            .enumerate()
            .map(|(index, bytes)| {
                core::str::from_utf8(bytes.as_ref())
                    .map(str::to_string)
                    .map_err(|err| WordvecError::InputKind {
                        index,
                        detail: format!("invalid utf-8: {err}"),
                    })
            })
            .collect::<WVResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Build a corpus from a JSON string, or a JSON array of strings.
    ///
    /// ## Returns
    /// The corpus, or [`WordvecError::InputKind`] naming the first
    /// element which is not a string.
    pub fn from_json(value: &serde_json::Value) -> WVResult<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Ok(Self::from(s.as_str())),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(WordvecError::InputKind {
                        index,
                        detail: json_kind(other).to_string(),
                    }),
                })
                .collect::<WVResult<Vec<_>>>()
                .map(Self::new),
            other => Err(WordvecError::InputKind {
                index: 0,
                detail: json_kind(other).to_string(),
            }),
        }
    }

    /// Parse JSON text, then [`Self::from_json`].
    pub fn from_json_str(text: &str) -> WVResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// The number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The sentences.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Iterate over the sentences.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(String::as_str)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for Corpus {
    fn from(sentence: &str) -> Self {
        Self::new(vec![sentence.to_string()])
    }
}

impl From<String> for Corpus {
    fn from(sentence: String) -> Self {
        Self::new(vec![sentence])
    }
}

impl<S: Into<String>> From<Vec<S>> for Corpus {
    fn from(sentences: Vec<S>) -> Self {
        sentences.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Corpus {
    fn from(sentences: [S; N]) -> Self {
        sentences.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for Corpus {
    fn from(sentences: &[S]) -> Self {
        sentences.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_single_string_is_one_sentence() {
        let corpus = Corpus::from("the cat sat");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.sentences(), ["the cat sat"]);

        let corpus: Corpus = ["a", "b"].into();
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["a", "b"]);

        assert!(Corpus::default().is_empty());
    }

    #[test]
    fn test_try_from_bytes() {
        let corpus = Corpus::try_from_bytes(&[b"ok".to_vec(), b"fine".to_vec()]).unwrap();
        assert_eq!(corpus.len(), 2);

        let err = Corpus::try_from_bytes(&[b"ok".to_vec(), vec![0xff, 0xfe]]).unwrap_err();
        assert!(matches!(err, WordvecError::InputKind { index: 1, .. }));
    }

    #[test]
    fn test_from_json() {
        let corpus = Corpus::from_json(&json!("one")).unwrap();
        assert_eq!(corpus.sentences(), ["one"]);

        let corpus = Corpus::from_json(&json!(["a", "b"])).unwrap();
        assert_eq!(corpus.len(), 2);

        let err = Corpus::from_json(&json!(["a", 3, "c"])).unwrap_err();
        match err {
            WordvecError::InputKind { index, detail } => {
                assert_eq!(index, 1);
                assert_eq!(detail, "a number");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            Corpus::from_json(&json!({"a": 1})),
            Err(WordvecError::InputKind { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_json_str() {
        assert_eq!(Corpus::from_json_str(r#"["x", "y"]"#).unwrap().len(), 2);
        assert!(matches!(
            Corpus::from_json_str("[nope"),
            Err(WordvecError::Json(_))
        ));
    }
}
