//! # One-Hot Vectorizer

use ndarray::Array2;

use crate::{
    errors::WVResult,
    vectorizers::CorpusVectorizer,
    vocab::{Corpus, Vocabulary, VocabularyBuilder},
};

/// One-hot vectorizer.
///
/// Each sentence becomes a ``(tokens x V)`` matrix with one row per
/// in-vocabulary token, in sentence order.
#[derive(Debug, Clone)]
pub struct OneHotVectorizer {
    builder: VocabularyBuilder,
    vocab: Option<Vocabulary>,
}

impl OneHotVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(builder: VocabularyBuilder) -> Self {
        Self {
            builder,
            vocab: None,
        }
    }
}

impl CorpusVectorizer for OneHotVectorizer {
    type Output = Array2<f64>;

    fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()> {
        self.vocab = Some(self.builder.fit(corpus)?);
        Ok(())
    }

    fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocab.as_ref()
    }

    fn transform_sentence(
        &self,
        sentence: &str,
    ) -> WVResult<Array2<f64>> {
        let vocab = self.fitted_vocabulary()?;
        let tokens: Vec<String> = self
            .builder
            .normalized_tokens(sentence)
            .into_iter()
            .filter(|tok| vocab.contains(tok))
            .collect();

        let mut rows = Array2::zeros((tokens.len(), vocab.len()));
        for (mut row, tok) in rows.rows_mut().into_iter().zip(&tokens) {
            row.assign(&vocab.one_hot(tok)?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::WordvecError;

    #[test]
    fn test_transform() {
        let mut vec = OneHotVectorizer::new(VocabularyBuilder::try_default().unwrap());
        assert!(matches!(
            vec.transform_sentence("a"),
            Err(WordvecError::NotFitted)
        ));

        vec.fit(&Corpus::from("cats chase mice")).unwrap();
        assert_eq!(
            vec.transform_sentence("mice chase dogs").unwrap(),
            array![[0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]
        );
        assert_eq!(vec.transform_sentence("").unwrap().shape(), &[0, 3]);
    }
}
