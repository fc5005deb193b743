//! # Skip-Gram Trainer
//!
//! A two-layer linear-softmax model trained by full-batch gradient descent:
//!
//! ```text
//! hidden = X · W1              (P x E)
//! logits = hidden · W2         (P x V)
//! probs  = softmax(logits)     (row-wise)
//! loss   = -mean(sum(Y * ln(probs)))
//! ```
//!
//! ``X`` and ``Y`` are the one-hot center and context rows of the ``P``
//! training pairs; ``W1`` is ``(V x E)`` and ``W2`` is ``(E x V)``.

use core::ops::ControlFlow;

use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::{
    WordvecError,
    embedding::{
        PairSource,
        SkipGramOptions,
        training_pairs::{TrainingPair, one_hot_pairs, sentence_pairs, vocabulary_order_pairs},
    },
    errors::WVResult,
    vectorizers::CorpusVectorizer,
    vocab::{Corpus, Vocabulary, VocabularyBuilder},
};

/// Probability floor inside the log of the cross-entropy.
const PROB_EPSILON: f64 = 1e-12;

/// Row-wise numerically stable softmax.
pub fn softmax_rows(x: &Array2<f64>) -> Array2<f64> {
    let max_vals = x.map_axis(Axis(1), |row| {
        row.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    });

    let exp_x = x.clone() - &max_vals.insert_axis(Axis(1));
    let exp_x = exp_x.mapv(f64::exp);

    let sum_exp = exp_x.sum_axis(Axis(1));

    &exp_x / &sum_exp.insert_axis(Axis(1))
}

/// Mean categorical cross-entropy of `probs` against one-hot `targets`.
pub fn cross_entropy(
    probs: &Array2<f64>,
    targets: &Array2<f64>,
) -> f64 {
    let rows = probs.nrows().max(1) as f64;
    let total: f64 = probs
        .iter()
        .zip(targets.iter())
        .filter(|(_, t)| **t != 0.0)
        .map(|(p, t)| -t * p.max(PROB_EPSILON).ln())
        .sum();
    total / rows
}

fn cosine_similarity(
    a: ArrayView1<f64>,
    b: ArrayView1<f64>,
) -> f64 {
    let denom = a.dot(&a).sqrt() * b.dot(&b).sqrt();
    if denom == 0.0 { 0.0 } else { a.dot(&b) / denom }
}

/// One full-batch gradient descent step; returns the pre-update loss.
fn train_step(
    x: &Array2<f64>,
    y: &Array2<f64>,
    w1: &mut Array2<f64>,
    w2: &mut Array2<f64>,
    learning_rate: f64,
) -> f64 {
    let rows = x.nrows() as f64;

    let hidden = x.dot(&*w1);
    let logits = hidden.dot(&*w2);
    let probs = softmax_rows(&logits);
    let loss = cross_entropy(&probs, y);

    let dlogits = (&probs - y) / rows;
    let dw2 = hidden.t().dot(&dlogits);
    let dhidden = dlogits.dot(&w2.t());
    let dw1 = x.t().dot(&dhidden);

    w1.scaled_add(-learning_rate, &dw1);
    w2.scaled_add(-learning_rate, &dw2);

    loss
}

#[derive(Debug, Clone)]
struct SkipGramModel {
    vocab: Vocabulary,
    pairs: Vec<TrainingPair>,

    /// ``(V x E)`` embedding matrix.
    w1: Array2<f64>,

    /// ``(E x V)`` output projection.
    w2: Array2<f64>,

    loss_history: Vec<f64>,
}

/// Skip-gram embedding trainer.
///
/// Unfitted until [`CorpusVectorizer::fit`] (or [`Self::fit_with`])
/// succeeds; a failed fit leaves the previous model in place.
#[derive(Debug, Clone)]
pub struct SkipGramTrainer {
    options: SkipGramOptions,
    builder: VocabularyBuilder,
    model: Option<SkipGramModel>,
}

impl SkipGramTrainer {
    /// Create an unfitted trainer.
    ///
    /// ## Arguments
    /// * `options` - Training hyper-parameters.
    /// * `builder` - The vocabulary builder.
    pub fn new(
        options: SkipGramOptions,
        builder: VocabularyBuilder,
    ) -> Self {
        Self {
            options,
            builder,
            model: None,
        }
    }

    /// The options.
    pub fn options(&self) -> &SkipGramOptions {
        &self.options
    }

    fn model(&self) -> WVResult<&SkipGramModel> {
        self.model.as_ref().ok_or(WordvecError::NotFitted)
    }

    fn build_pairs(
        &self,
        corpus: &Corpus,
        vocab: &Vocabulary,
    ) -> Vec<TrainingPair> {
        let window_size = self.options.window_size;
        match self.options.pair_source {
            PairSource::VocabularyOrder => vocabulary_order_pairs(vocab.len(), window_size),
            PairSource::Sentences => {
                let sentences: Vec<Vec<usize>> = corpus
                    .iter()
                    .map(|sentence| {
                        self.builder
                            .normalized_tokens(sentence)
                            .iter()
                            .filter_map(|tok| vocab.index_of(tok))
                            .collect()
                    })
                    .collect();
                sentence_pairs(&sentences, window_size)
            }
        }
    }

    fn init_weights(
        &self,
        vocab_size: usize,
    ) -> (Array2<f64>, Array2<f64>) {
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let dim = self.options.embedding_size;

        let w1 = Array2::from_shape_simple_fn((vocab_size, dim), || {
            rng.sample::<f64, _>(StandardNormal)
        });
        let w2 = Array2::from_shape_simple_fn((dim, vocab_size), || {
            rng.sample::<f64, _>(StandardNormal)
        });
        (w1, w2)
    }

    /// Fit to `corpus`, reporting after each epoch.
    ///
    /// `on_epoch` receives ``(epoch, loss)`` after every epoch; returning
    /// [`ControlFlow::Break`] stops training early. The weights after any
    /// number of epochs are a usable model.
    ///
    /// ## Arguments
    /// * `corpus` - The training corpus.
    /// * `on_epoch` - Epoch callback.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fit_with<F>(
        &mut self,
        corpus: &Corpus,
        mut on_epoch: F,
    ) -> WVResult<()>
    where
        F: FnMut(usize, f64) -> ControlFlow<()>,
    {
        self.options.validate()?;

        let vocab = self.builder.fit(corpus)?;
        let pairs = self.build_pairs(corpus, &vocab);
        let (mut w1, mut w2) = self.init_weights(vocab.len());

        let mut loss_history = Vec::new();
        if pairs.is_empty() {
            log::warn!(
                "no skip-gram training pairs (vocabulary size {}); weights left untrained",
                vocab.len()
            );
        } else {
            log::info!(
                "training skip-gram: {} pairs, vocabulary {}, dim {}, {} epochs",
                pairs.len(),
                vocab.len(),
                self.options.embedding_size,
                self.options.epochs
            );

            let (x, y) = one_hot_pairs(&pairs, vocab.len());
            for epoch in 0..self.options.epochs {
                let loss = train_step(&x, &y, &mut w1, &mut w2, self.options.learning_rate);
                loss_history.push(loss);
                log::debug!("epoch {epoch}: loss {loss:.6}");

                if on_epoch(epoch, loss).is_break() {
                    log::info!("training stopped after epoch {epoch}");
                    break;
                }
            }

            if let Some(loss) = loss_history.last() {
                log::info!("final skip-gram loss: {loss:.6}");
            }
        }

        self.model = Some(SkipGramModel {
            vocab,
            pairs,
            w1,
            w2,
            loss_history,
        });
        Ok(())
    }

    /// The loss of each completed epoch.
    pub fn loss_history(&self) -> WVResult<&[f64]> {
        Ok(&self.model()?.loss_history)
    }

    /// The ``(center, context)`` training pairs.
    pub fn training_pairs(&self) -> WVResult<&[TrainingPair]> {
        Ok(&self.model()?.pairs)
    }

    /// The ``(V x E)`` embedding matrix.
    pub fn embeddings(&self) -> WVResult<&Array2<f64>> {
        Ok(&self.model()?.w1)
    }

    /// The hidden-layer embedding of `word`.
    ///
    /// ## Returns
    /// The embedding-length vector; or [`WordvecError::NotFitted`],
    /// or [`WordvecError::NotInVocabulary`].
    pub fn embedding(
        &self,
        word: &str,
    ) -> WVResult<Array1<f64>> {
        let model = self.model()?;
        let idx = model.vocab.try_index_of(word)?;
        Ok(model.w1.row(idx).to_owned())
    }

    /// The learned representation of `word`; the same as [`Self::embedding`].
    pub fn sample(
        &self,
        word: &str,
    ) -> WVResult<Array1<f64>> {
        self.embedding(word)
    }

    /// The predicted context distribution for `word`.
    ///
    /// ## Returns
    /// A vocabulary-length probability vector.
    pub fn predict_context(
        &self,
        word: &str,
    ) -> WVResult<Array1<f64>> {
        let model = self.model()?;
        let idx = model.vocab.try_index_of(word)?;
        let logits = model.w1.row(idx).dot(&model.w2).insert_axis(Axis(0));
        Ok(softmax_rows(&logits).row(0).to_owned())
    }

    /// The `k` words nearest to `word` by cosine similarity of embeddings.
    ///
    /// ## Returns
    /// ``(word, similarity)`` pairs, most similar first, excluding `word`.
    pub fn most_similar(
        &self,
        word: &str,
        k: usize,
    ) -> WVResult<Vec<(String, f64)>> {
        let model = self.model()?;
        let idx = model.vocab.try_index_of(word)?;
        let target = model.w1.row(idx);

        let mut scored: Vec<(String, f64)> = model
            .vocab
            .iter()
            .filter(|&(other, _)| other != idx)
            .map(|(other, tok)| {
                (
                    tok.to_string(),
                    cosine_similarity(target, model.w1.row(other)),
                )
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k);
        Ok(scored)
    }
}

impl CorpusVectorizer for SkipGramTrainer {
    /// One embedding row per in-vocabulary token.
    type Output = Array2<f64>;

    fn fit(
        &mut self,
        corpus: &Corpus,
    ) -> WVResult<()> {
        self.fit_with(corpus, |_, _| ControlFlow::Continue(()))
    }

    fn vocabulary(&self) -> Option<&Vocabulary> {
        self.model.as_ref().map(|m| &m.vocab)
    }

    fn transform_sentence(
        &self,
        sentence: &str,
    ) -> WVResult<Array2<f64>> {
        let model = self.model()?;
        let positions: Vec<usize> = self
            .builder
            .normalized_tokens(sentence)
            .iter()
            .filter_map(|tok| model.vocab.index_of(tok))
            .collect();
        Ok(model.w1.select(Axis(0), &positions))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ndarray::array;

    use super::*;
    use crate::stopwords::FixedStopwords;

    fn trainer(options: SkipGramOptions) -> SkipGramTrainer {
        let builder = VocabularyBuilder::try_default()
            .unwrap()
            .with_stopwords(Arc::new(FixedStopwords::empty("english")));
        SkipGramTrainer::new(options, builder)
    }

    fn seeded() -> SkipGramOptions {
        SkipGramOptions::default()
            .with_window_size(1)
            .with_embedding_size(4)
            .with_seed(Some(42))
    }

    #[test]
    fn test_softmax_rows() {
        let probs = softmax_rows(&array![[1.0, 2.0, 3.0], [1000.0, 1000.0, 1000.0]]);
        for row in probs.rows() {
            assert!((row.sum() - 1.0).abs() < 1e-12);
        }
        assert!(probs[[0, 2]] > probs[[0, 1]]);
        assert!((probs[[1, 0]] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_entropy() {
        let probs = array![[0.5, 0.5], [0.25, 0.75]];
        let targets = array![[1.0, 0.0], [0.0, 1.0]];
        let expected = -(0.5f64.ln() + 0.75f64.ln()) / 2.0;
        assert!((cross_entropy(&probs, &targets) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_not_fitted() {
        let t = trainer(seeded());
        assert!(matches!(t.sample("a"), Err(WordvecError::NotFitted)));
        assert!(matches!(t.loss_history(), Err(WordvecError::NotFitted)));
        assert!(matches!(
            t.transform_sentence("a"),
            Err(WordvecError::NotFitted)
        ));
    }

    #[test]
    fn test_vocabulary_order_pairs() {
        let mut t = trainer(seeded().with_epochs(1));
        t.fit(&Corpus::from("c a b")).unwrap();
        assert_eq!(
            t.training_pairs().unwrap(),
            &[(0, 1), (1, 0), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_sentence_pairs() {
        let mut t = trainer(
            seeded()
                .with_epochs(1)
                .with_pair_source(PairSource::Sentences),
        );
        t.fit(&Corpus::from(["c a", "b"])).unwrap();
        // a=0, b=1, c=2
        assert_eq!(t.training_pairs().unwrap(), &[(2, 0), (0, 2)]);
    }

    #[test]
    fn test_training_reduces_loss() {
        let mut t = trainer(seeded().with_epochs(200));
        t.fit(&Corpus::from("a b c")).unwrap();

        let history = t.loss_history().unwrap();
        assert_eq!(history.len(), 200);
        assert!(history.iter().all(|l| l.is_finite()));
        assert!(history[199] < history[0]);
    }

    #[test]
    fn test_lookup() {
        let mut t = trainer(seeded().with_epochs(10));
        t.fit(&Corpus::from("a b c")).unwrap();

        let emb = t.embedding("b").unwrap();
        assert_eq!(emb.len(), 4);
        assert_eq!(t.sample("b").unwrap(), emb);
        assert_eq!(t.embeddings().unwrap().row(1).to_owned(), emb);

        let ctx = t.predict_context("b").unwrap();
        assert_eq!(ctx.len(), 3);
        assert!((ctx.sum() - 1.0).abs() < 1e-9);

        assert!(matches!(
            t.sample("zebra"),
            Err(WordvecError::NotInVocabulary { ref word }) if word == "zebra"
        ));

        let similar = t.most_similar("a", 5).unwrap();
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|(w, _)| w != "a"));
        assert!(similar[0].1 >= similar[1].1);

        let rows = t.transform_sentence("c zebra a").unwrap();
        assert_eq!(rows.shape(), &[2, 4]);
        assert_eq!(rows.row(0).to_owned(), t.embedding("c").unwrap());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = trainer(seeded().with_epochs(5));
        let mut b = trainer(seeded().with_epochs(5));
        let corpus = Corpus::from("one two three four");
        a.fit(&corpus).unwrap();
        b.fit(&corpus).unwrap();
        assert_eq!(a.embeddings().unwrap(), b.embeddings().unwrap());
        assert_eq!(a.loss_history().unwrap(), b.loss_history().unwrap());
    }

    #[test]
    fn test_early_stop() {
        let mut t = trainer(seeded());
        t.fit_with(&Corpus::from("a b c"), |epoch, _| {
            if epoch == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
        assert_eq!(t.loss_history().unwrap().len(), 3);
        assert!(t.embedding("a").is_ok());
    }

    #[test]
    fn test_single_word_corpus() {
        let mut t = trainer(seeded());
        t.fit(&Corpus::from("alone")).unwrap();
        assert!(t.training_pairs().unwrap().is_empty());
        assert!(t.loss_history().unwrap().is_empty());
        assert_eq!(t.embedding("alone").unwrap().len(), 4);
    }

    #[test]
    fn test_invalid_options_keep_state() {
        let mut t = trainer(seeded().with_epochs(1));
        t.fit(&Corpus::from("a b")).unwrap();

        t.options = t.options.clone().with_embedding_size(0);
        assert!(matches!(
            t.fit(&Corpus::from("x y z")),
            Err(WordvecError::InvalidConfig(_))
        ));
        assert!(t.embedding("a").is_ok());
    }
}
