//! # Skip-Gram Training Pairs
//!
//! A pair is ``(center, context)``, both vocabulary positions. Every
//! position ``i`` of a sequence is paired with each position ``j`` in
//! ``[i - window, i) ∪ (i, i + window]`` clipped to the sequence bounds.
//! There are no self-pairs.

use ndarray::Array2;

/// A ``(center, context)`` pair of vocabulary positions.
pub type TrainingPair = (usize, usize);

/// Append the window pairs over `sequence` to `pairs`.
///
/// ## Arguments
/// * `sequence` - Vocabulary positions, in window order.
/// * `window_size` - The window radius.
/// * `pairs` - The output buffer.
pub fn window_pairs_into(
    sequence: &[usize],
    window_size: usize,
    pairs: &mut Vec<TrainingPair>,
) {
    let len = sequence.len();
    for (i, &center) in sequence.iter().enumerate() {
        let lo = i.saturating_sub(window_size);
        let hi = len.min(i.saturating_add(window_size).saturating_add(1));
        pairs.extend(
            (lo..hi)
                .filter(|&j| j != i)
                .map(|j| (center, sequence[j])),
        );
    }
}

/// Pairs over the sorted vocabulary order ``0..vocab_size``.
pub fn vocabulary_order_pairs(
    vocab_size: usize,
    window_size: usize,
) -> Vec<TrainingPair> {
    let sequence: Vec<usize> = (0..vocab_size).collect();
    let mut pairs = Vec::new();
    window_pairs_into(&sequence, window_size, &mut pairs);
    pairs
}

/// Pairs over each sentence, windows never crossing sentence bounds.
///
/// ## Arguments
/// * `sentences` - Per-sentence vocabulary position sequences.
/// * `window_size` - The window radius.
pub fn sentence_pairs<S: AsRef<[usize]>>(
    sentences: &[S],
    window_size: usize,
) -> Vec<TrainingPair> {
    let mut pairs = Vec::new();
    for sentence in sentences {
        window_pairs_into(sentence.as_ref(), window_size, &mut pairs);
    }
    pairs
}

/// Expand pairs into one-hot ``(X, Y)`` matrices, each ``(pairs x V)``.
pub fn one_hot_pairs(
    pairs: &[TrainingPair],
    vocab_size: usize,
) -> (Array2<f64>, Array2<f64>) {
    let mut x = Array2::zeros((pairs.len(), vocab_size));
    let mut y = Array2::zeros((pairs.len(), vocab_size));
    for (row, &(center, context)) in pairs.iter().enumerate() {
        x[[row, center]] = 1.0;
        y[[row, context]] = 1.0;
    }
    (x, y)
}
