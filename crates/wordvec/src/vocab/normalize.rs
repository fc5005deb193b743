//! # Token Normalization
//!
//! The same per-token normalization is applied when fitting and when
//! transforming, so that ``"End."`` at the close of one sentence and
//! ``"end"`` elsewhere land on the same vocabulary entry.

use crate::tokenizers::{TextTokenizer, is_punct};

/// Normalize one token.
///
/// Lower-cases the token; the last token of a sentence also loses
/// one trailing ``.``.
///
/// ## Arguments
/// * `token` - The raw token.
/// * `is_last` - Is this the final token of its sentence?
pub fn normalize_token(
    token: &str,
    is_last: bool,
) -> String {
    let mut token = token.to_lowercase();
    if is_last && token.ends_with('.') {
        token.pop();
    }
    token
}

/// Tokenize a sentence, normalize each token, and drop punctuation.
///
/// ## Arguments
/// * `tokenizer` - The tokenizer.
/// * `sentence` - The sentence text.
///
/// ## Returns
/// The normalized, non-punctuation tokens, in sentence order.
pub fn normalized_tokens(
    tokenizer: &dyn TextTokenizer,
    sentence: &str,
) -> Vec<String> {
    let tokens = tokenizer.tokenize(sentence);
    let last = tokens.len().saturating_sub(1);
    tokens
        .iter()
        .enumerate()
        .map(|(idx, tok)| normalize_token(tok, idx == last))
        .filter(|tok| !is_punct(tok))
        .collect()
}
