//! # Token Classification

use once_cell::sync::Lazy;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::regex::{ConstRegexWrapperPattern, RegexWrapper};

/// Numbers, optionally signed, with ``,``/``.``/``-`` grouping.
const NUMERIC_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Basic(r"^-?[.,]?\d[\d,.-]*\.?$");

static NUMERIC_RE: Lazy<RegexWrapper> = Lazy::new(|| {
    NUMERIC_PATTERN
        .compile()
        .expect("NUMERIC_PATTERN is a valid regex")
});

/// The kind of a token, derived from its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    /// Anything that is neither numeric nor pure punctuation.
    Word,

    /// A number such as ``42``, ``-3.5`` or ``1,000``.
    Numeric,

    /// Punctuation, symbols and separators only.
    Punct,
}

impl TokenKind {
    /// Classify a token.
    ///
    /// The empty token is [`TokenKind::Punct`].
    pub fn classify(token: &str) -> Self {
        if token.chars().all(is_punct_char) {
            Self::Punct
        } else if NUMERIC_RE.find_ranges(token).next().is_some() {
            Self::Numeric
        } else {
            Self::Word
        }
    }
}

/// Is this token made only of punctuation (or empty)?
pub fn is_punct(token: &str) -> bool {
    TokenKind::classify(token) == TokenKind::Punct
}

/// Does this token close a sentence (``.``, ``?``, ``!`` or ``;``)?
pub fn is_sentence_final(token: &str) -> bool {
    token.ends_with(['.', '?', '!', ';'])
}

fn is_punct_char(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
            | SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TokenKind::classify("hello"), TokenKind::Word);
        assert_eq!(TokenKind::classify("e-mail"), TokenKind::Word);
        assert_eq!(TokenKind::classify("$5.4"), TokenKind::Word);

        assert_eq!(TokenKind::classify("42"), TokenKind::Numeric);
        assert_eq!(TokenKind::classify("-3.5"), TokenKind::Numeric);
        assert_eq!(TokenKind::classify("1,000"), TokenKind::Numeric);
        assert_eq!(TokenKind::classify(".5"), TokenKind::Numeric);

        for p in ["", ".", ",", "...", "--", "$", "?!", ". . .", "«", "_"] {
            assert_eq!(TokenKind::classify(p), TokenKind::Punct, "{p:?}");
        }
        assert!(is_punct(";"));
        assert!(!is_punct("a;"));
    }

    #[test]
    fn test_is_sentence_final() {
        assert!(is_sentence_final("end."));
        assert!(is_sentence_final("what?"));
        assert!(is_sentence_final("!"));
        assert!(is_sentence_final("so;"));
        assert!(!is_sentence_final("end"));
        assert!(!is_sentence_final("a:"));
        assert!(!is_sentence_final(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Numeric.to_string(), "numeric");
    }
}
