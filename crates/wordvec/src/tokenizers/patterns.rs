//! # Built-in Tokenizer Patterns

use crate::regex::ConstRegexWrapperPattern;

/// Runs of whitespace; used as a *gap* pattern.
pub const WHITESPACE_GAP_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Basic(r"\s+");

/// Word-character runs, or runs of anything else that isn't whitespace.
///
/// ``"doughnut cost $10.48"`` → ``["doughnut", "cost", "$", "10", ".", "48"]``.
pub const NAIVE_PUNCT_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Basic(r"\w+|[^\w\s]+");

/// Multi-char punctuation: ``--``, ``...``, and spaced ellipses ``. . .``.
macro_rules! multi_char_punct {
    () => {
        r"(?:-{2,}|\.{2,}|(?:\.\s){2,}\.)"
    };
}

/// Characters which may not start a word token.
macro_rules! word_start {
    () => {
        r#"[^("`{\[:;&#*@)}\]\-,]"#
    };
}

/// Characters which end a word token and never join one.
///
/// The sentence enders ``! ? ; :`` are included; ``.`` is not,
/// so decimals like ``$10.48`` and abbreviations stay whole.
macro_rules! non_word {
    () => {
        r#"[)";}\]*:@'({\[!?]"#
    };
}

/// Punctuation-aware word pattern.
///
/// In priority order, matches:
/// 1. a multi-char punctuation run;
/// 2. a lazy run of non-whitespace, starting with an allowed word-start char,
///    ending before whitespace, end of text, a non-word char, a multi-char run,
///    or a word-final comma;
/// 3. any other single non-whitespace char.
pub const PUNCT_AWARE_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(concat!(
    "(?:",
    multi_char_punct!(),
    "|(?=",
    word_start!(),
    r")\S+?(?=\s|$|",
    non_word!(),
    "|",
    multi_char_punct!(),
    "|,(?=$|\\s|",
    non_word!(),
    "|",
    multi_char_punct!(),
    r"))|\S)",
));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(!WHITESPACE_GAP_PATTERN.compile().unwrap().is_fancy());
        assert!(!NAIVE_PUNCT_PATTERN.compile().unwrap().is_fancy());
        assert!(PUNCT_AWARE_PATTERN.compile().unwrap().is_fancy());
    }

    #[test]
    fn test_punct_aware_pattern_text() {
        assert_eq!(
            PUNCT_AWARE_PATTERN.as_str(),
            concat!(
                r#"(?:(?:-{2,}|\.{2,}|(?:\.\s){2,}\.)|(?=[^("`{\[:;&#*@)}\]\-,])\S+?"#,
                r#"(?=\s|$|[)";}\]*:@'({\[!?]|(?:-{2,}|\.{2,}|(?:\.\s){2,}\.)|"#,
                r#",(?=$|\s|[)";}\]*:@'({\[!?]|(?:-{2,}|\.{2,}|(?:\.\s){2,}\.)))|\S)"#,
            )
        );
    }
}
