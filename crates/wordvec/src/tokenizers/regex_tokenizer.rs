//! # Regex Tokenizer

use crate::{
    errors::WVResult,
    regex::{RegexWrapper, RegexWrapperPattern},
    tokenizers::TextTokenizer,
};

/// Options for [`RegexTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegexTokenizerOptions {
    /// Does the pattern match the *separators* between tokens,
    /// rather than the tokens themselves?
    pub find_gaps: bool,

    /// Drop empty fragments when splitting on gaps.
    pub remove_empty: bool,
}

impl Default for RegexTokenizerOptions {
    fn default() -> Self {
        Self {
            find_gaps: false,
            remove_empty: true,
        }
    }
}

impl RegexTokenizerOptions {
    /// Set whether the pattern matches separators.
    pub fn with_find_gaps(
        self,
        find_gaps: bool,
    ) -> Self {
        Self { find_gaps, ..self }
    }

    /// Set whether empty gap fragments are dropped.
    pub fn with_remove_empty(
        self,
        remove_empty: bool,
    ) -> Self {
        Self {
            remove_empty,
            ..self
        }
    }
}

/// Tokenizer driven by a single regex.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: RegexWrapper,
    options: RegexTokenizerOptions,
}

impl RegexTokenizer {
    /// Compile a new tokenizer.
    ///
    /// ## Arguments
    /// * `pattern` - The token (or gap) pattern.
    /// * `options` - Matching options.
    ///
    /// ## Returns
    /// The tokenizer, or [`crate::WordvecError::InvalidPattern`].
    pub fn new<P>(
        pattern: P,
        options: RegexTokenizerOptions,
    ) -> WVResult<Self>
    where
        P: Into<RegexWrapperPattern>,
    {
        let regex = pattern.into().compile()?;
        Ok(Self { regex, options })
    }

    /// The compiled regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// The matching options.
    pub fn options(&self) -> &RegexTokenizerOptions {
        &self.options
    }
}

impl TextTokenizer for RegexTokenizer {
    fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        if self.options.find_gaps {
            let mut tokens = self.regex.split_gaps(text);
            if self.options.remove_empty {
                tokens.retain(|t| !t.is_empty());
            }
            tokens
        } else {
            self.regex.find_ranges(text).map(|r| &text[r]).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::TokenizerKind;

    fn tokens(
        kind: TokenizerKind,
        text: &str,
    ) -> Vec<String> {
        kind.build()
            .unwrap()
            .tokenize(text)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_whitespace() {
        let kind = TokenizerKind::Whitespace;
        assert_eq!(tokens(kind, "Lorem ipsum  dolor"), ["Lorem", "ipsum", "dolor"]);
        assert_eq!(tokens(kind, "string\tto\n tokenize"), ["string", "to", "tokenize"]);
        assert_eq!(tokens(kind, "       Lorem ipsum"), ["Lorem", "ipsum"]);
        assert_eq!(tokens(kind, "Lorem ipsum        "), ["Lorem", "ipsum"]);
        assert_eq!(tokens(kind, "L O R E M"), ["L", "O", "R", "E", "M"]);
        assert_eq!(tokens(kind, ",,,?.!"), [",,,?.!"]);
        assert!(tokens(kind, "").is_empty());
        assert!(tokens(kind, " ").is_empty());
        assert!(tokens(kind, "                  ").is_empty());
    }

    #[test]
    fn test_keep_empty_gaps() {
        let tokenizer = RegexTokenizer::new(
            r"\s",
            RegexTokenizerOptions::default()
                .with_find_gaps(true)
                .with_remove_empty(false),
        )
        .unwrap();
        assert_eq!(tokenizer.tokenize("a  b"), vec!["a", "", "b"]);
        assert!(!tokenizer.options().remove_empty);
    }

    #[test]
    fn test_naive_punct() {
        let kind = TokenizerKind::NaivePunct;
        assert_eq!(
            tokens(kind, "doughnut cost $10.48"),
            ["doughnut", "cost", "$", "10", ".", "48"]
        );
        assert_eq!(
            tokens(kind, "Burger costs $5.4 dollars"),
            ["Burger", "costs", "$", "5", ".", "4", "dollars"]
        );
        assert_eq!(
            tokens(kind, "Lorem ipsum dolor sit amet, consectetur adipiscing elit."),
            [
                "Lorem",
                "ipsum",
                "dolor",
                "sit",
                "amet",
                ",",
                "consectetur",
                "adipiscing",
                "elit",
                "."
            ]
        );
        assert_eq!(tokens(kind, ",?.,;"), [",?.,;"]);
        assert_eq!(tokens(kind, "wait..."), ["wait", "..."]);
        assert_eq!(tokens(kind, "Lorem ipsum,      "), ["Lorem", "ipsum", ","]);
        assert_eq!(
            tokens(kind, "L, O, R, E, M,"),
            ["L", ",", "O", ",", "R", ",", "E", ",", "M", ","]
        );
        assert_eq!(tokens(kind, "L"), ["L"]);
        assert!(tokens(kind, "").is_empty());
        assert!(tokens(kind, "                ").is_empty());
    }

    #[test]
    fn test_punct_aware_long_run() {
        let tokenizer = TokenizerKind::Punct.build().unwrap();

        let blob = "a".repeat(2_000_000);
        let text = format!("{blob} tail, end.");
        let found = tokenizer.tokenize(&text);
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].len(), blob.len());
        assert_eq!(&found[1..], ["tail", ",", "end."]);
    }

    #[test]
    fn test_punct_aware() {
        let kind = TokenizerKind::Punct;
        assert_eq!(
            tokens(kind, "Burger costs $5.4 dollars"),
            ["Burger", "costs", "$5.4", "dollars"]
        );
        assert_eq!(tokens(kind, "Hello, world."), ["Hello", ",", "world."]);
        assert_eq!(
            tokens(kind, "doughnut cost $10.48 -- or so..."),
            ["doughnut", "cost", "$10.48", "--", "or", "so", "..."]
        );
        assert_eq!(
            tokens(kind, "Wait... what?!"),
            ["Wait", "...", "what", "?", "!"]
        );
        assert_eq!(
            tokens(kind, r#"(quoted) "text": yes; no"#),
            ["(", "quoted", ")", "\"", "text", "\"", ":", "yes", ";", "no"]
        );
        assert_eq!(tokens(kind, "a . . . b"), ["a", ". . .", "b"]);
        assert_eq!(tokens(kind, "it's end."), ["it", "'s", "end."]);
        assert_eq!(
            tokens(kind, "e-mail foo@bar.com #tag"),
            ["e-mail", "foo", "@", "bar.com", "#", "tag"]
        );
        assert_eq!(
            tokens(kind, "L, O, R, E, M,"),
            ["L", ",", "O", ",", "R", ",", "E", ",", "M", ","]
        );
        assert!(tokens(kind, "").is_empty());
        assert!(tokens(kind, " \t\n").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::new(r"(unclosed", RegexTokenizerOptions::default()).unwrap_err();
        assert!(matches!(err, crate::WordvecError::InvalidPattern(_)));
    }
}
