//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::{fmt::Debug, ops::Range};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Const Regex Wrapper Pattern
///
/// Used for the built-in tokenizer patterns, which are known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexWrapperPattern {
    /// This is a pattern for the `regex` crate.
    Basic(&'static str),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(&'static str),
}

impl ConstRegexWrapperPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        RegexWrapperPattern::from(*self).compile()
    }
}

impl From<ConstRegexWrapperPattern> for RegexWrapperPattern {
    fn from(pattern: ConstRegexWrapperPattern) -> Self {
        match pattern {
            ConstRegexWrapperPattern::Basic(p) => RegexWrapperPattern::Basic(p.to_string()),
            ConstRegexWrapperPattern::Fancy(p) => RegexWrapperPattern::Fancy(p.to_string()),
        }
    }
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl From<&str> for RegexWrapperPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexWrapperPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexWrapperPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => Ok(regex::Regex::new(pattern)?.into()),
            Self::Fancy(pattern) => Ok(fancy_regex::Regex::new(pattern)?.into()),
            Self::Adaptive(pattern) => match regex::Regex::new(pattern) {
                Ok(re) => Ok(re.into()),
                Err(_) => Ok(fancy_regex::Regex::new(pattern)?.into()),
            },
        }
    }
}

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate over the byte ranges of all non-overlapping matches.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    pub fn find_ranges<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy {
                regex,
                haystack,
                pos: 0,
            },
        }
    }

    /// Collect the substrings between matches.
    ///
    /// This mirrors `str::split` with a regex separator; adjacent
    /// separators and separators at either end yield empty fragments.
    pub fn split_gaps<'h>(
        &self,
        haystack: &'h str,
    ) -> Vec<&'h str> {
        let mut gaps = Vec::new();
        let mut last = 0;
        for Range { start, end } in self.find_ranges(haystack) {
            gaps.push(&haystack[last..start]);
            last = end;
        }
        gaps.push(&haystack[last..]);
        gaps
    }
}

/// Iterator over match ranges for a [`RegexWrapper`].
pub enum MatchRanges<'r, 'h> {
    /// Matches from `regex`.
    Basic(regex::Matches<'r, 'h>),

    /// Matches from `fancy_regex`.
    Fancy {
        /// The compiled pattern.
        regex: &'r fancy_regex::Regex,

        /// The text being searched.
        haystack: &'h str,

        /// Byte offset where the next search starts.
        pos: usize,
    },
}

/// The next whitespace-delimited run at or after `pos`.
fn next_non_whitespace_run(
    haystack: &str,
    pos: usize,
) -> Option<Range<usize>> {
    let rest = &haystack[pos..];
    let start = pos + rest.find(|c: char| !c.is_whitespace())?;
    let end = haystack[start..]
        .find(char::is_whitespace)
        .map_or(haystack.len(), |off| start + off);
    Some(start..end)
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| m.range()),
            Self::Fancy {
                regex,
                haystack,
                pos,
            } => {
                let (regex, haystack) = (*regex, *haystack);
                if *pos > haystack.len() {
                    return None;
                }
                let range = match regex.find_from_pos(haystack, *pos) {
                    Ok(found) => found?.range(),
                    Err(err) => {
                        // Runaway backtracking; the whole run becomes one match
                        // and scanning resumes after it.
                        log::warn!("regex match aborted at byte {}: {err}", *pos);
                        next_non_whitespace_run(haystack, *pos)?
                    }
                };

                *pos = if range.is_empty() {
                    range.end
                        + haystack[range.end..]
                            .chars()
                            .next()
                            .map_or(1, char::len_utf8)
                } else {
                    range.end
                };
                Some(range)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_prefers_basic() {
        let re = RegexWrapperPattern::from(r"\w+").compile().unwrap();
        assert!(!re.is_fancy());
        assert_eq!(re.as_str(), r"\w+");

        let re = RegexWrapperPattern::from(r"a(?=b)").compile().unwrap();
        assert!(re.is_fancy());
    }

    #[test]
    fn test_basic_rejects_lookahead() {
        let err = RegexWrapperPattern::Basic(r"a(?=b)".to_string())
            .compile()
            .unwrap_err();
        assert!(matches!(err, ErrorWrapper::Basic(_)));
    }

    #[test]
    fn test_find_ranges() {
        let text = "ab abb b";
        for pattern in [
            RegexWrapperPattern::Basic(r"ab+".to_string()),
            RegexWrapperPattern::Fancy(r"ab+".to_string()),
        ] {
            let re = pattern.compile().unwrap();
            let found: Vec<&str> = re.find_ranges(text).map(|r| &text[r]).collect();
            assert_eq!(found, vec!["ab", "abb"]);
        }
    }

    #[test]
    fn test_fancy_resumes_after_backtrack_limit() {
        let re = RegexWrapperPattern::Fancy(r"\S+?(?=\s|$)".to_string())
            .compile()
            .unwrap();

        let blob = "x".repeat(2_000_000);
        let text = format!("head {blob} tail");
        let found: Vec<&str> = re.find_ranges(&text).map(|r| &text[r]).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], "head");
        assert_eq!(found[1].len(), blob.len());
        assert_eq!(found[2], "tail");
    }

    #[test]
    fn test_next_non_whitespace_run() {
        assert_eq!(next_non_whitespace_run("  ab cd", 0), Some(2..4));
        assert_eq!(next_non_whitespace_run("  ab cd", 4), Some(5..7));
        assert_eq!(next_non_whitespace_run("ab  ", 2), None);
    }

    #[test]
    fn test_split_gaps() {
        let re = ConstRegexWrapperPattern::Basic(r"\s+").compile().unwrap();
        assert_eq!(re.split_gaps(" a  b "), vec!["", "a", "b", ""]);
        assert_eq!(re.split_gaps(""), vec![""]);
    }
}
