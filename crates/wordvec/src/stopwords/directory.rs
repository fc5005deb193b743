//! # Directory Stopwords

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    WordvecError,
    errors::WVResult,
    stopwords::{StopwordSet, StopwordSource},
};

/// Stopwords read from ``<root>/<language>``; one word per line.
///
/// This is the layout of the NLTK ``corpora/stopwords`` directory.
/// Blank lines and surrounding whitespace are ignored.
#[derive(Debug, Clone)]
pub struct DirectoryStopwords {
    root: PathBuf,
}

impl DirectoryStopwords {
    /// Read stopword files from `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The directory holding the per-language files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn language_path(
        &self,
        language: &str,
    ) -> WVResult<PathBuf> {
        let valid = !language.is_empty()
            && language
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(WordvecError::StopwordsUnavailable {
                language: language.to_string(),
                reason: "not a valid language name".to_string(),
            });
        }
        Ok(self.root.join(language))
    }
}

impl StopwordSource for DirectoryStopwords {
    fn get_stopwords(
        &self,
        language: &str,
    ) -> WVResult<Arc<StopwordSet>> {
        let path = self.language_path(language)?;
        let text =
            std::fs::read_to_string(&path).map_err(|err| WordvecError::StopwordsUnavailable {
                language: language.to_string(),
                reason: format!("{}: {err}", path.display()),
            })?;

        let words: StopwordSet = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        log::debug!("loaded {} stopwords from {}", words.len(), path.display());
        Ok(Arc::new(words))
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_read_language_file() {
        let dir = TempDir::new("wordvec_stopwords").unwrap();
        std::fs::write(dir.path().join("english"), "the\n a \n\nand\n").unwrap();

        let source = DirectoryStopwords::new(dir.path());
        assert_eq!(source.root(), dir.path());

        let words = source.get_stopwords("english").unwrap();
        let mut words: Vec<&str> = words.iter().map(String::as_str).collect();
        words.sort();
        assert_eq!(words, vec!["a", "and", "the"]);
    }

    #[test]
    fn test_missing_language() {
        let dir = TempDir::new("wordvec_stopwords").unwrap();
        let source = DirectoryStopwords::new(dir.path());

        for language in ["german", "../english", ""] {
            assert!(matches!(
                source.get_stopwords(language),
                Err(WordvecError::StopwordsUnavailable { .. })
            ));
        }
    }
}
