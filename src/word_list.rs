use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Default location of the word list, relative to the working directory
pub const DEFAULT_WORD_LIST_PATH: &str = "dict.txt";

/// Number of words loaded from the word list by default
pub const DEFAULT_WORD_LIST_SIZE: usize = 200;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("unable to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} has {found} words, expected at least {expected}", path.display())]
    TooShort {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// The pool of words trials are drawn from, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Read the first `size` whitespace separated words from `path`.
    ///
    /// A missing file or one holding fewer than `size` words is an error; extra
    /// words past `size` are ignored.
    pub fn load<P: AsRef<Path>>(path: P, size: usize) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&content, size).map_err(|found| WordListError::TooShort {
            path: path.to_path_buf(),
            expected: size,
            found,
        })?;

        info!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Take the first `size` words of `content`. On a short input the number of
    /// words actually found is returned as the error.
    pub fn parse(content: &str, size: usize) -> Result<Self, usize> {
        let words: Vec<String> = content
            .split_whitespace()
            .take(size)
            .map(str::to_string)
            .collect();

        if words.len() < size || words.is_empty() {
            return Err(words.len());
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn parse_keeps_file_order() {
        let list = WordList::parse("the of\nand  a\tto", 5).unwrap();
        assert_eq!(list.words(), ["the", "of", "and", "a", "to"]);
    }

    #[test]
    fn parse_ignores_words_past_size() {
        let list = WordList::parse("one two three four", 2).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("two"));
        assert!(!list.contains("three"));
    }

    #[test]
    fn parse_reports_short_input() {
        assert_eq!(WordList::parse("one two", 3), Err(2));
        assert_eq!(WordList::parse("", 1), Err(0));
    }

    #[test]
    fn parse_rejects_zero_size() {
        assert_eq!(WordList::parse("one two", 0), Err(0));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta gamma").unwrap();
        writeln!(file, "delta").unwrap();

        let list = WordList::load(file.path(), 4).unwrap();
        assert_eq!(list.words(), ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = WordList::load(dir.path().join("nope.txt"), 200).unwrap_err();
        assert_matches!(err, WordListError::Read { .. });
    }

    #[test]
    fn load_short_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "just three words").unwrap();

        let err = WordList::load(file.path(), 200).unwrap_err();
        assert_matches!(
            err,
            WordListError::TooShort {
                expected: 200,
                found: 3,
                ..
            }
        );
    }

    #[test]
    fn bundled_dictionary_has_enough_words() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_WORD_LIST_PATH);
        let list = WordList::load(path, DEFAULT_WORD_LIST_SIZE).unwrap();
        assert_eq!(list.len(), DEFAULT_WORD_LIST_SIZE);
    }
}
