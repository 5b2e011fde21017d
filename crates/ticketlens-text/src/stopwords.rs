//! English stop-word store with a one-time cache install

use std::collections::HashSet;
use thiserror::Error;
use ticketlens_core::Paths;

const EMBEDDED_ENGLISH: &str = include_str!("../data/english.txt");

#[derive(Debug, Error)]
pub enum StopwordError {
    #[error("failed to install stop-word list at {path}")]
    Install {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stop-word list at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// In-memory stop-word set, loaded once and handed to the tokenizer
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Install the embedded list into the cache directory if absent, then
    /// load it. Repeat calls are safe; the install step is a no-op once the
    /// file exists.
    pub fn ensure(paths: &Paths) -> Result<Self, StopwordError> {
        let target = paths.stopwords_file();

        if !target.exists() {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|source| StopwordError::Install {
                    path: target.display().to_string(),
                    source,
                })?;
            }
            std::fs::write(&target, EMBEDDED_ENGLISH).map_err(|source| StopwordError::Install {
                path: target.display().to_string(),
                source,
            })?;
            tracing::debug!(path = %target.display(), "installed stop-word list");
        }

        let content = std::fs::read_to_string(&target).map_err(|source| StopwordError::Read {
            path: target.display().to_string(),
            source,
        })?;

        Ok(Self::from_list(&content))
    }

    /// Load directly from the embedded copy without touching the filesystem
    pub fn embedded() -> Self {
        Self::from_list(EMBEDDED_ENGLISH)
    }

    fn from_list(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_paths(temp: &tempfile::TempDir) -> Paths {
        Paths {
            cache_dir: temp.path().join("ticketlens"),
        }
    }

    #[test]
    fn test_embedded_list_loads() {
        let stopwords = Stopwords::embedded();
        assert!(!stopwords.is_empty());
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("account"));
    }

    #[test]
    fn test_ensure_installs_once() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = temp_paths(&temp);

        assert!(!paths.stopwords_file().exists());
        let first = Stopwords::ensure(&paths).unwrap();
        assert!(paths.stopwords_file().exists());
        assert!(first.contains("the"));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = temp_paths(&temp);

        let first = Stopwords::ensure(&paths).unwrap();
        let second = Stopwords::ensure(&paths).unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_ensure_reads_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = temp_paths(&temp);

        let target = paths.stopwords_file();
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "foo\nbar\n").unwrap();

        let stopwords = Stopwords::ensure(&paths).unwrap();
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("foo"));
        assert!(!stopwords.contains("the"));
    }
}
