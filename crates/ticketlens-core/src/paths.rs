//! Path resolution for cached resources

use std::path::PathBuf;

/// Resolves standard paths for ticketlens data files
#[derive(Debug, Clone)]
pub struct Paths {
    pub cache_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths resolver rooted at the user cache directory
    pub fn new() -> std::io::Result<Self> {
        let base = dirs::cache_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "cache directory not found")
        })?;

        Ok(Self {
            cache_dir: base.join("ticketlens"),
        })
    }

    /// Get the installed stop-word list path
    pub fn stopwords_file(&self) -> PathBuf {
        self.cache_dir.join("stopwords").join("english.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_new() {
        let paths = Paths::new().unwrap();
        assert!(paths.cache_dir.ends_with("ticketlens"));
    }

    #[test]
    fn test_stopwords_file() {
        let paths = Paths {
            cache_dir: PathBuf::from("/tmp/cache/ticketlens"),
        };
        assert!(paths.stopwords_file().ends_with("stopwords/english.txt"));
    }
}
