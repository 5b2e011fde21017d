use ticketlens_core::Paths;
use ticketlens_text::Stopwords;

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let stopwords = Stopwords::ensure(&paths)?;

    println!(
        "✓ Stop-word list installed at {}",
        paths.stopwords_file().display()
    );
    println!("  {} words loaded", stopwords.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_setup_installs_stopword_list() {
        let original_home = std::env::var("HOME").ok();
        let original_xdg = std::env::var("XDG_CACHE_HOME").ok();
        let temp = tempfile::TempDir::new().unwrap();

        // Point both cache roots at the temp dir so the resolved location
        // lands under it on every platform
        unsafe {
            std::env::set_var("HOME", temp.path());
            std::env::set_var("XDG_CACHE_HOME", temp.path().join("cache"));
        }

        let result = run();
        let installed = Paths::new().map(|p| p.stopwords_file().exists());

        unsafe {
            match original_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            match original_xdg {
                Some(v) => std::env::set_var("XDG_CACHE_HOME", v),
                None => std::env::remove_var("XDG_CACHE_HOME"),
            }
        }

        assert!(result.is_ok());
        assert!(installed.unwrap());
    }

    #[test]
    #[serial]
    fn test_setup_is_repeatable() {
        let original_home = std::env::var("HOME").ok();
        let original_xdg = std::env::var("XDG_CACHE_HOME").ok();
        let temp = tempfile::TempDir::new().unwrap();
        unsafe {
            std::env::set_var("HOME", temp.path());
            std::env::set_var("XDG_CACHE_HOME", temp.path().join("cache"));
        }

        let first = run();
        let second = run();

        unsafe {
            match original_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            match original_xdg {
                Some(v) => std::env::set_var("XDG_CACHE_HOME", v),
                None => std::env::remove_var("XDG_CACHE_HOME"),
            }
        }

        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
