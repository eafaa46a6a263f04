//! File-backed win streak
//!
//! The streak is stored as a single decimal integer in a text file so that it
//! survives between runs. A missing file means no streak yet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and writes the win streak at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakStore {
    path: PathBuf,
}

impl StreakStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored streak, 0 if the file does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or `InvalidData` if it
    /// does not contain a non-negative integer.
    pub fn load(&self) -> io::Result<u32> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let streak: u32 = content.trim().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid streak in {}: {e}", self.path.display()),
            )
        })?;
        debug!(path = %self.path.display(), streak, "streak loaded");
        Ok(streak)
    }

    /// Store the streak, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn save(&self, streak: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{streak}\n"))?;
        debug!(path = %self.path.display(), streak, "streak saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("wordle_game_{}", process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_is_zero() {
        let store = StreakStore::new(temp_path("missing/streak.txt"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let store = StreakStore::new(temp_path("saved/streak.txt"));
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
        store.save(0).unwrap();
        assert_eq!(store.load().unwrap(), 0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn garbage_is_invalid_data() {
        let path = temp_path("garbage/streak.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "lots").unwrap();

        let err = StreakStore::new(&path).load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let _ = fs::remove_file(&path);
    }
}
