//! File-backed level store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use regdrill_core::generator::check_level;
use regdrill_core::traits::LevelStore;

use crate::error::StoreError;

/// Keeps the next level to attempt as a bare integer in a text file.
///
/// Levels above the maximum are refused on both read and write.
#[derive(Debug, Clone)]
pub struct FileLevelStore {
    path: PathBuf,
}

impl FileLevelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write(&self, level: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        std::fs::write(&self.path, level.to_string()).map_err(|e| self.io_error(e))
    }
}

impl LevelStore for FileLevelStore {
    fn load(&mut self) -> Result<u32> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no level file, starting at level 0");
            self.write(0)?;
            return Ok(0);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let level = contents
            .trim()
            .parse::<u32>()
            .map_err(|_| StoreError::Corrupt {
                path: self.path.clone(),
                contents: contents.trim().to_string(),
            })?;
        check_level(level).with_context(|| format!("level file {}", self.path.display()))
    }

    fn save(&mut self, level: u32) -> Result<()> {
        check_level(level)?;
        self.write(level)?;
        tracing::debug!(path = %self.path.display(), level, "saved level");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regdrill_core::generator::MAX_LEVEL;
    use regdrill_core::DrillError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_created_at_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        let mut store = FileLevelStore::new(&path);
        assert_eq!(store.load().unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state/regdrill/level.txt");
        let mut store = FileLevelStore::new(&path);
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn reads_level_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        std::fs::write(&path, "12\n").unwrap();
        assert_eq!(FileLevelStore::new(&path).load().unwrap(), 12);
    }

    #[test]
    fn save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        let mut store = FileLevelStore::new(&path);
        store.save(3).unwrap();
        store.save(4).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "4");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        std::fs::write(&path, "level five").unwrap();
        let err = FileLevelStore::new(&path).load().unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert!(matches!(store_err, StoreError::Corrupt { contents, .. } if contents == "level five"));
        assert!(err.to_string().contains("level.txt"));
    }

    #[test]
    fn level_above_maximum_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        std::fs::write(&path, "4294967295").unwrap();
        let err = FileLevelStore::new(&path).load().unwrap_err();
        assert_eq!(
            err.downcast_ref::<DrillError>(),
            Some(&DrillError::LevelTooHigh(u32::MAX))
        );
        assert!(format!("{err:#}").contains("level.txt"));

        std::fs::write(&path, MAX_LEVEL.to_string()).unwrap();
        assert_eq!(FileLevelStore::new(&path).load().unwrap(), MAX_LEVEL);
    }

    #[test]
    fn save_above_maximum_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        let mut store = FileLevelStore::new(&path);
        store.save(5).unwrap();
        assert!(store.save(MAX_LEVEL + 1).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "5");
    }

    #[test]
    fn negative_level_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("level.txt");
        std::fs::write(&path, "-1").unwrap();
        assert!(FileLevelStore::new(&path).load().is_err());
    }
}
