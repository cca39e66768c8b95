//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, Slot, StateRepository};

/// File-based implementation of StateRepository.
///
/// Each slot is stored as `<slot>.json` under the base directory. Writes go to
/// a temporary file first and are renamed into place, so a crash leaves either
/// the old or the new document.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a repository rooted at `base_dir`, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base_dir.join(format!("{slot}.json"))
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(RepositoryError::Io)?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(raw))
    }

    fn store(&self, slot: Slot, value: &str) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }

    fn exists(&self, slot: Slot) -> bool {
        self.slot_path(slot).exists()
    }
}
