use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Result, StorageBackend};
use crate::errors::LedgerError;

/// File-per-document JSON storage.
///
/// Each key maps to `<root>/<key>.json`. Writes go through a temporary file
/// followed by a rename so a crash mid-write never truncates an existing
/// document.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens storage rooted at `root`, or at the platform data directory
    /// under `planr` when `root` is `None`. Creates the directory if needed.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root()?,
        };
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

fn default_root() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("planr"))
        .ok_or_else(|| LedgerError::Persistence("no platform data directory".into()))
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl StorageBackend for JsonStorage {
    fn save(&self, key: &str, json: &str) -> Result<()> {
        let path = self.document_path(key);
        write_atomic(&path, json)?;
        debug!(key, path = %path.display(), "document saved");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.document_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
