//! Directory-backed [`SessionStorage`]: one `<key>.json` file per key.

use crate::error::{ClientError, Result as ClientErrorResult};
use crate::session::session_storage::{SessionStorage, check_key};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> ClientErrorResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> ClientErrorResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::storage(path, e)),
        }
    }

    /// Temp file, fsync, then rename over the old record so a crash
    /// mid-write never leaves a truncated file behind.
    fn save(&self, key: &str, value: &str) -> ClientErrorResult<()> {
        let final_path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| ClientError::storage(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| ClientError::storage(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| ClientError::storage(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| ClientError::storage(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::storage(final_path.clone(), e)
        })?;

        debug!("Saved {key} to {}", final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientErrorResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::storage(path, e)),
        }
    }
}
