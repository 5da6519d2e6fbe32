//! Session token storage
//!
//! A single cell holding the token returned by a successful login. The file
//! store rewrites the whole file on every save, so the last writer wins.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::shared::ClientError;

/// File name used under the platform data directory
pub const TOKEN_FILE_NAME: &str = "session_token";

/// Where a session token lives between runs
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, ClientError>;
    fn save(&self, token: &str) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// `<data_local_dir>/cinerate/session_token`
pub fn default_token_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cinerate").join(TOKEN_FILE_NAME))
}

/// Token kept in a plain file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let token = text.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token kept in memory only; clones share the same cell
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        self.cell
            .lock()
            .map(|cell| cell.clone())
            .map_err(|_| ClientError::storage("token cell poisoned"))
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|_| ClientError::storage("token cell poisoned"))?;
        *cell = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|_| ClientError::storage("token cell poisoned"))?;
        *cell = None;
        Ok(())
    }
}
