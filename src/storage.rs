//! Key-value persistence: one JSON document per key inside a data directory.

use serde::{de::DeserializeOwned, Serialize};
use std::{env, path::PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the collection stored under `key`.
    ///
    /// A missing record is a first run and yields an empty collection. Any
    /// other read or parse failure is logged and also yields an empty
    /// collection; the caller never sees an error.
    pub async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.key_path(key);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(err) => {
                    error!(key, "failed to parse stored collection, starting empty: {err}");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                error!(key, "failed to read stored collection, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Replaces the whole record under `key` with `items`.
    pub async fn persist_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> Result<(), StorageError> {
        let payload = serde_json::to_vec_pretty(items).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        let path = self.key_path(key);
        fs::write(&path, payload)
            .await
            .map_err(|source| StorageError::Write { path, source })?;
        Ok(())
    }
}
