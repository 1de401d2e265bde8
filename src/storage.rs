use crate::errors::{AppError, DataError};
use crate::kv::KvStore;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

pub async fn load_store(path: &Path) -> KvStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                warn!("failed to parse store file {}: {err}", path.display());
                KvStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KvStore::default(),
        Err(err) => {
            error!("failed to read store file {}: {err}", path.display());
            KvStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &KvStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn read_document(path: &Path) -> Result<Vec<u8>, DataError> {
    fs::read(path).await.map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
