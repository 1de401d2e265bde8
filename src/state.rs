use crate::kv::KvStore;
use crate::models::Day;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// The session: the immutable plan plus the persisted store, built once at
/// startup and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub plan: Arc<Vec<Day>>,
    pub store: Arc<Mutex<KvStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, plan: Vec<Day>, store: KvStore) -> Self {
        Self {
            data_path,
            plan: Arc::new(plan),
            store: Arc::new(Mutex::new(store)),
        }
    }
}
