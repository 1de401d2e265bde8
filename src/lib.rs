pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod kv;
pub mod models;
pub mod plan;
pub mod progress;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tips;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_store, persist_store};
