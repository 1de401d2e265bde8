use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/store.json";
const DEFAULT_PLAN_PATH: &str = "data/training-plan.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Key-value store file holding checklist state and theme.
    pub data_path: PathBuf,
    pub plan_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
        let plan_path = lookup("PLAN_PATH").unwrap_or_else(|| DEFAULT_PLAN_PATH.to_string());

        Self {
            port,
            data_path: PathBuf::from(data_path),
            plan_path: PathBuf::from(plan_path),
        }
    }
}
