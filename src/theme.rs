use crate::kv::KvStore;
use serde::Serialize;

pub const THEME_KEY: &str = "theme_mode";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Dark unless light was explicitly chosen.
pub fn load_theme(kv: &KvStore) -> ThemeMode {
    match kv.get(THEME_KEY) {
        Some("light") => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

pub fn toggle_theme(kv: &mut KvStore) -> ThemeMode {
    let next = load_theme(kv).flipped();
    kv.set(THEME_KEY, next.as_str());
    next
}
