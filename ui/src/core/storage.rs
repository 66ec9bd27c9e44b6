//! Local persistence of visitor preferences (language and theme).
//!
//! Browser builds use `localStorage`; native builds keep a small JSON file in
//! the platform data directory. Persistence is best-effort: callers log
//! failures and carry on with in-memory state.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::i18n::LanguageCode;

/// `localStorage` key (web) and file stem (native).
pub const PREFERENCES_KEY: &str = "korean-center.preferences";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
    #[error("browser storage error: {0}")]
    Browser(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("stored preferences are malformed: {0}")]
    Format(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Language the visitor picked; `None` until they pick one.
    #[serde(default, deserialize_with = "lenient_language")]
    pub language: Option<LanguageCode>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

// A code this build no longer knows reads as "not chosen yet".
fn lenient_language<'de, D>(deserializer: D) -> Result<Option<LanguageCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|code| code.parse().ok()))
}

pub fn load_preferences() -> Result<Option<Preferences>, StorageError> {
    backend::read()?
        .map(|raw| Preferences::from_json(&raw))
        .transpose()
}

pub fn save_preferences(preferences: &Preferences) -> Result<(), StorageError> {
    backend::write(&preferences.to_json()?)
}

/// Load, modify and store preferences in one step.
pub fn update_preferences(
    apply: impl FnOnce(&mut Preferences),
) -> Result<Preferences, StorageError> {
    let mut preferences = load_preferences().unwrap_or_else(|err| {
        tracing::warn!(%err, "discarding unreadable preferences");
        None
    })
    .unwrap_or_default();
    apply(&mut preferences);
    save_preferences(&preferences)?;
    Ok(preferences)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{StorageError, PREFERENCES_KEY};

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable("no window"))?
            .local_storage()
            .map_err(|err| StorageError::Browser(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable("localStorage is disabled"))
    }

    pub fn read() -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(PREFERENCES_KEY)
            .map_err(|err| StorageError::Browser(format!("{err:?}")))
    }

    pub fn write(contents: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(PREFERENCES_KEY, contents)
            .map_err(|err| StorageError::Browser(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{read_file, write_file, StorageError, PREFERENCES_KEY};

    fn preferences_path() -> Result<PathBuf, StorageError> {
        ProjectDirs::from("uz", "Korean Center", "korean-center")
            .map(|dirs| dirs.data_dir().join(format!("{PREFERENCES_KEY}.json")))
            .ok_or(StorageError::Unavailable("no home directory"))
    }

    pub fn read() -> Result<Option<String>, StorageError> {
        read_file(&preferences_path()?)
    }

    pub fn write(contents: &str) -> Result<(), StorageError> {
        write_file(&preferences_path()?, contents)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn read_file(path: &std::path::Path) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn write_file(path: &std::path::Path, contents: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
