//! Options collaborator for the selection engine.
//!
//! Parses `oxidized.toml` (or an override path) for the handful of settings
//! selectors consult: which extra codepoints count as word characters, and
//! how wide a tab stop is for indent-object detection. Unknown fields are
//! ignored so the file can evolve without this crate needing to track every
//! editor-shell setting that isn't a selector concern.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
pub struct OptionsFile {
    #[serde(default = "OptionsFile::default_extra_word_chars")]
    pub extra_word_chars: Vec<char>,
    #[serde(default = "OptionsFile::default_tabstop")]
    pub tabstop: usize,
}

impl OptionsFile {
    fn default_extra_word_chars() -> Vec<char> {
        Vec::new()
    }

    const fn default_tabstop() -> usize {
        8
    }
}

impl Default for OptionsFile {
    fn default() -> Self {
        Self {
            extra_word_chars: Self::default_extra_word_chars(),
            tabstop: Self::default_tabstop(),
        }
    }
}

/// Options consulted by the selection engine. A thin, `Copy`-friendly view
/// over [`OptionsFile`] that selectors borrow rather than own.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub extra_word_chars: Vec<char>,
    pub tabstop: usize,
}

impl From<OptionsFile> for Options {
    fn from(file: OptionsFile) -> Self {
        Self {
            extra_word_chars: file.extra_word_chars,
            tabstop: file.tabstop,
        }
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("oxidized.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxidized").join("oxidized.toml");
    }
    PathBuf::from("oxidized.toml")
}

/// Load options from `path`, or from [`discover`] if `None`. A missing or
/// unparseable file falls back to defaults rather than failing the caller.
pub fn load_from(path: Option<PathBuf>) -> Result<Options> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Options::default());
    };
    match toml::from_str::<OptionsFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "options_loaded");
            Ok(file.into())
        }
        Err(err) => {
            info!(target: "config", path = %path.display(), %err, "options_parse_failed_using_defaults");
            Ok(Options::default())
        }
    }
}
