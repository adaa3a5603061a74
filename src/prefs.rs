//! Desktop-level preferences backed by a string key/value store.
//!
//! Only the theme and wallpaper are stored. Window layout is never persisted
//! and starts fresh on every launch.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::theme::{Theme, UnknownVariant, Wallpaper};

pub const THEME_KEY: &str = "theme";
pub const WALLPAPER_KEY: &str = "wallpaper";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed preference on line {line}: {content:?}")]
    Malformed { line: usize, content: String },
    #[error(transparent)]
    UnknownValue(#[from] UnknownVariant),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Line-oriented `key=value` file. Blank lines and `#` comments are skipped.
/// Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Load `path`, treating a missing file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => parse_pairs(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let mut out = String::new();
        for (key, value) in &self.values {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

fn parse_pairs(text: &str) -> Result<BTreeMap<String, String>, PrefsError> {
    let mut values = BTreeMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(PrefsError::Malformed {
                line: idx + 1,
                content: raw.to_string(),
            });
        };
        values.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(values)
}

/// Typed view over the preference keys the desktop cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopPreferences {
    pub theme: Theme,
    pub wallpaper: Wallpaper,
}

impl DesktopPreferences {
    /// Read from `store`; absent keys fall back to defaults.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self, PrefsError> {
        let theme = match store.get(THEME_KEY) {
            Some(value) => value.parse()?,
            None => Theme::default(),
        };
        let wallpaper = match store.get(WALLPAPER_KEY) {
            Some(value) => value.parse()?,
            None => Wallpaper::default(),
        };
        Ok(Self { theme, wallpaper })
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<(), PrefsError> {
        store.set(THEME_KEY, self.theme.as_str())?;
        store.set(WALLPAPER_KEY, self.wallpaper.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryPreferences::new();
        let prefs = DesktopPreferences::load(&store).expect("load");
        assert_eq!(prefs, DesktopPreferences::default());
    }

    #[test]
    fn save_then_load_memory() {
        let mut store = MemoryPreferences::new();
        let prefs = DesktopPreferences {
            theme: Theme::Light,
            wallpaper: Wallpaper::Grid,
        };
        prefs.save(&mut store).expect("save");
        assert_eq!(DesktopPreferences::load(&store).expect("load"), prefs);
    }

    #[test]
    fn unknown_value_is_reported() {
        let mut store = MemoryPreferences::new();
        store.set(THEME_KEY, "sepia").expect("set");
        let err = DesktopPreferences::load(&store).unwrap_err();
        assert!(matches!(err, PrefsError::UnknownValue(_)));
    }

    #[test]
    fn parse_skips_comments_and_rejects_garbage() {
        let parsed = parse_pairs("# header\n\ntheme = light\n").expect("parse");
        assert_eq!(parsed.get("theme").map(String::as_str), Some("light"));
        let err = parse_pairs("theme=dark\nnonsense\n").unwrap_err();
        assert!(matches!(err, PrefsError::Malformed { line: 2, .. }));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.conf");
        let mut store = FilePreferences::open(&path).expect("open missing");
        assert!(store.get(THEME_KEY).is_none());
        store.set(THEME_KEY, "light").expect("set");
        let reopened = FilePreferences::open(&path).expect("reopen");
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(reopened.path(), path.as_path());
    }
}
