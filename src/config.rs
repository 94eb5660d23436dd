//! Configuration file support
//!
//! Loads language definitions from `~/.config/hilicat/config.json`
//! (or `%USERPROFILE%\.config\hilicat\config.json` on Windows). Files
//! ending in `.toml` are parsed as TOML, anything else as JSON.
//!
//! Example:
//! ```json
//! {
//!   "languages": {
//!     "go": {
//!       "extensions": ["go"],
//!       "rules": [
//!         { "name": "keywords", "pattern": "\\b(func|package)\\b", "style": "keyword" }
//!       ],
//!       "styles": { "keyword": "cyan" }
//!     }
//!   }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HighlightError, Result};
use crate::syntax::builtin;

/// System-wide fallback location used when no home directory is known
pub const SYSTEM_CONFIG_PATH: &str = "/etc/highlight/config.json";

/// Top-level configuration: language id -> language definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub languages: BTreeMap<String, Language>,
}

/// Highlighting rules for one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// File extensions without the leading dot
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Rules in priority order
    #[serde(default)]
    pub rules: Vec<HighlightRule>,
    /// Rule style name -> style keyword (`"keyword" -> "cyan"`)
    #[serde(default)]
    pub styles: HashMap<String, String>,
}

/// A pattern to match and the style name to apply to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRule {
    pub name: String,
    pub pattern: String,
    pub style: String,
}

impl HighlightRule {
    pub fn new(name: &str, pattern: &str, style: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            style: style.to_string(),
        }
    }
}

impl Language {
    /// Create a language from extensions, rules and `(style, keyword)` pairs
    pub fn new(extensions: &[&str], rules: Vec<HighlightRule>, styles: &[(&str, &str)]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            rules,
            styles: styles
                .iter()
                .map(|(name, keyword)| (name.to_string(), keyword.to_string()))
                .collect(),
        }
    }
}

impl Config {
    /// Configuration with the built-in language definitions
    pub fn builtin() -> Self {
        Self {
            languages: builtin::all_languages()
                .into_iter()
                .map(|(id, lang)| (id.to_string(), lang))
                .collect(),
        }
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
            return PathBuf::from(dir).join("hilicat").join("config.json");
        }

        #[cfg(windows)]
        let home = std::env::var_os("USERPROFILE");
        #[cfg(not(windows))]
        let home = std::env::var_os("HOME");

        match home.filter(|h| !h.is_empty()) {
            Some(home) => PathBuf::from(home)
                .join(".config")
                .join("hilicat")
                .join("config.json"),
            None => PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        if is_toml(path) {
            Self::parse_toml(&contents).map_err(|source| HighlightError::ConfigToml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::parse_json(&contents).map_err(|source| HighlightError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    fn parse_json(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    fn parse_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Write the built-in configuration to `path` if nothing is there yet
    ///
    /// Returns `true` when a file was created.
    pub fn ensure_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        let write_err = |source| HighlightError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let builtin = Self::builtin();
        let contents = if is_toml(path) {
            toml::to_string_pretty(&builtin).map_err(|e| write_err(std::io::Error::other(e)))?
        } else {
            let mut json =
                serde_json::to_string_pretty(&builtin).map_err(|e| write_err(e.into()))?;
            json.push('\n');
            json
        };
        fs::write(path, contents).map_err(write_err)?;

        Ok(true)
    }

    /// Load `path`, creating it with the built-in languages first if needed
    ///
    /// If the file cannot be created the built-in configuration is used
    /// without touching the disk. A file that exists but does not parse is
    /// an error.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        match Self::ensure_exists(path) {
            Ok(true) => log::info!("wrote default configuration to {}", path.display()),
            Ok(false) => {}
            Err(e) => {
                log::warn!("{}, using built-in languages", e);
                return Ok(Self::builtin());
            }
        }

        let config = Self::load(path)?;
        log::debug!(
            "loaded {} languages from {}",
            config.languages.len(),
            path.display()
        );
        Ok(config)
    }

    /// Look up a language by id
    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.get(id)
    }

    /// Detect language id from a file's extension
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.languages
            .iter()
            .find(|(_, lang)| lang.extensions.iter().any(|e| e.to_lowercase() == ext))
            .map(|(id, _)| id.as_str())
    }

    /// Language ids in sorted order
    pub fn language_ids(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(|k| k.as_str())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}
