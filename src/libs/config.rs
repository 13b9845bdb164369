//! Reader for the standard WakaTime configuration file.
//!
//! Editor plugins and the Hackatime setup script both write an INI-style
//! file at `<home>/.wakatime.cfg` with the API credentials in a
//! `[settings]` section. takt only ever reads this file; it is owned by the
//! plugins and must not be rewritten by a diagnostic tool.
//!
//! ## File format
//!
//! ```ini
//! [settings]
//! api_key = waka_12345678-...
//! api_url = https://hackatime.hackclub.com/api/hackatime/v1
//! ```
//!
//! Blank lines and `#`/`;` comments are ignored. The three failure kinds a
//! caller needs to tell apart (file missing, file malformed, `[settings]`
//! section missing) are separate `ConfigError` variants so each can get its
//! own remediation message.
//!
//! Values are returned as found, whitespace-trimmed; blank values are the
//! caller's concern since the doctor and the heartbeat command word those
//! errors differently.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the WakaTime configuration, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".wakatime.cfg";

/// Section holding the API credentials.
pub const SETTINGS_SECTION: &str = "settings";

const API_KEY_SETTING: &str = "api_key";
const API_URL_SETTING: &str = "api_url";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: line {line} is not a section, key or comment: {text}")]
    Malformed { line: usize, text: String },
    #[error("invalid config file: missing settings section")]
    MissingSettings,
}

/// Credentials extracted from `.wakatime.cfg`. Either value may be blank.
#[derive(Debug, Clone, Default)]
pub struct WakaConfig {
    pub api_key: String,
    pub api_url: String,
}

impl WakaConfig {
    /// Reads `<home>/.wakatime.cfg` and extracts the settings section.
    pub fn read(home: &Path) -> Result<Self, ConfigError> {
        let path = home.join(CONFIG_FILE_NAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path));
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Self::parse(&raw)
    }

    /// Parses INI-style text and pulls the credentials out of `[settings]`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let sections = parse_sections(raw)?;
        let settings = sections
            .get(SETTINGS_SECTION)
            .ok_or(ConfigError::MissingSettings)?;

        Ok(Self {
            api_key: settings.get(API_KEY_SETTING).cloned().unwrap_or_default(),
            api_url: settings.get(API_URL_SETTING).cloned().unwrap_or_default(),
        })
    }
}

fn parse_sections(raw: &str) -> Result<HashMap<String, HashMap<String, String>>, ConfigError> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for (idx, text) in raw.lines().enumerate() {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') || text.starts_with(';') {
            continue;
        }

        if let Some(inner) = text.strip_prefix('[') {
            match inner.strip_suffix(']') {
                Some(name) => {
                    let name = name.trim().to_string();
                    sections.entry(name.clone()).or_default();
                    current = Some(name);
                    continue;
                }
                None => {
                    return Err(ConfigError::Malformed {
                        line: idx + 1,
                        text: text.to_string(),
                    });
                }
            }
        }

        // Key/value pairs are only valid inside a section
        match (text.split_once('='), &current) {
            (Some((key, value)), Some(section)) => {
                if let Some(entries) = sections.get_mut(section) {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
            }
            _ => {
                return Err(ConfigError::Malformed {
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    Ok(sections)
}
