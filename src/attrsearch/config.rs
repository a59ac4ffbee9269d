use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_REALM: &str = "master";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Keys accepted by [`SearchConfig::get`] and [`SearchConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["server-url", "realm", "page-size", "profile", "messages"];

/// Configuration for attrsearch, stored in `config.json` in the state dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Base URL of the identity server admin API
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Realm whose users are searched
    #[serde(default = "default_realm")]
    pub realm: String,

    /// Maximum users requested per search page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// User-profile document providing the selectable attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,

    /// Message catalog used to resolve `${key}` labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<PathBuf>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_realm() -> String {
    DEFAULT_REALM.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            realm: default_realm(),
            page_size: DEFAULT_PAGE_SIZE,
            profile: None,
            messages: None,
        }
    }
}

impl SearchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server-url" => Some(self.server_url.clone()),
            "realm" => Some(self.realm.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "profile" => Some(display_path(self.profile.as_deref())),
            "messages" => Some(display_path(self.messages.as_deref())),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty value unsets optional paths.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server-url" => {
                parse_server_url(value)?;
                self.server_url = value.trim_end_matches('/').to_string();
            }
            "realm" => {
                if value.is_empty() {
                    return Err(SearchError::Config("realm cannot be empty".into()));
                }
                self.realm = value.to_string();
            }
            "page-size" => {
                let size: u32 = value.parse().map_err(|_| {
                    SearchError::Config(format!("page-size must be a number, got '{}'", value))
                })?;
                if size == 0 {
                    return Err(SearchError::Config("page-size must be at least 1".into()));
                }
                self.page_size = size;
            }
            "profile" => self.profile = optional_path(value),
            "messages" => self.messages = optional_path(value),
            _ => {
                return Err(SearchError::Config(format!(
                    "unknown config key: {} (expected one of {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Parses a server URL that can take the admin API path appended to it.
pub fn parse_server_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| SearchError::Config(format!("invalid server-url '{}': {}", value, e)))?;
    if url.cannot_be_a_base() {
        return Err(SearchError::Config(format!(
            "server-url '{}' cannot be a base",
            value
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(SearchError::Config(format!(
            "server-url '{}' must not carry a query or fragment",
            value
        )));
    }
    Ok(url)
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.server_url, "http://localhost:8080");
        assert_eq!(config.realm, "master");
        assert_eq!(config.page_size, 10);
        assert!(config.profile.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = SearchConfig::default();
        config.set("realm", "acme").unwrap();
        config.set("profile", "/etc/profile.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = SearchConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.realm, "acme");
        assert_eq!(loaded.profile, Some(PathBuf::from("/etc/profile.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"realm":"acme"}"#).unwrap();

        let loaded = SearchConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.realm, "acme");
        assert_eq!(loaded.page_size, 10);
        assert_eq!(loaded.server_url, "http://localhost:8080");
    }

    #[test]
    fn test_set_server_url_trims_trailing_slash() {
        let mut config = SearchConfig::default();
        config.set("server-url", "https://id.example.com/").unwrap();
        assert_eq!(config.get("server-url").unwrap(), "https://id.example.com");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = SearchConfig::default();
        assert!(config.set("server-url", "not a url").is_err());
        assert!(config.set("server-url", "localhost:8080").is_err());
        assert!(config.set("server-url", "mailto:admin@example.com").is_err());
        assert!(config.set("server-url", "http://h/?x=1").is_err());
        assert!(config.set("server-url", "http://h/#f").is_err());
        assert!(config.set("page-size", "ten").is_err());
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("realm", "").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_empty_value_unsets_path() {
        let mut config = SearchConfig::default();
        config.set("messages", "/tmp/m.json").unwrap();
        config.set("messages", "").unwrap();
        assert!(config.messages.is_none());
        assert_eq!(config.get("messages").unwrap(), "");
    }

    #[test]
    fn test_unknown_key_has_no_value() {
        assert!(SearchConfig::default().get("colour").is_none());
    }
}
