//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// stock OZ client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Platform endpoints and client identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Core API base URL (token, channels, collection detail).
    #[serde(default = "default_core_url")]
    pub core_url: String,

    /// Catalog CDN base URL (videos and collections listing).
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// OAuth client id for the password grant.
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// OAuth client secret for the password grant.
    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    /// Organization whose public channels are offered in the menu.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// User agent sent with every API request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            core_url: default_core_url(),
            catalog_url: default_catalog_url(),
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            organization: default_organization(),
            user_agent: default_user_agent(),
        }
    }
}

/// Collection walk options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Maximum number of nested expansions before giving up.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// External player options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Player/recorder executable.
    #[serde(default = "default_player")]
    pub player: String,

    /// Stream quality passed to the player.
    #[serde(default = "default_quality")]
    pub quality: String,

    /// User agent the player presents to the CDN.
    #[serde(default = "default_player_user_agent")]
    pub user_agent: String,

    /// Domain attribute of the playback cookie.
    #[serde(default = "default_cookie_domain")]
    pub cookie_domain: String,

    /// Recording file extension (without dot).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory recordings are written to.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Print the player command instead of running it.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            quality: default_quality(),
            user_agent: default_player_user_agent(),
            cookie_domain: default_cookie_domain(),
            extension: default_extension(),
            output_directory: None,
            dry_run: false,
        }
    }
}

fn default_core_url() -> String {
    "https://core.oz.com".to_string()
}

fn default_catalog_url() -> String {
    "https://ddpk8as099jdd.cloudfront.net".to_string()
}

fn default_client_id() -> String {
    "ClubWebClient".to_string()
}

fn default_client_secret() -> String {
    "PHb7Aw7KZXGMYvgfEz".to_string()
}

fn default_organization() -> String {
    "sjonvarp.365.is".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.99 Safari/537.36".to_string()
}

fn default_player_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/57.0.2987.133 Safari/537.36".to_string()
}

fn default_max_depth() -> usize {
    10
}

fn default_player() -> String {
    "streamlink".to_string()
}

fn default_quality() -> String {
    "best".to_string()
}

fn default_cookie_domain() -> String {
    "oz.com".to_string()
}

fn default_extension() -> String {
    "ts".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.playback
            .output_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_stock_client() {
        let config = Config::default();
        assert_eq!(config.api.core_url, "https://core.oz.com");
        assert_eq!(config.api.client_id, "ClubWebClient");
        assert_eq!(config.navigation.max_depth, 10);
        assert_eq!(config.playback.player, "streamlink");
        assert_eq!(config.playback.quality, "best");
        assert!(!config.playback.dry_run);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\ncore_url = \"http://127.0.0.1:9000\"\n\n[navigation]\nmax_depth = 4"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.core_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.organization, "sjonvarp.365.is");
        assert_eq!(config.navigation.max_depth, 4);
        assert_eq!(config.playback.extension, "ts");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/oz.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[navigation\nmax_depth = ").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(Error::TomlParse(_))
        ));
    }
}
