//! Wikiconv Config
//!
//! This crate handles configuration loading and management
//! for wikiconv, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/wikiconv/config.toml`
//! - macOS: `~/Library/Application Support/wikiconv/config.toml`
//! - Windows: `%APPDATA%\wikiconv\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use wikiconv_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod parse;
mod render;
mod rules;

pub use parse::ParseConfig;
pub use render::RenderConfig;
pub use rules::RulesConfig;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wikiconv_core::{Result, WikiconvError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[rules]
Trim         = true
Code         = true
Raw          = true
Preformatted = true
Redirect     = true
Heading      = true
Horiz        = true
Break        = true
Blockquote   = true
List         = true
Deflist      = true
Table        = true
Image        = true
Toc          = true
Center       = true
Paragraph    = true
Url          = true
Anchor       = true
Interwiki    = true
Freelink     = true
Wikilink     = true
Colortext    = true
Strong       = true
Bold         = true
Emphasis     = true
Italic       = true
Underline    = true
Tt           = true
Superscript  = true

[parse]
Camelcase = true

[parse.Sites]
MeatBall = "http://www.usemod.com/cgi-bin/mb.pl?%s"
Advogato = "http://advogato.org/%s"
Wiki     = "http://c2.com/cgi/wiki?%s"

[render]
ImagePrefix = "img/wiki_up/"
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for wikiconv.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Parse rule enable flags
    #[serde(default)]
    pub rules: RulesConfig,

    /// Parse-stage settings
    #[serde(default)]
    pub parse: ParseConfig,

    /// Render-stage settings
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use wikiconv_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[rules]"));
    /// assert!(toml.contains("[render]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    ///
    /// # Example
    ///
    /// ```
    /// use wikiconv_config::Config;
    /// if let Some(path) = Config::config_path() {
    ///     println!("Config path: {}", path.display());
    /// }
    /// ```
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wikiconv")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wikiconv")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikiconv_config::Config;
    /// let path = Config::ensure_config_file().unwrap();
    /// assert!(path.exists());
    /// ```
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| WikiconvError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikiconv_config::Config;
    /// let config = Config::load().unwrap();
    /// ```
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| WikiconvError::Config(format!("Parse error: {}", e)));
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikiconv_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./config.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| WikiconvError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Arguments
    ///
    /// * `override_config` - Optional path to override file or inline TOML string
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikiconv_config::Config;
    ///
    /// // Load with file override
    /// let config = Config::load_with_override(Some("./custom.toml")).unwrap();
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[parse]\nCamelcase = false")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                // It's a file path
                std::fs::read_to_string(override_path)?
            } else {
                // Treat as inline TOML
                override_str.to_string()
            };

            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| WikiconvError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// This is used for applying CLI overrides or secondary config files.
    ///
    /// # Arguments
    ///
    /// * `other` - The config to merge from
    ///
    /// # Example
    ///
    /// ```
    /// use wikiconv_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [parse]
    ///     Camelcase = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.parse.camelcase);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.rules.merge(&other.rules);
        self.parse.merge(&other.parse);
        self.render.merge(&other.render);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| WikiconvError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
