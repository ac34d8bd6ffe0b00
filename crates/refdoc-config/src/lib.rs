//! Configuration management for refdoc.
//!
//! Parses `refdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support `${VAR}` (errors if unset) and `${VAR:-default}`.
//! Bare `$VAR` is left as is. Expanded fields:
//! - `input.symbols`
//! - `input.documents`
//! - `output.dir`
//! - `assets.dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the symbol graph file.
    pub symbols: Option<PathBuf>,
    /// Override the document glob patterns.
    pub documents: Option<Vec<String>>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the bare HTML flag.
    pub bare_html: Option<bool>,
    /// Override the static asset directory.
    pub assets_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "refdoc.toml";

const DEFAULT_OUTPUT_DIR: &str = "site";
const DEFAULT_ASSETS_DIR: &str = "bootstrap";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration (paths are relative strings from TOML).
    input: InputConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Static asset configuration (paths are relative strings from TOML).
    assets: AssetsConfigRaw,

    /// Resolved input configuration (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Resolved asset configuration (set after loading).
    #[serde(skip)]
    pub assets_resolved: AssetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    symbols: Option<String>,
    documents: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    bare_html: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    dir: Option<String>,
}

/// Resolved input configuration with absolute paths.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Symbol graph JSON file; no API pages are generated when unset.
    pub symbols: Option<PathBuf>,
    /// Glob patterns selecting markdown documents.
    pub documents: Vec<String>,
}

/// Resolved output configuration.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory the generated site is written to.
    pub dir: PathBuf,
    /// Emit page content only, without the HTML template.
    pub bare_html: bool,
}

/// Resolved static asset configuration.
#[derive(Debug, Default)]
pub struct AssetsConfig {
    /// Directory copied verbatim into the output when it exists.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `refdoc.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(symbols) = &settings.symbols {
            self.input_resolved.symbols = Some(symbols.clone());
        }
        if let Some(documents) = &settings.documents {
            self.input_resolved.documents.clone_from(documents);
        }
        if let Some(dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(dir);
        }
        if let Some(bare_html) = settings.bare_html {
            self.output_resolved.bare_html = bare_html;
        }
        if let Some(dir) = &settings.assets_dir {
            self.assets_resolved.dir.clone_from(dir);
        }
    }

    /// Search for the config file in the current directory and its parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            assets: AssetsConfigRaw::default(),
            input_resolved: InputConfig::default(),
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                bare_html: false,
            },
            assets_resolved: AssetsConfig {
                dir: base.join(DEFAULT_ASSETS_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        // Validate raw values before they are joined onto the config directory
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.output.dir {
            require_non_empty(dir, "output.dir")?;
        }
        if let Some(symbols) = &self.input.symbols {
            require_non_empty(symbols, "input.symbols")?;
        }
        if let Some(dir) = &self.assets.dir {
            require_non_empty(dir, "assets.dir")?;
        }
        for pattern in self.input.documents.iter().flatten() {
            require_non_empty(pattern, "input.documents")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref symbols) = self.input.symbols {
            self.input.symbols = Some(expand::expand_env(symbols, "input.symbols")?);
        }
        if let Some(ref mut documents) = self.input.documents {
            for pattern in documents.iter_mut() {
                *pattern = expand::expand_env(pattern, "input.documents")?;
            }
        }
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        if let Some(ref dir) = self.assets.dir {
            self.assets.dir = Some(expand::expand_env(dir, "assets.dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve =
            |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            symbols: self.input.symbols.as_deref().map(|p| config_dir.join(p)),
            documents: self
                .input
                .documents
                .iter()
                .flatten()
                .map(|pattern| config_dir.join(pattern).to_string_lossy().into_owned())
                .collect(),
        };
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            bare_html: self.output.bare_html.unwrap_or(false),
        };
        self.assets_resolved = AssetsConfig {
            dir: resolve(self.assets.dir.as_deref(), DEFAULT_ASSETS_DIR),
        };
    }
}
