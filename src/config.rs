use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".grepctx";
const CONFIG_FILE: &str = "config.toml";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "grepctx";
const APP_NAME: &str = "grepctx";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub symbols: SymbolsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the `git grep` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Executable to run (normally `git`)
    #[serde(default = "default_program")]
    pub program: String,

    /// Seconds to wait for the search before giving up
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Treat the query as a fixed string (`-F`) instead of a basic regex
    #[serde(default)]
    pub fixed_strings: bool,

    /// Case-insensitive matching (`-i`)
    #[serde(default)]
    pub ignore_case: bool,

    /// Pathspecs appended after `--` to narrow the search
    #[serde(default)]
    pub pathspecs: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: default_timeout_secs(),
            fixed_strings: false,
            ignore_case: false,
            pathspecs: Vec::new(),
        }
    }
}

fn default_program() -> String {
    "git".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolsConfig {
    /// Extract top-level definitions for matched files
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extract definitions on a rayon pool instead of in match order
    #[serde(default)]
    pub parallel: bool,

    /// Files larger than this are not parsed
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parallel: false,
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to rolling files
    #[serde(default)]
    pub enabled: bool,

    /// Write logs to stderr
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// Level for the file layer: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log directory, relative paths resolve against the project root
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Rotation: hourly, daily, minutely, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stderr: true,
            level: default_log_level(),
            directory: default_log_directory(),
            file_prefix: default_file_prefix(),
            rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join("logs")
}

fn default_file_prefix() -> String {
    "grepctx.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration for a project.
    ///
    /// Looks for `.grepctx/config.toml` under `root`, then for the user-level
    /// config file, and falls back to defaults when neither exists.
    pub fn load(root: &Path) -> Result<Self> {
        let local_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if local_path.exists() {
            return Self::load_file(&local_path);
        }

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                return Self::load_file(&global_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Load configuration from an explicit file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;

        Ok(config)
    }

    /// Reject values that would make every search fail.
    pub fn validate(&self) -> Result<()> {
        if self.search.timeout_secs == 0 {
            bail!("search.timeout_secs must be at least 1");
        }
        if self.search.program.trim().is_empty() {
            bail!("search.program must not be empty");
        }
        Ok(())
    }

    /// Save configuration to the .grepctx directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_dir = root.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the .grepctx directory
    pub fn config_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    /// Check if grepctx is initialized in the given directory
    pub fn is_initialized(root: &Path) -> bool {
        Self::config_dir(root).join(CONFIG_FILE).exists()
    }

    /// User-level config file (e.g. `~/.config/grepctx/config.toml`).
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
