//! Configuration loading.
//!
//! One human-owned TOML file, looked up in this order:
//! - the `--config` flag
//! - `$SEDC_SIGNATURE_CONFIG`
//! - `~/.sedc-signature/config.toml`
//!
//! A missing file yields defaults. The Graph token is never stored here;
//! see [`crate::credentials`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::profile::graph::DEFAULT_GRAPH_URL;
use crate::render::Template;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SEDC_SIGNATURE_CONFIG";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (Microsoft Graph) access.
    pub graph: GraphConfig,

    /// Form defaults.
    pub defaults: DefaultsConfig,

    /// Office reference data.
    pub offices: OfficesConfig,

    /// Log output.
    pub logging: LoggingConfig,
}

/// Graph API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// API base URL.
    pub base_url: String,

    /// Environment variable holding the bearer token.
    pub token_env: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAPH_URL.to_owned(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Initial form values.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Template used when `--template` is not given.
    pub template: Template,

    /// Initial include-photo toggle.
    pub include_photo: bool,

    /// Initial include-office toggle.
    pub include_office: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            template: Template::default(),
            include_photo: true,
            include_office: true,
        }
    }
}

/// Office data source.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OfficesConfig {
    /// Replacement for the built-in office dataset.
    pub data_file: Option<PathBuf>,
}

/// Logging options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily-rotated JSON logs. Console only when unset.
    pub dir: Option<PathBuf>,

    /// Filter used when `RUST_LOG` is unset.
    pub level: Option<String>,
}

// Default value functions for serde

fn default_token_env() -> String {
    "SEDC_GRAPH_TOKEN".to_owned()
}
fn default_timeout_secs() -> u64 {
    15
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(config)
}

/// Resolve and load configuration, falling back to defaults when no file exists.
///
/// An explicit path (flag or env var) must exist; the default location may not.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any file is malformed.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    load_with(explicit, |key| std::env::var(key).ok())
}

/// [`load`] with a custom env resolver (for testing).
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if let Some(path) = env(CONFIG_PATH_ENV) {
        return load_config(Path::new(&path));
    }

    let path = config_dir()?.join("config.toml");
    if path.exists() {
        tracing::info!(path = %path.display(), "loading config from file");
        load_config(&path)
    } else {
        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }
}

/// Resolve the default config directory (`~/.sedc-signature/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".sedc-signature"))
}
