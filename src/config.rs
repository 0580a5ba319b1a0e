//! Configuration for the video catalog.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SITE_ENV, SITE_VIDEOS_CATALOG)
//! 2. Config file (.site/config.yaml)
//! 3. Defaults (development mode, built-in catalog)
//!
//! Config file discovery:
//! - Searches current directory and parents for .site/config.yaml
//! - Falls back to <config dir>/site-videos/config.yaml
//! - The catalog path is relative to the project root (parent of .site/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable selecting the build mode
pub const ENV_MODE: &str = "SITE_ENV";

/// Environment variable pointing at a catalog file
pub const ENV_CATALOG: &str = "SITE_VIDEOS_CATALOG";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Whether the site is built for a live deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// Local development or preview; drafts are shown
    #[default]
    Development,

    /// Live deployment; drafts are hidden
    Production,
}

impl BuildMode {
    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(BuildMode::Production),
            "development" | "dev" => Ok(BuildMode::Development),
            _ => anyhow::bail!("Unknown build mode: {}", s),
        }
    }
}

/// Site-wide settings. Carried for the site build; the catalog itself
/// never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: String,
}

fn default_title() -> String {
    "Talks & Interviews".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: String::new(),
            url: None,
            description: String::new(),
        }
    }
}

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub mode: Option<BuildMode>,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Values read from the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub mode: Option<String>,
    pub catalog: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            mode: std::env::var(ENV_MODE).ok(),
            catalog: std::env::var(ENV_CATALOG).ok(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Draft filtering mode
    pub mode: BuildMode,
    /// Catalog file to load instead of the built-in catalog
    pub catalog_file: Option<PathBuf>,
    /// Site-wide settings
    pub site: SiteConfig,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".site").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("site-videos").join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Catalog file from env or config file; never looks at the build mode
fn resolve_catalog_file(file: Option<&(PathBuf, ConfigFile)>, env: &EnvOverrides) -> Option<PathBuf> {
    if let Some(path) = env.catalog.as_deref() {
        return Some(PathBuf::from(path));
    }

    let (config_path, config) = file?;

    // Project root is the parent of .site/ (i.e., grandparent of config.yaml)
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."));

    config
        .catalog
        .as_deref()
        .map(|c| resolve_path(base_dir, c))
}

/// Combine config file and environment into the final configuration
fn resolve_config(
    file: Option<(PathBuf, ConfigFile)>,
    env: &EnvOverrides,
) -> Result<ResolvedConfig> {
    let env_mode = env
        .mode
        .as_deref()
        .map(str::parse::<BuildMode>)
        .transpose()
        .with_context(|| format!("Invalid {}", ENV_MODE))?;

    let catalog_file = resolve_catalog_file(file.as_ref(), env);

    let Some((config_path, config)) = file else {
        return Ok(ResolvedConfig {
            mode: env_mode.unwrap_or_default(),
            catalog_file,
            site: SiteConfig::default(),
            config_file: None,
        });
    };

    Ok(ResolvedConfig {
        mode: env_mode.or(config.mode).unwrap_or_default(),
        catalog_file,
        site: config.site,
        config_file: Some(config_path),
    })
}

/// Find and parse the config file, if any
fn discover_config_file() -> Result<Option<(PathBuf, ConfigFile)>> {
    match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Ok(Some((path, config)))
        }
        None => Ok(None),
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = discover_config_file()?;

    let resolved = resolve_config(file, &EnvOverrides::from_env())?;
    debug!(
        mode = %resolved.mode,
        config_file = ?resolved.config_file,
        catalog_file = ?resolved.catalog_file,
        "Resolved configuration"
    );
    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Catalog file to load, resolved without the build mode.
///
/// Lets `--production` work even when `SITE_ENV` holds an unknown value.
pub fn catalog_file() -> Result<Option<PathBuf>> {
    if let Ok(config) = config() {
        return Ok(config.catalog_file.clone());
    }

    let file = discover_config_file()?;
    Ok(resolve_catalog_file(file.as_ref(), &EnvOverrides::from_env()))
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
