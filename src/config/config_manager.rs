use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, KNOWN_LOG_LEVELS};
use crate::errors::{SessionDeskError, SessionDeskResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the home directory when present, otherwise defaults. The
    /// base URL environment variable wins over both.
    pub fn load() -> SessionDeskResult<Config> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => Config::default(),
        };
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load_from(path: &Path) -> SessionDeskResult<Config> {
        let mut config = Self::read_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// The configured log level, read without logging so it can run before the
    /// logger exists. Any problem falls back to the default level.
    pub fn log_level(path: Option<&Path>) -> String {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path(),
        };
        path.filter(|path| path.exists())
            .and_then(|path| Self::parse_file(&path).ok())
            .map_or_else(|| DEFAULT_LOG_LEVEL.to_string(), |config| config.logging.level)
    }

    fn read_file(path: &Path) -> SessionDeskResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        Self::parse_file(path)
    }

    fn parse_file(path: &Path) -> SessionDeskResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| SessionDeskError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| SessionDeskError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                log::debug!("Using {} = {}", BASE_URL_ENV, base_url);
                config.api.base_url = base_url.trim().to_string();
            }
        }
    }

    pub fn sample_config() -> &'static str {
        r#"# Session Desk configuration

[api]
# Root of the sessions REST backend
base_url = "http://localhost:8082/api"

# Per-request timeout in seconds
timeout_secs = 30

# Keep the backend's auth cookie and send it with every request
include_credentials = true

[ui]
# How long success banners stay visible (seconds)
banner_ttl_secs = 3

# Ask before deleting a session
confirm_deletes = true

[logging]
# off, error, warn, info, debug, trace (RUST_LOG overrides this)
level = "info"
"#
    }

    pub fn create_sample_config() -> SessionDeskResult<PathBuf> {
        let path = Self::default_path().ok_or_else(|| {
            SessionDeskError::config_error("Cannot locate the home directory", None, Some("Pass --config explicitly"))
        })?;
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> SessionDeskResult<()> {
        if path.exists() {
            return Err(SessionDeskError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }
        let to_file_error = |e: std::io::Error| SessionDeskError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(to_file_error)?;
        }
        fs::write(path, Self::sample_config()).map_err(to_file_error)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let base_url = config.api.base_url.trim();
        match reqwest::Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                if url.scheme() == "http" && url.host_str().is_some_and(|h| h != "localhost" && h != "127.0.0.1") {
                    warnings.push(format!("api.base_url '{}' sends credentials over plain http", base_url));
                }
            }
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {}", base_url, e)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }

        if config.ui.banner_ttl_secs == 0 {
            errors.push("ui.banner_ttl_secs must be greater than 0".to_string());
        }

        if !KNOWN_LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "logging.level '{}' is not one of: {}",
                config.logging.level,
                KNOWN_LOG_LEVELS.join(", ")
            ));
        }

        if !config.api.include_credentials {
            warnings.push("api.include_credentials is off; authenticated endpoints will reject requests".to_string());
        }

        ValidationResult::from_findings(errors, warnings)
    }
}
