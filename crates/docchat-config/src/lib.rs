//! Configuration management for docchat.
//!
//! Parses `docchat.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `completion.api_url`
//! - `completion.api_key`
//! - `completion.model`
//!
//! The API key defaults to `${XAI_API_KEY:-}`, so it is picked up from the
//! environment even without a config file.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the source document path.
    pub document: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docchat.toml";

/// Default request body ceiling (16 MiB).
const DEFAULT_MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Source document configuration (path is a relative string from TOML).
    #[serde(default)]
    source: SourceConfigRaw,
    /// Completion API configuration.
    pub completion: CompletionConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            cors_origins: vec!["http://localhost:3000".to_owned()],
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

/// Raw source configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    document: Option<String>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Word document the answers are grounded on.
    pub document: PathBuf,
}

/// Completion API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Chat completions endpoint.
    pub api_url: String,
    /// Bearer token for the endpoint.
    pub api_key: String,
    /// Model name sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.x.ai/v1/chat/completions".to_owned(),
            api_key: "${XAI_API_KEY:-}".to_owned(),
            model: "grok-beta".to_owned(),
            temperature: 0.0,
            timeout_secs: 60,
        }
    }
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
        /// Config field path (e.g., "`completion.api_key`").
        field: String,
        /// Error message (e.g., "${`XAI_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docchat.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// a referenced environment variable is unset, or validation fails.
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
            let mut config = Self::default_with_cwd();
            config.expand_env_vars()?;
            config
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(document) = &settings.document {
            self.source_resolved.document.clone_from(document);
        }
    }

    /// Get the completion API key, requiring it to be set.
    ///
    /// Rendering works without a key; only commands that call the completion
    /// API need one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the key is empty.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.completion.api_key.is_empty() {
            return Err(ConfigError::Validation(
                "completion.api_key is not set (set XAI_API_KEY or add it to docchat.toml)"
                    .to_owned(),
            ));
        }
        Ok(&self.completion.api_key)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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
            server: ServerConfig::default(),
            source: SourceConfigRaw::default(),
            completion: CompletionConfig::default(),
            source_resolved: SourceConfig {
                document: base.join("document.docx"),
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

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_completion()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        if self.server.max_body_size == 0 {
            return Err(ConfigError::Validation(
                "server.max_body_size must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate completion configuration.
    fn validate_completion(&self) -> Result<(), ConfigError> {
        const MAX_TEMPERATURE: f64 = 2.0;

        let completion = &self.completion;
        require_non_empty(&completion.api_url, "completion.api_url")?;
        require_http_url(&completion.api_url, "completion.api_url")?;
        require_non_empty(&completion.model, "completion.model")?;

        if !(0.0..=MAX_TEMPERATURE).contains(&completion.temperature) {
            return Err(ConfigError::Validation(format!(
                "completion.temperature must be between 0 and {MAX_TEMPERATURE}"
            )));
        }

        if completion.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "completion.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let completion = &mut self.completion;
        completion.api_url = expand::expand_env(&completion.api_url, "completion.api_url")?;
        completion.api_key = expand::expand_env(&completion.api_key, "completion.api_key")?;
        completion.model = expand::expand_env(&completion.model, "completion.model")?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_resolved = SourceConfig {
            document: config_dir.join(self.source.document.as_deref().unwrap_or("document.docx")),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.server.max_body_size, 16 * 1024 * 1024);
        assert_eq!(
            config.source_resolved.document,
            PathBuf::from("/test/document.docx")
        );
        assert_eq!(
            config.completion.api_url,
            "https://api.x.ai/v1/chat/completions"
        );
        assert_eq!(config.completion.model, "grok-beta");
        assert!(config.completion.temperature.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.completion.timeout_secs, 60);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
cors_origins = ["https://chat.example.com"]
max_body_size = 1024
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.cors_origins, vec!["https://chat.example.com"]);
        assert_eq!(config.server.max_body_size, 1024);
    }

    #[test]
    fn test_parse_completion_config() {
        let toml = r#"
[completion]
api_url = "https://llm.internal/v1/chat/completions"
api_key = "secret"
model = "local-model"
temperature = 0.7
timeout_secs = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.completion.api_url,
            "https://llm.internal/v1/chat/completions"
        );
        assert_eq!(config.completion.api_key, "secret");
        assert_eq!(config.completion.model, "local-model");
        assert!((config.completion.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.completion.timeout_secs, 10);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[source]
document = "guides/handbook.docx"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.source_resolved.document,
            PathBuf::from("/project/guides/handbook.docx")
        );
    }

    #[test]
    fn test_resolve_paths_default_document() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.source_resolved.document,
            PathBuf::from("/project/document.docx")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[server]
port = 8123

[source]
document = "answers.docx"

[completion]
api_key = "file-key"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.source_resolved.document, dir.path().join("answers.docx"));
        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.require_api_key().unwrap(), "file-key");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/docchat.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\nport = 1").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_after_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            port: Some(0),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_apply_cli_settings_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_port() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            port: Some(9000),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_document() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            document: Some(PathBuf::from("/data/guide.docx")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.source_resolved.document,
            PathBuf::from("/data/guide.docx")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(
            config.source_resolved.document,
            PathBuf::from("/test/document.docx")
        );
    }

    #[test]
    fn test_expand_env_vars_completion() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCCHAT_CFG_KEY", "env-key");
            std::env::set_var("DOCCHAT_CFG_MODEL", "grok-2");
        }

        let toml = r#"
[completion]
api_key = "${DOCCHAT_CFG_KEY}"
model = "${DOCCHAT_CFG_MODEL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.completion.api_key, "env-key");
        assert_eq!(config.completion.model, "grok-2");

        unsafe {
            std::env::remove_var("DOCCHAT_CFG_KEY");
            std::env::remove_var("DOCCHAT_CFG_MODEL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCCHAT_CFG_MISSING");
        }

        let toml = r#"
[completion]
api_url = "${DOCCHAT_CFG_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCCHAT_CFG_MISSING"));
        assert!(err.to_string().contains("completion.api_url"));
    }

    #[test]
    fn test_require_api_key_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.completion.api_key = String::new();
        let err = config.require_api_key().unwrap_err();
        assert!(err.to_string().contains("completion.api_key"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.expand_env_vars().unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_validate_max_body_size_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.max_body_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.max_body_size"));
    }

    #[test]
    fn test_validate_api_url_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.completion.api_url = "ftp://api.example.com".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http:// or https://"));
    }

    #[test]
    fn test_validate_model_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.completion.model = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("completion.model"));
    }

    #[test]
    fn test_validate_temperature_out_of_range() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.completion.temperature = 3.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("completion.temperature"));
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.completion.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("completion.timeout_secs"));
    }
}
