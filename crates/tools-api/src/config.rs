use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "india-tools.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: default_max_body_size_kb() }
    }
}

impl LimitsConfig {
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_size_kb.saturating_mul(1024)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ToolsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ToolsConfig {
    /// Load from `path`, or from `TOOLS_CONFIG_PATH` / [`DEFAULT_CONFIG_PATH`].
    ///
    /// A missing file yields the defaults; a file that exists but does not parse
    /// is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(|| {
            std::env::var("TOOLS_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
        });

        if !config_path.exists() {
            warn!(
                "Configuration file '{}' not found. Using default configuration.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("failed to parse {}", config_path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `TOOLS_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("TOOLS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TOOLS_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %port, "Ignoring invalid TOOLS_PORT"),
            }
        }
        if let Some(limit) = lookup("TOOLS_MAX_BODY_SIZE_KB") {
            match limit.parse::<usize>() {
                Ok(limit) => self.limits.max_body_size_kb = limit,
                Err(_) => warn!(value = %limit, "Ignoring invalid TOOLS_MAX_BODY_SIZE_KB"),
            }
        }
        if let Some(filter) = lookup("TOOLS_LOG_FILTER") {
            self.logging.filter = filter;
        }
        if let Some(json) = lookup("TOOLS_LOG_JSON") {
            match json.parse::<bool>() {
                Ok(json) => self.logging.json = json,
                Err(_) => warn!(value = %json, "Ignoring invalid TOOLS_LOG_JSON"),
            }
        }

        info!(address = %self.server.bind_address(), "Configuration resolved");
        self
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_max_body_size_kb() -> usize {
    64
}
fn default_log_filter() -> String {
    "india_tools=info,tools_api=info,tower_http=info".to_string()
}
