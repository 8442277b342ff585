use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub write_mode: WriteMode,
    #[serde(default)]
    pub record_scope: RecordScope,
    #[serde(default)]
    pub storage: StorageConfig,
    /// URL-decode notification keys before use
    #[serde(default)]
    pub decode_keys: bool,
}

/// How the sidecar write relates to the invocation's completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Await the write before completing the invocation
    #[default]
    Sync,
    /// Spawn the write and complete immediately; delivery is not guaranteed
    FireAndForget,
}

/// Which notification records an invocation processes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecordScope {
    #[default]
    All,
    /// Only the first record of the batch
    First,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    S3(S3StorageConfig),
    Memory,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::S3(S3StorageConfig::default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Yaml(serde_yml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Json(e) => write!(f, "invalid JSON config: {}", e),
            ConfigError::Yaml(e) => write!(f, "invalid YAML config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load from a JSON file, or YAML when the extension is `.yaml`/`.yml`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            serde_yml::from_str(&content).map_err(ConfigError::Yaml)
        } else {
            serde_json::from_str(&content).map_err(ConfigError::Json)
        }
    }
}

/// Handler settings; Lambda passes no arguments, so these come from the environment
#[derive(Parser, Debug)]
#[command(name = "metasidecar")]
#[command(about = "S3 object metadata sidecar and Kinesis payload logger", long_about = None)]
pub struct Cli {
    /// Optional configuration file (JSON or YAML)
    #[arg(short, long, env = "CONFIG_PATH")]
    pub config: Option<String>,

    /// Whether sidecar writes are awaited or spawned
    #[arg(long, env = "WRITE_MODE", value_enum)]
    pub write_mode: Option<WriteMode>,

    /// Process every notification record or only the first
    #[arg(long, env = "RECORD_SCOPE", value_enum)]
    pub record_scope: Option<RecordScope>,

    /// URL-decode notification keys before deriving sidecar keys
    #[arg(long, env = "DECODE_KEYS")]
    pub decode_keys: Option<bool>,

    /// AWS region for the S3 client
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom S3 endpoint
    #[arg(long, env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use path-style S3 addressing
    #[arg(long, env = "S3_FORCE_PATH_STYLE")]
    pub force_path_style: Option<bool>,
}

impl Cli {
    /// Resolve the effective configuration: file first, then explicit overrides
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(write_mode) = self.write_mode {
            config.write_mode = write_mode;
        }
        if let Some(record_scope) = self.record_scope {
            config.record_scope = record_scope;
        }
        if let Some(decode_keys) = self.decode_keys {
            config.decode_keys = decode_keys;
        }

        if let StorageConfig::S3(s3) = &mut config.storage {
            if self.region.is_some() {
                s3.region = self.region;
            }
            if self.endpoint.is_some() {
                s3.endpoint = self.endpoint;
            }
            if let Some(force_path_style) = self.force_path_style {
                s3.force_path_style = force_path_style;
            }
        }

        Ok(config)
    }
}
