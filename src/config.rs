// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClaimDeskError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub policies: PolicyConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    pub directory: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    pub capacity: usize,
    pub recent_limit: usize,
    pub claim_preview_chars: usize,
    pub justification_preview_chars: usize,
}

fn default_extension() -> String {
    "pdf".to_string()
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            recent_limit: 10,
            claim_preview_chars: 100,
            justification_preview_chars: 200,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CLAIM_DESK")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClaimDeskError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClaimDeskError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            policies: PolicyConfig {
                directory: PathBuf::from("."),
                extension: default_extension(),
            },
            history: HistoryConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ClaimDeskError::Config("port must be greater than 0".to_string()));
        }

        if self.history.capacity == 0 {
            return Err(ClaimDeskError::Config(
                "history capacity must be greater than 0".to_string(),
            ));
        }

        if self.history.recent_limit == 0 {
            return Err(ClaimDeskError::Config(
                "recent_limit must be greater than 0".to_string(),
            ));
        }

        if self.policies.extension.trim().is_empty() {
            return Err(ClaimDeskError::Config(
                "policy extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.policies.extension, "pdf");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("claim_desk.toml");
        fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 8088

[policies]
directory = "./policies"

[history]
capacity = 20
recent_limit = 5
claim_preview_chars = 100
justification_preview_chars = 200
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8088");
        assert_eq!(config.policies.directory, PathBuf::from("./policies"));
        assert_eq!(config.policies.extension, "pdf");
        assert_eq!(config.history.capacity, 20);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = Config::default_config();
        config.history.capacity = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
