// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "Star History".to_string()
}

fn default_app_description() -> String {
    "Frontend service for the Star History single-page app".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Absolute base URL of this deployment. Used verbatim in robots.txt,
    /// sitemap locations and Open Graph image URLs.
    #[serde(default = "default_instance_url")]
    pub instance_url: String,
    /// Directory of built frontend artifacts, relative to the runtime root.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            instance_url: default_instance_url(),
            dist_dir: default_dist_dir(),
        }
    }
}

fn default_instance_url() -> String {
    "https://www.star-history.com".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join("config.yaml");
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        let config: Config = serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Loads and validates configuration at startup. If validation fails, the application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config = Self::load(root)?;

        Self::validate_logging(&config.logging)?;

        if config.server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }

        let instance_url = Self::validate_instance_url(&config.site.instance_url)?;

        let dist_dir = config.site.dist_dir.trim();
        if dist_dir.is_empty() {
            return Err(ConfigError::ValidationError(
                "site.dist_dir must not be empty".to_string(),
            ));
        }
        if Path::new(dist_dir).is_absolute() {
            return Err(ConfigError::ValidationError(format!(
                "site.dist_dir must be relative to the runtime root, got: {}",
                dist_dir
            )));
        }

        Ok(ValidatedConfig {
            server: config.server,
            app: config.app,
            site: SiteConfig {
                instance_url,
                dist_dir: dist_dir.to_string(),
            },
            logging: config.logging,
        })
    }

    /// Normalizes the instance base URL: absolute http(s), no trailing slash.
    fn validate_instance_url(raw: &str) -> Result<String, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::ValidationError(
                "site.instance_url must be set".to_string(),
            ));
        }

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "site.instance_url must be an absolute http(s) URL, got: {}",
                    raw
                ))
            })?;

        if host.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "site.instance_url is missing a host: {}",
                raw
            )));
        }

        Ok(trimmed.to_string())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        match logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown logging level '{}'; expected trace, debug, info, warn or error",
                other
            ))),
        }
    }
}
