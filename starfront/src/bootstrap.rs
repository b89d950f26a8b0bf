// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use crate::runtime_paths::RuntimePaths;
use std::error::Error;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub runtime_paths: RuntimePaths,
    pub created_config: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

/// Prepares the runtime root for a server run: writes a default config.yaml on
/// first start, validates the configuration and resolves canonical paths.
pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let root_path = normalize_root(root)?;

    let created_config = ensure_config(&root_path)?;

    let validated_config = Config::load_and_validate(&root_path).map_err(BootstrapError::Config)?;

    let runtime_paths = RuntimePaths::from_root(&root_path, &validated_config)?;

    Ok(BootstrapResult {
        validated_config,
        runtime_paths,
        created_config,
    })
}

fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let config_path = root.join("config.yaml");

    if config_path.exists() {
        return Ok(false);
    }

    let contents = default_config_yaml();

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    log_action("created config.yaml with default settings");

    Ok(true)
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

fn default_config_yaml() -> String {
    [
        "server:",
        "  host: 127.0.0.1",
        "  port: 8080",
        "  workers: 4",
        "",
        "app:",
        "  name: Star History",
        "  description: Frontend service for the Star History single-page app",
        "",
        "site:",
        "  # Absolute base URL of this deployment, without a trailing slash.",
        "  instance_url: https://www.star-history.com",
        "  # Built frontend artifacts, relative to the runtime root.",
        "  dist_dir: dist",
        "",
        "logging:",
        "  level: info",
        "",
    ]
    .join("\n")
}

// Logging is not initialized yet while bootstrap runs, so messages go to stderr.
pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}
