// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{ConfigError, ValidatedConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical locations inside the runtime root. The dist directory is created
/// when absent so asset serving always has a directory to work against; the
/// build artifacts inside it (index.html, blog/data.json) may still be
/// missing, which the loaders treat as a degraded but serviceable state.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub dist_dir: PathBuf,
    pub index_file: PathBuf,
    pub blog_data_file: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path, config: &ValidatedConfig) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        if !root_path.exists() {
            fs::create_dir_all(&root_path).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Failed to create runtime root '{}': {}",
                    root_path.display(),
                    e
                ))
            })?;
        }

        let root_canonical = root_path.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize runtime root '{}': {}",
                root_path.display(),
                e
            ))
        })?;

        let config_file = root_canonical.join("config.yaml");

        let dist_dir = root_canonical.join(&config.site.dist_dir);
        ensure_dir_exists(&dist_dir)?;
        let dist_dir = dist_dir.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize dist directory '{}': {}",
                dist_dir.display(),
                e
            ))
        })?;

        let index_file = dist_dir.join("index.html");
        let blog_data_file = dist_dir.join("blog").join("data.json");

        Ok(Self {
            root: root_canonical,
            config_file,
            dist_dir,
            index_file,
            blog_data_file,
        })
    }
}

fn ensure_dir_exists(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    if !path.is_dir() {
        return Err(ConfigError::ValidationError(format!(
            "Not a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
